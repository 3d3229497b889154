use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Chart and output configuration.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub chart: ChartConfig,
    pub output: OutputConfig,
}

/// Chart layout parameters.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Caption of the x axis.
    pub x_label: String,
    /// Fraction of each category occupied by its bar.
    pub bar_width: f64,
}

/// Names of the chart files written to the output directory.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub duration_chart: String,
    pub footprint_chart: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            x_label: "#replicas=4".to_string(),
            bar_width: 0.5,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            duration_chart: "Restore_Duration.svg".to_string(),
            footprint_chart: "Memory_Footprint.svg".to_string(),
        }
    }
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// The file must be TOML-encoded; missing keys take their default values.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.chart.width, 100..10_000).context("invalid chart width")?;
        check_num(self.chart.height, 100..10_000).context("invalid chart height")?;
        check_num(self.chart.bar_width, 0.05..=1.0).context("invalid bar width")?;

        check_file_name(&self.output.duration_chart).context("invalid duration chart name")?;
        check_file_name(&self.output.footprint_chart).context("invalid footprint chart name")?;
        if self.output.duration_chart == self.output.footprint_chart {
            bail!("duration and footprint charts must have different file names");
        }

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

fn check_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("file name must not be empty");
    }
    if name.contains(['/', '\\']) {
        bail!("file name must not contain a path separator, but is {name:?}");
    }
    Ok(())
}
