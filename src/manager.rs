use crate::analysis::Analyzer;
use crate::config::Config;
use crate::plot::render_bar_chart;
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub struct Manager {
    input_file: PathBuf,
    out_dir: PathBuf,
    cfg: Config,
}

impl Manager {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input_file: P, out_dir: Q, cfg: Config) -> Self {
        log::info!("{cfg:#?}");
        Self {
            input_file: input_file.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
            cfg,
        }
    }

    /// Summarize the input file and write the restore duration and memory footprint charts.
    ///
    /// Either both charts are written or neither is.
    pub fn run_analysis(&self) -> Result<()> {
        let mut analyzer = Analyzer::new();
        analyzer
            .add_file(&self.input_file)
            .context("failed to add file")?;
        let report = analyzer.finish();
        report.log_summary();

        let duration_svg = render_bar_chart(
            &report.restore_duration,
            "Restore Duration(sec)",
            &self.cfg.chart,
        )
        .context("failed to draw restore duration chart")?;
        let footprint_svg = render_bar_chart(
            &report.memory_footprint,
            "Memory Footprint(KiB)",
            &self.cfg.chart,
        )
        .context("failed to draw memory footprint chart")?;

        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create {:?}", self.out_dir))?;

        let duration_file = self.out_dir.join(&self.cfg.output.duration_chart);
        let footprint_file = self.out_dir.join(&self.cfg.output.footprint_chart);

        write_chart(&duration_file, &duration_svg)?;
        if let Err(error) = write_chart(&footprint_file, &footprint_svg) {
            fs::remove_file(&duration_file).ok();
            return Err(error);
        }

        Ok(())
    }
}

fn write_chart(file: &Path, svg: &str) -> Result<()> {
    fs::write(file, svg).with_context(|| format!("failed to write {file:?}"))?;
    log::info!("wrote {file:?}");
    Ok(())
}
