/// Mean and standard deviation of a sample sequence.
///
/// Both values are `NaN` when the sequence is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn undefined() -> Self {
        Self {
            mean: f64::NAN,
            std_dev: f64::NAN,
        }
    }

    pub fn from_values(vals: &[f64]) -> Self {
        Self {
            mean: compute_mean(vals),
            std_dev: compute_var(vals).sqrt(),
        }
    }

    pub fn is_defined(&self) -> bool {
        !self.mean.is_nan()
    }
}

fn compute_mean(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    vals.iter().sum::<f64>() / vals.len() as f64
}

/// Population variance (denominator `n`), computed in two passes.
fn compute_var(vals: &[f64]) -> f64 {
    let n_vals = vals.len();
    if n_vals == 0 {
        return f64::NAN;
    }
    let mean = compute_mean(vals);
    vals.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / n_vals as f64
}
