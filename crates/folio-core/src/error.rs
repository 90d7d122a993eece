use thiserror::Error;

/// Rejected animation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FolioError {
    #[error("invalid range for {name}: min {min} is greater than max {max}")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("intersection threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
    #[error("particle decay must be positive, got {0}")]
    NonPositiveDecay(f32),
}

pub type Result<T> = std::result::Result<T, FolioError>;

/// Check that `min..=max` is a usable sampling range.
pub(crate) fn check_range(name: &'static str, min: f32, max: f32) -> Result<()> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(FolioError::InvalidRange { name, min, max })
    }
}
