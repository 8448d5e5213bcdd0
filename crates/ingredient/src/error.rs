use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("scale factor must be a positive finite number, got {0}")]
    InvalidFactor(f64),
}
