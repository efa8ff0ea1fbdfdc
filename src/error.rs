/// Crate-level error type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid wavelength: {0} nm (must be finite and > 0)")]
    InvalidWavelength(f64),

    #[error("Invalid sample count: {0} (need at least 2)")]
    InvalidSampleCount(usize),

    #[error("Invalid band '{name}': {reason}")]
    InvalidBand { name: String, reason: String },

    #[error("Unknown color band: {0}")]
    UnknownBand(String),

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn plot(message: impl std::fmt::Display) -> Self {
        Self::Plot(message.to_string())
    }
}
