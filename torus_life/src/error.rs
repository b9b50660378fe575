use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Invalid grid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Could not allocate storage for {cells} cells")]
    AllocationFailed { cells: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
