use openelev::OpenElevError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("missing required parameters")]
    Builder,

    #[error("sample count must be at least 1")]
    SampleCount,

    #[error("elevation source returned {got} values for {expected} points")]
    ElevationCount { expected: usize, got: usize },

    #[error("{0}")]
    OpenElev(#[from] OpenElevError),
}
