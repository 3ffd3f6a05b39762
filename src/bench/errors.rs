use std::result;
use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),
}

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("Worker pool could not be built: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("Unit of work failed: {0}")]
    Unit(#[from] tokio::task::JoinError),
}

pub type BenchResult<T> = result::Result<T, BenchError>;
