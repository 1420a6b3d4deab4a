use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecError>;

#[derive(Error, Debug)]
pub enum RecError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Vocabulary is empty: the fitted corpus produced no usable terms")]
    DegenerateCorpus,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod catalog;
pub mod commands;
pub mod config;
pub mod interactions;
pub mod recommend;
pub mod text;
