use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to load font {path}: {message}")]
    Font { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, LessonError>;
