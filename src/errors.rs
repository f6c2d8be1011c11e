// ABOUTME: Error types for the slider-export application
// ABOUTME: Provides structured error handling for loading, editing and exporting slider decks

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliderError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Invalid slider JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Cannot delete the last slide")]
    LastSlide,

    #[error("Slide index {index} out of range (deck has {len} slides)")]
    SlideIndexOutOfRange { index: usize, len: usize },

    #[error("Button not found: {0}")]
    ButtonNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Watch error: {0}")]
    WatchError(String),
}

pub type Result<T> = std::result::Result<T, SliderError>;
