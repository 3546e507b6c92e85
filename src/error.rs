//! Error types shared by the content pipeline and the calculators

use thiserror::Error;

use crate::content::FrontMatterError;

/// Errors raised while reading content from a store.
///
/// Missing files and unknown categories are not errors; queries report
/// them as `None` or an empty list. Everything here is either an I/O
/// failure or an authoring defect in a content file.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse front-matter in {path}: {source}")]
    FrontMatter {
        path: String,
        #[source]
        source: FrontMatterError,
    },

    #[error("Invalid category {value:?} in {path}")]
    InvalidCategory { path: String, value: String },

    #[error("Invalid date {value:?} in {path}")]
    InvalidDate { path: String, value: String },

    #[error("Duplicate post id {0}")]
    DuplicateId(String),
}

/// Rejected calculator input, naming the offending field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Please enter a valid age ({min}-{max})")]
    Age { min: u32, max: u32 },

    #[error("Please enter a valid weight")]
    Weight,

    #[error("Please enter a valid height")]
    Height,
}

pub type Result<T> = std::result::Result<T, ContentError>;
