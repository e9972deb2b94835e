use thiserror::Error;

use crate::models::{IntentCategory, Language};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("response bank has no greeting replies for language `{}`", .0.as_code())]
    MissingDefaultBucket(Language),
    #[error("response bucket ({}, {}) is empty", .0.as_code(), .1.as_str())]
    EmptyBucket(Language, IntentCategory),
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),
    #[error("unknown intent category `{0}`")]
    UnknownIntent(String),
    #[error("no alert with id {0}")]
    UnknownAlert(u32),
}
