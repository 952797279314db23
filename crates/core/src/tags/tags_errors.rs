use thiserror::Error;

use crate::errors::ErrorKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Tag name can not be empty")]
    EmptyName,

    #[error("Tag with name {0} already exists.")]
    DuplicateTag(String),

    #[error("Tried to delete tag with name {0} but it does not exist")]
    UnknownTag(String),

    #[error("Invalid {field} color {value}. Expected six hexadecimal digits")]
    InvalidColor { field: &'static str, value: String },
}

impl TagError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TagError::EmptyName | TagError::InvalidColor { .. } => ErrorKind::Shape,
            TagError::DuplicateTag(_) => ErrorKind::UniquenessViolation,
            TagError::UnknownTag(_) => ErrorKind::ReferentialConflict,
        }
    }
}
