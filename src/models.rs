//! Frontend Models
//!
//! Values created per click and dropped once the dialog or request is done.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the record being deleted, as the host page passes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectId {
    Int(i64),
    Text(String),
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectId::Int(id) => write!(f, "{}", id),
            SubjectId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for SubjectId {
    fn from(id: i64) -> Self {
        SubjectId::Int(id)
    }
}

impl From<u32> for SubjectId {
    fn from(id: u32) -> Self {
        SubjectId::Int(i64::from(id))
    }
}

impl From<&str> for SubjectId {
    fn from(id: &str) -> Self {
        SubjectId::Text(id.to_string())
    }
}

impl From<String> for SubjectId {
    fn from(id: String) -> Self {
        SubjectId::Text(id)
    }
}

/// The record targeted by a delete: display label plus identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSubject {
    pub label: String,
    pub id: SubjectId,
}

impl DeleteSubject {
    pub fn new(label: impl Into<String>, id: impl Into<SubjectId>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

/// Terminal state of one AJAX delete, as reported back to JavaScript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    Cancelled,
    HttpError,
    TransportError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
