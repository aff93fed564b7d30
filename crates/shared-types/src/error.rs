use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lead::LeadField;

/// Categorization of lead capture errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeadErrorKind {
    /// A required field was empty after trimming. No request was made.
    Validation,
    /// The webhook call failed or answered with a non-success status.
    Submission,
}

impl fmt::Display for LeadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadErrorKind::Validation => write!(f, "ValidationError"),
            LeadErrorKind::Submission => write!(f, "SubmissionError"),
        }
    }
}

/// Everything that can go wrong while submitting a lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    /// One or more fields were empty after trimming, in form order.
    MissingFields(Vec<LeadField>),
    /// The webhook answered with a status outside the 2xx range.
    Rejected { status: u16 },
    /// The request never produced a response.
    Transport(String),
}

impl LeadError {
    pub fn kind(&self) -> LeadErrorKind {
        match self {
            LeadError::MissingFields(_) => LeadErrorKind::Validation,
            LeadError::Rejected { .. } | LeadError::Transport(_) => LeadErrorKind::Submission,
        }
    }

    /// The transport error text, if there is any worth showing to a visitor.
    ///
    /// Validation and status failures carry no message of their own; callers
    /// substitute their configured copy for those.
    pub fn transport_message(&self) -> Option<&str> {
        match self {
            LeadError::Transport(message) if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for LeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadError::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(LeadField::as_str).collect();
                write!(f, "{}: missing {}", self.kind(), names.join(", "))
            }
            LeadError::Rejected { status } => {
                write!(f, "{}: webhook responded with status {}", self.kind(), status)
            }
            LeadError::Transport(message) => write!(f, "{}: {}", self.kind(), message),
        }
    }
}

impl std::error::Error for LeadError {}
