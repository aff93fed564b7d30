use shared_types::{LeadCopy, LeadError, LeadPayload};

/// Tone of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// What the visitor is told once a submission attempt concludes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn from_result(result: &Result<LeadPayload, LeadError>, copy: &LeadCopy) -> Self {
        match result {
            Ok(_) => Self {
                severity: Severity::Success,
                title: copy.success_title.clone(),
                description: copy.success_message.clone(),
            },
            Err(err) => Self {
                severity: Severity::Error,
                title: copy.error_title.clone(),
                description: error_description(err, copy),
            },
        }
    }
}

fn error_description(err: &LeadError, copy: &LeadCopy) -> String {
    match err {
        LeadError::MissingFields(_) => copy.validation_message.clone(),
        LeadError::Rejected { .. } => copy.rejected_message.clone(),
        LeadError::Transport(_) => err
            .transport_message()
            .map(str::to_string)
            .unwrap_or_else(|| copy.fallback_message.clone()),
    }
}
