use shared_types::{LeadDraft, LeadError, LeadErrorKind, LeadField, LeadPayload};

/// State the capture dialog owns between renders: the values typed so far
/// and whether a submission is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub draft: LeadDraft,
    pub submitting: bool,
}

impl LeadForm {
    pub fn edit(&mut self, field: LeadField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Enter the submitting state and hand out a snapshot of the draft.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin(&mut self) -> Option<LeadDraft> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Leave the submitting state. The draft is cleared only when the
    /// webhook accepted the lead; on any error it keeps what was typed.
    pub fn finish(&mut self, result: &Result<LeadPayload, LeadError>) {
        self.submitting = false;
        match result {
            Ok(_) => self.draft.clear(),
            Err(err) if err.kind() == LeadErrorKind::Validation => {
                tracing::warn!(error = %err, "Lead form incomplete");
            }
            Err(err) => {
                tracing::error!(error = %err, kind = %err.kind(), "Failed to submit lead");
            }
        }
    }
}
