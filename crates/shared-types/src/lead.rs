use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LeadError;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// One of the three inputs on the capture form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    Name,
    Email,
    Phone,
}

/// All fields in form order.
pub const ALL_FIELDS: &[LeadField] = &[LeadField::Name, LeadField::Email, LeadField::Phone];

impl LeadField {
    /// JSON key and input id.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
        }
    }

    /// HTML input type for the field.
    pub fn input_type(&self) -> &'static str {
        match self {
            LeadField::Name => "text",
            LeadField::Email => "email",
            LeadField::Phone => "tel",
        }
    }
}

// ---------------------------------------------------------------------------
// Draft / validated lead
// ---------------------------------------------------------------------------

/// Raw form values, exactly as the visitor typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl LeadDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    /// Trim every field and require all three to be non-empty.
    pub fn validate(&self) -> Result<Lead, LeadError> {
        let missing: Vec<LeadField> = ALL_FIELDS
            .iter()
            .copied()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect();

        if !missing.is_empty() {
            return Err(LeadError::MissingFields(missing));
        }

        Ok(Lead {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// A lead whose fields are trimmed and non-empty.
///
/// Only [`LeadDraft::validate`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    name: String,
    email: String,
    phone: String,
}

impl Lead {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

// ---------------------------------------------------------------------------
// Wire body
// ---------------------------------------------------------------------------

/// JSON body POSTed to the webhook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// URL of the page the form was submitted from.
    pub source: String,
    /// ISO-8601 UTC instant, millisecond precision.
    pub timestamp: String,
}

impl LeadPayload {
    pub fn new(lead: Lead, source: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            source: source.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
