//! Platform-independent lead submission: configuration, webhook delivery,
//! and the submit flow the capture dialog drives.

pub mod capture;
pub mod config;
pub mod form;
pub mod notice;
pub mod page;
pub mod webhook;

pub use capture::{CaptureSettings, LeadCapture};
pub use form::LeadForm;
pub use notice::{Notice, Severity};
pub use page::PageContext;
pub use webhook::{HttpWebhook, LeadWebhook};
