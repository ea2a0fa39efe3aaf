//! Validated schemas for the documents the API stores.
//!
//! Each schema derives [`Validate`]; [`validate`] turns the `validator`
//! report into [`FieldErrors`] so callers see every violated field at once.

mod contact;
mod profile;
mod project;

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError};

use crate::error::{CoreError, FieldErrors};

pub use contact::ContactMessage;
pub use profile::Profile;
pub use project::Project;

/// Collection holding the single authoritative profile.
pub const PROFILE_COLLECTION: &str = "profile";

/// Collection holding portfolio projects.
pub const PROJECT_COLLECTION: &str = "project";

/// Collection holding submitted contact messages.
pub const CONTACT_MESSAGE_COLLECTION: &str = "contactmessage";

/// A validated record bound to the collection it is stored in.
pub trait Schema: Validate + Serialize + Sized {
    /// Name of the collection instances are stored in.
    const COLLECTION: &'static str;

    /// Consume `self`, returning it unchanged if every constraint holds.
    fn validated(self) -> Result<Self, CoreError> {
        validate(&self)?;
        Ok(self)
    }
}

/// Run the derived validators and collect all violations.
pub fn validate<T: Validate>(value: &T) -> Result<(), CoreError> {
    let report = match value.validate() {
        Ok(()) => return Ok(()),
        Err(report) => report,
    };

    let mut errors = FieldErrors::new();
    for (field, violations) in report.field_errors() {
        for violation in violations {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("failed '{}' check", violation.code));
            errors.add(field.to_string(), message);
        }
    }

    Err(CoreError::Validation(errors))
}

/// Accepts absolute `http` / `https` URLs only.
pub(crate) fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let lower = value.to_ascii_lowercase();
    let http_scheme = lower.starts_with("http://") || lower.starts_with("https://");
    if http_scheme && value.validate_url() {
        Ok(())
    } else {
        let mut err = ValidationError::new("url");
        err.message = Some(Cow::from("must be a valid http(s) URL"));
        Err(err)
    }
}

/// Accepts addresses with a dotted domain, e.g. `ada@example.com`. Bare
/// hosts such as `ada@localhost` are rejected.
pub(crate) fn validate_contact_email(value: &str) -> Result<(), ValidationError> {
    let dotted_domain = value
        .rsplit_once('@')
        .map(|(_, domain)| {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        })
        .unwrap_or(false);

    if dotted_domain && value.validate_email() {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some(Cow::from("must be a valid email address"));
        Err(err)
    }
}
