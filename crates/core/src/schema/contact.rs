use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_contact_email, Schema, CONTACT_MESSAGE_COLLECTION};

/// A message submitted through the contact form. Write-only from the
/// client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(custom(function = "validate_contact_email"))]
    pub email: String,
    #[validate(length(min = 1, max = 150, message = "must be between 1 and 150 characters"))]
    pub subject: String,
    #[validate(length(min = 1, max = 2000, message = "must be between 1 and 2000 characters"))]
    pub message: String,
}

impl Schema for ContactMessage {
    const COLLECTION: &'static str = CONTACT_MESSAGE_COLLECTION;
}
