use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{validate_http_url, Schema, PROFILE_COLLECTION};

/// The portfolio owner's profile. At most one is expected in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub avatar: Option<String>,
    /// Platform name to profile URL.
    #[validate(custom(function = "validate_socials"))]
    pub socials: Option<BTreeMap<String, String>>,
}

impl Schema for Profile {
    const COLLECTION: &'static str = PROFILE_COLLECTION;
}

fn validate_socials(socials: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    let bad: Vec<&str> = socials
        .iter()
        .filter(|(_, url)| validate_http_url(url).is_err())
        .map(|(platform, _)| platform.as_str())
        .collect();

    if bad.is_empty() {
        return Ok(());
    }

    let mut err = ValidationError::new("url");
    err.message = Some(Cow::from(format!(
        "must map to valid http(s) URLs (invalid: {})",
        bad.join(", ")
    )));
    Err(err)
}
