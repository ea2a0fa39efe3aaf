use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_http_url, Schema, PROJECT_COLLECTION};

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Tech tags, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub repo_url: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub live_url: Option<String>,
    /// Screenshot or cover image.
    #[validate(custom(function = "validate_http_url"))]
    pub image: Option<String>,
}

impl Schema for Project {
    const COLLECTION: &'static str = PROJECT_COLLECTION;
}
