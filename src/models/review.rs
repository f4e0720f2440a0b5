//! Review model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use validator::Validate;

/// Username recorded when the reviewing account can no longer be resolved
pub const UNKNOWN_REVIEWER: &str = "User";

/// A user's review of a book. At most one per (book, user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_id: i32,
    /// Username at the time the review was written
    pub username: String,
    /// Any JSON number, stored as sent
    #[schema(value_type = f64)]
    pub rating: Number,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Add or replace review request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReviewInput {
    #[validate(required(message = "rating is required"))]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<Number>,
    #[validate(required(message = "comment is required"))]
    pub comment: Option<String>,
}
