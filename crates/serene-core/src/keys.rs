//! Object key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of documents in the Serene result bucket.

use uuid::Uuid;

use crate::models::user::UserId;

pub const ASSESSMENT_RESULTS_PREFIX: &str = "assessment-results/";

pub fn user_results_prefix(user_id: &UserId) -> String {
    format!("{ASSESSMENT_RESULTS_PREFIX}{user_id}/")
}

pub fn assessment_result(user_id: &UserId, id: Uuid) -> String {
    format!("{ASSESSMENT_RESULTS_PREFIX}{user_id}/{id}.json")
}
