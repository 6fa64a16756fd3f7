use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentKind;
use super::user::UserId;

/// A completed self-assessment as persisted in the result store.
///
/// Written once and never updated. Field names match the document shape
/// the web client reads for history views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: InstrumentKind,
    pub score: u32,
    /// Severity label of the band the score fell in.
    pub level: String,
    pub recommendations: Vec<String>,
    pub timestamp: jiff::Timestamp,
}
