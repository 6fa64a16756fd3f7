use serde::Serialize;
use serene_core::identity::IdentityProvider;
use serene_core::models::record::AssessmentRecord;
use serene_instruments::scoring::AssessmentResult;

use crate::error::StorageError;
use crate::results::ResultStore;

/// Outcome of trying to persist a completed assessment.
///
/// Expected failures are values, not errors: the caller shows the result
/// either way and only varies the notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordStatus {
    Saved { record: AssessmentRecord },
    AuthenticationRequired,
    Failed { reason: String },
}

impl RecordStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, RecordStatus::Saved { .. })
    }
}

/// Persist `result` for the current user.
///
/// Without a user the store is never called. Store failures are logged
/// and returned as [`RecordStatus::Failed`].
pub async fn record_result<S, I>(store: &S, identity: &I, result: &AssessmentResult) -> RecordStatus
where
    S: ResultStore,
    I: IdentityProvider + Sync,
{
    let Some(user_id) = identity.current_user() else {
        tracing::info!(instrument = %result.kind(), "skipping save for anonymous user");
        return RecordStatus::AuthenticationRequired;
    };

    let record = result.to_record(user_id, jiff::Timestamp::now());
    match store.append(&record).await {
        Ok(()) => {
            tracing::info!(
                record_id = %record.id,
                user_id = %record.user_id,
                instrument = %record.kind,
                score = record.score,
                "assessment result saved"
            );
            RecordStatus::Saved { record }
        }
        Err(e) => {
            tracing::warn!(
                user_id = %record.user_id,
                instrument = %record.kind,
                error = %e,
                "failed to save assessment result"
            );
            RecordStatus::Failed {
                reason: e.to_string(),
            }
        }
    }
}

/// All of the current user's records, newest first.
pub async fn history<S, I>(store: &S, identity: &I) -> Result<Vec<AssessmentRecord>, StorageError>
where
    S: ResultStore,
    I: IdentityProvider + Sync,
{
    let user_id = identity.current_user().ok_or(StorageError::Unauthenticated)?;
    store.list_for_user(&user_id).await
}
