use std::sync::Arc;

use aws_sdk_s3::Client;
use serene_core::keys;
use serene_core::models::record::AssessmentRecord;
use serene_core::models::user::UserId;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::objects;

/// Append-only collection of assessment records keyed by user.
///
/// Records are immutable once written; there is no update or delete path.
pub trait ResultStore: Send + Sync {
    /// Append one record. Fails with `AlreadyExists` if its id is taken.
    fn append(
        &self,
        record: &AssessmentRecord,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Every record for `user_id`, newest first.
    fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<AssessmentRecord>, StorageError>> + Send;
}

fn newest_first(records: &mut [AssessmentRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// One JSON object per record under `assessment-results/{user_id}/`.
#[derive(Clone)]
pub struct S3ResultStore {
    client: Client,
    bucket: String,
}

impl S3ResultStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ResultStore for S3ResultStore {
    async fn append(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        let key = keys::assessment_result(&record.user_id, record.id);
        let body = serde_json::to_vec(record)?;
        objects::put_object_if_absent(
            &self.client,
            &self.bucket,
            &key,
            body,
            Some("application/json"),
        )
        .await?;
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, StorageError> {
        let prefix = keys::user_results_prefix(user_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;
        tracing::debug!(user_id = %user_id, count = keys.len(), "listing assessment records");

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            let body = objects::get_object(&self.client, &self.bucket, key).await?;
            let record: AssessmentRecord = serde_json::from_slice(&body)?;
            records.push(record);
        }

        newest_first(&mut records);
        Ok(records)
    }
}

/// In-process store. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryResultStore {
    records: Arc<RwLock<Vec<AssessmentRecord>>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all users.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl ResultStore for MemoryResultStore {
    async fn append(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StorageError::AlreadyExists {
                key: keys::assessment_result(&record.user_id, record.id),
            });
        }
        records.push(record.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, StorageError> {
        let mut records: Vec<AssessmentRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        newest_first(&mut records);
        Ok(records)
    }
}
