use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use serene_auth::user::AuthUser;
use serene_core::history::{summarize, InstrumentSummary};
use serene_core::models::record::AssessmentRecord;
use serene_instruments::get_instrument;
use serene_instruments::scoring::AssessmentResult;
use serene_storage::record::{history, record_result, RecordStatus};
use serene_storage::results::ResultStore;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAnswers {
    answers: Vec<u8>,
}

#[derive(Serialize)]
pub struct SubmissionResponse {
    result: AssessmentResult,
    saved: bool,
    record_status: RecordStatus,
}

/// Score a completed questionnaire and save it for the caller.
///
/// The result is returned even when the caller is anonymous or the save
/// fails; `record_status` says which. Malformed bodies (including answers
/// outside `0..=255`) are 400s like any other validation failure.
pub async fn submit_assessment<S: ResultStore + Clone + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    user: Option<Extension<AuthUser>>,
    body: Result<Json<SubmitAnswers>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let instrument = get_instrument(&id)?;
    let Json(body) = body?;
    let result = instrument.evaluate(&body.answers)?;

    let identity = user.map(|Extension(u)| u);
    let record_status = record_result(&state.results, &identity, &result).await;

    Ok(Json(SubmissionResponse {
        saved: record_status.is_saved(),
        result,
        record_status,
    }))
}

pub async fn list_history<S: ResultStore + Clone + 'static>(
    State(state): State<AppState<S>>,
    user: Option<Extension<AuthUser>>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let identity = user.map(|Extension(u)| u);
    let records = history(&state.results, &identity).await?;
    Ok(Json(records))
}

pub async fn history_summary<S: ResultStore + Clone + 'static>(
    State(state): State<AppState<S>>,
    user: Option<Extension<AuthUser>>,
) -> Result<Json<Vec<InstrumentSummary>>, ApiError> {
    let identity = user.map(|Extension(u)| u);
    let records = history(&state.results, &identity).await?;
    Ok(Json(summarize(&records)))
}
