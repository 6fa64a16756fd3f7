use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use serene_core::models::instrument::InstrumentKind;
use serene_instruments::scoring::AssessmentDefinition;
use serene_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    #[serde(rename = "type")]
    kind: InstrumentKind,
    name: String,
    title: String,
    item_count: usize,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            kind: i.kind(),
            name: i.name().to_string(),
            title: i.definition().title.clone(),
            item_count: i.definition().items.len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<AssessmentDefinition>, ApiError> {
    let instrument = get_instrument(&id)?;
    Ok(Json(instrument.definition().clone()))
}
