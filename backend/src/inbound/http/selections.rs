//! Selection engine API handler.
//!
//! ```text
//! POST /api/generate-selections
//! {"list1":"Al-Ikhlas","list2":"Al-Mulk","list3":"Ayat al-Kursi"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::GeneratedSelections;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// One pick per managed list.
#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSelectionsBody {
    /// Pick from the short items list.
    #[schema(example = "Al-Ikhlas")]
    pub list1: String,
    /// Pick from the long items list.
    #[schema(example = "Al-Mulk")]
    pub list2: String,
    /// Pick from the memorization suggestions list.
    #[schema(example = "Ayat al-Kursi")]
    pub list3: String,
}

impl From<GeneratedSelections> for GeneratedSelectionsBody {
    fn from(value: GeneratedSelections) -> Self {
        Self {
            list1: value.list1,
            list2: value.list2,
            list3: value.list3,
        }
    }
}

/// Draw one item from each list without repeating within the current cycle.
///
/// When any list has no unused item left, every list starts a new cycle
/// before drawing.
#[utoipa::path(
    post,
    path = "/api/generate-selections",
    responses(
        (status = 200, description = "Selections drawn", body = GeneratedSelectionsBody),
        (status = 400, description = "A list has no items", body = ErrorSchema),
        (status = 404, description = "A required list is missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["selections"],
    operation_id = "generateSelections"
)]
#[post("/generate-selections")]
pub async fn generate_selections(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<GeneratedSelectionsBody>> {
    let selections = state.selections.generate_selections().await?;
    Ok(web::Json(selections.into()))
}

#[cfg(test)]
#[path = "selections_tests.rs"]
mod tests;
