//! Selection history API handler.
//!
//! ```text
//! GET /api/selection-cycle/history
//! {"entries":[{"listId":"…","selectedItem":"Al-Ikhlas","createdAt":"…"}]}
//! ```

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CycleHistory;
use crate::domain::SelectionRecord;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// One pick recorded in the active cycle.
#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub list_id: String,
    #[schema(example = "Al-Ikhlas")]
    pub selected_item: String,
    pub created_at: DateTime<Utc>,
}

impl From<SelectionRecord> for HistoryEntryBody {
    fn from(value: SelectionRecord) -> Self {
        Self {
            list_id: value.list_id.to_string(),
            selected_item: value.selected_item,
            created_at: value.created_at,
        }
    }
}

/// Picks recorded under the active cycle, oldest first.
#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CycleHistoryBody {
    pub entries: Vec<HistoryEntryBody>,
}

impl From<CycleHistory> for CycleHistoryBody {
    fn from(value: CycleHistory) -> Self {
        Self {
            entries: value.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Report which items have been drawn in the active cycle.
#[utoipa::path(
    get,
    path = "/api/selection-cycle/history",
    responses(
        (status = 200, description = "Active cycle history", body = CycleHistoryBody),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["selections"],
    operation_id = "currentCycleHistory"
)]
#[get("/selection-cycle/history")]
pub async fn current_cycle_history(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CycleHistoryBody>> {
    let history = state.history.current_cycle_history().await?;
    Ok(web::Json(history.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::MockSelectionHistoryQuery;
    use crate::domain::{CycleToken, ListId};

    fn test_app(state: HttpState) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api").service(current_cycle_history))
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_cycle_has_no_entries() {
        let app = actix_test::init_service(test_app(HttpState::fixtures())).await;

        let req = actix_test::TestRequest::get()
            .uri("/api/selection-cycle/history")
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({ "entries": [] }));
    }

    #[rstest]
    #[actix_web::test]
    async fn entries_use_camel_case_fields() {
        let list_id = ListId::random();
        let cycle = CycleToken::generate();
        let created_at = Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let mut query = MockSelectionHistoryQuery::new();
        query
            .expect_current_cycle_history()
            .times(1)
            .return_once(move || {
                Ok(CycleHistory {
                    cycle,
                    entries: vec![SelectionRecord {
                        id: Uuid::new_v4(),
                        list_id,
                        selected_item: "Al-Ikhlas".to_owned(),
                        selection_cycle: cycle,
                        created_at,
                    }],
                })
            });
        let state = HttpState {
            history: Arc::new(query),
            ..HttpState::fixtures()
        };
        let app = actix_test::init_service(test_app(state)).await;

        let req = actix_test::TestRequest::get()
            .uri("/api/selection-cycle/history")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        let entry = &body["entries"][0];
        assert_eq!(entry["listId"], list_id.to_string());
        assert_eq!(entry["selectedItem"], "Al-Ikhlas");
        assert!(entry.get("createdAt").is_some());
        assert!(entry.get("selectionCycle").is_none());
    }
}
