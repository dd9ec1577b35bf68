//! Tests for the list management handlers.
//!
//! Handlers run against the list service over the in-memory store so status
//! codes reflect real domain validation.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::SelectionListService;
use crate::domain::ports::{FixtureSelectionCommand, FixtureSelectionHistoryQuery};
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::state::HttpStatePorts;
use crate::outbound::memory::InMemorySelectionStore;

#[fixture]
fn state() -> HttpState {
    let store = Arc::new(InMemorySelectionStore::new(Arc::new(DefaultClock)));
    let service = Arc::new(SelectionListService::new(store));
    HttpState::new(HttpStatePorts {
        selections: Arc::new(FixtureSelectionCommand),
        history: Arc::new(FixtureSelectionHistoryQuery),
        lists: service.clone(),
        lists_query: service,
    })
}

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
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(list_lists)
                .service(get_list)
                .service(create_list)
                .service(update_list)
                .service(add_item)
                .service(remove_item)
                .service(clear_items)
                .service(delete_list),
        )
}

async fn create<S>(app: &S, name: &str, items: &[&str]) -> SelectionListBody
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = actix_test::TestRequest::post()
        .uri("/api/lists")
        .set_json(json!({ "name": name, "items": items }))
        .to_request();
    let res = actix_test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    actix_test::read_body_json(res).await
}

#[rstest]
#[actix_web::test]
async fn create_then_fetch(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &["Al-Ikhlas", "Al-Falaq"]).await;

    let req = actix_test::TestRequest::get()
        .uri(&format!("/api/lists/{}", created.id))
        .to_request();
    let fetched: SelectionListBody = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(fetched, created);
    assert_eq!(fetched.items, vec!["Al-Ikhlas", "Al-Falaq"]);
}

#[rstest]
#[actix_web::test]
async fn create_without_items_starts_empty(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/lists")
        .set_json(json!({ "name": "Long surahs" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: SelectionListBody = actix_test::read_body_json(res).await;
    assert!(body.items.is_empty());
}

#[rstest]
#[actix_web::test]
async fn list_all_returns_created_lists(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    create(&app, "B", &["x"]).await;
    create(&app, "A", &[]).await;

    let req = actix_test::TestRequest::get().uri("/api/lists").to_request();
    let lists: Vec<SelectionListBody> = actix_test::call_and_read_body_json(&app, req).await;

    let mut names: Vec<_> = lists.into_iter().map(|list| list.name).collect();
    names.sort();
    assert_eq!(names, vec!["A", "B"]);
}

#[rstest]
#[actix_web::test]
async fn add_item_trims_and_appends(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &["Al-Ikhlas"]).await;

    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/lists/{}/items", created.id))
        .set_json(json!({ "item": "  Al-Nas  " }))
        .to_request();
    let body: SelectionListBody = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.items, vec!["Al-Ikhlas", "Al-Nas"]);
}

#[rstest]
#[actix_web::test]
async fn blank_item_is_rejected(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &[]).await;

    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/lists/{}/items", created.id))
        .set_json(json!({ "item": "   " }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "item");
}

#[rstest]
#[case("0", StatusCode::OK)]
#[case("5", StatusCode::BAD_REQUEST)]
#[case("-1", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn remove_item_by_index(
    state: HttpState,
    #[case] index: &str,
    #[case] expected: StatusCode,
) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &["Al-Ikhlas", "Al-Nas"]).await;

    let req = actix_test::TestRequest::delete()
        .uri(&format!("/api/lists/{}/items/{index}", created.id))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), expected);
    if expected == StatusCode::OK {
        let body: SelectionListBody = actix_test::read_body_json(res).await;
        assert_eq!(body.items, vec!["Al-Nas"]);
    }
}

#[rstest]
#[actix_web::test]
async fn clear_items_empties_list(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &["Al-Ikhlas", "Al-Nas"]).await;

    let req = actix_test::TestRequest::delete()
        .uri(&format!("/api/lists/{}/items", created.id))
        .to_request();
    let body: SelectionListBody = actix_test::call_and_read_body_json(&app, req).await;

    assert!(body.items.is_empty());
    assert_eq!(body.name, "Short surahs");
}

#[rstest]
#[actix_web::test]
async fn patch_updates_only_supplied_fields(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &["Al-Ikhlas"]).await;

    let req = actix_test::TestRequest::patch()
        .uri(&format!("/api/lists/{}", created.id))
        .set_json(json!({ "name": "Juz Amma" }))
        .to_request();
    let body: SelectionListBody = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.name, "Juz Amma");
    assert_eq!(body.items, vec!["Al-Ikhlas"]);
}

#[rstest]
#[actix_web::test]
async fn delete_then_fetch_is_not_found(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &[]).await;
    let uri = format!("/api/lists/{}", created.id);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn malformed_id_is_rejected(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/lists/not-a-uuid")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "id");
    assert_eq!(body["details"]["code"], "invalid_uuid");
}

#[rstest]
#[actix_web::test]
async fn missing_item_field_is_a_bad_request(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, "Short surahs", &[]).await;

    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/lists/{}/items", created.id))
        .set_json(json!({ "value": "Al-Nas" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}
