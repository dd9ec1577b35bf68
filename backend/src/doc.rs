//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schema wrappers for domain types, so the domain never depends on
//! utoipa. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::history::{CycleHistoryBody, HistoryEntryBody};
use crate::inbound::http::lists::{
    AddItemBody, CreateListBody, SelectionListBody, UpdateListBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::selections::GeneratedSelectionsBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recitation backend API",
        description = "List management and non-repeating daily recitation picks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::selections::generate_selections,
        crate::inbound::http::history::current_cycle_history,
        crate::inbound::http::lists::list_lists,
        crate::inbound::http::lists::get_list,
        crate::inbound::http::lists::create_list,
        crate::inbound::http::lists::update_list,
        crate::inbound::http::lists::add_item,
        crate::inbound::http::lists::remove_item,
        crate::inbound::http::lists::clear_items,
        crate::inbound::http::lists::delete_list,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        GeneratedSelectionsBody,
        CycleHistoryBody,
        HistoryEntryBody,
        SelectionListBody,
        CreateListBody,
        UpdateListBody,
        AddItemBody
    )),
    tags(
        (name = "selections", description = "Drawing picks and inspecting the active cycle"),
        (name = "lists", description = "Managing the stored lists"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
