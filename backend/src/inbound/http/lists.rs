//! List management API handlers.
//!
//! ```text
//! GET    /api/lists
//! POST   /api/lists {"name":"Short surahs","items":["Al-Ikhlas"]}
//! PATCH  /api/lists/{id} {"name":"Short surahs"}
//! POST   /api/lists/{id}/items {"item":"Al-Falaq"}
//! DELETE /api/lists/{id}/items/{index}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    AddItemRequest, CreateListRequest, RemoveItemRequest, UpdateListRequest,
};
use crate::domain::SelectionList;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_item_index, parse_list_id};

/// A stored list as returned to clients.
#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionListBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Short surahs")]
    pub name: String,
    pub items: Vec<String>,
}

impl From<SelectionList> for SelectionListBody {
    fn from(value: SelectionList) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            items: value.items().to_vec(),
        }
    }
}

/// Body for `POST /api/lists`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListBody {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Body for `PATCH /api/lists/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// Body for `POST /api/lists/{id}/items`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    #[schema(example = "Al-Falaq")]
    pub item: String,
}

/// Every stored list.
#[utoipa::path(
    get,
    path = "/api/lists",
    responses(
        (status = 200, description = "Lists", body = [SelectionListBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "listLists"
)]
#[get("/lists")]
pub async fn list_lists(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<SelectionListBody>>> {
    let lists = state.lists_query.list_all().await?;
    Ok(web::Json(lists.into_iter().map(Into::into).collect()))
}

/// A single list.
#[utoipa::path(
    get,
    path = "/api/lists/{id}",
    params(("id" = String, Path, description = "List identifier")),
    responses(
        (status = 200, description = "List", body = SelectionListBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "List not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "getList"
)]
#[get("/lists/{id}")]
pub async fn get_list(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SelectionListBody>> {
    let id = parse_list_id(&path.into_inner())?;
    let list = state.lists_query.get_list(id).await?;
    Ok(web::Json(list.into()))
}

/// Create a list.
#[utoipa::path(
    post,
    path = "/api/lists",
    request_body = CreateListBody,
    responses(
        (status = 201, description = "List created", body = SelectionListBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "createList"
)]
#[post("/lists")]
pub async fn create_list(
    state: web::Data<HttpState>,
    payload: web::Json<CreateListBody>,
) -> ApiResult<HttpResponse> {
    let CreateListBody { name, items } = payload.into_inner();
    let list = state
        .lists
        .create_list(CreateListRequest { name, items })
        .await?;
    Ok(HttpResponse::Created().json(SelectionListBody::from(list)))
}

/// Rename a list and/or replace its items.
#[utoipa::path(
    patch,
    path = "/api/lists/{id}",
    params(("id" = String, Path, description = "List identifier")),
    request_body = UpdateListBody,
    responses(
        (status = 200, description = "List updated", body = SelectionListBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "List not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "updateList"
)]
#[patch("/lists/{id}")]
pub async fn update_list(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateListBody>,
) -> ApiResult<web::Json<SelectionListBody>> {
    let id = parse_list_id(&path.into_inner())?;
    let UpdateListBody { name, items } = payload.into_inner();
    let list = state
        .lists
        .update_list(UpdateListRequest { id, name, items })
        .await?;
    Ok(web::Json(list.into()))
}

/// Append an item to a list.
#[utoipa::path(
    post,
    path = "/api/lists/{id}/items",
    params(("id" = String, Path, description = "List identifier")),
    request_body = AddItemBody,
    responses(
        (status = 200, description = "Item added", body = SelectionListBody),
        (status = 400, description = "Blank item", body = ErrorSchema),
        (status = 404, description = "List not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "addItem"
)]
#[post("/lists/{id}/items")]
pub async fn add_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AddItemBody>,
) -> ApiResult<web::Json<SelectionListBody>> {
    let id = parse_list_id(&path.into_inner())?;
    let item = payload.into_inner().item;
    let list = state.lists.add_item(AddItemRequest { id, item }).await?;
    Ok(web::Json(list.into()))
}

/// Remove the item at a zero-based position.
#[utoipa::path(
    delete,
    path = "/api/lists/{id}/items/{index}",
    params(
        ("id" = String, Path, description = "List identifier"),
        ("index" = usize, Path, description = "Zero-based item position")
    ),
    responses(
        (status = 200, description = "Item removed", body = SelectionListBody),
        (status = 400, description = "Invalid index", body = ErrorSchema),
        (status = 404, description = "List not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "removeItem"
)]
#[delete("/lists/{id}/items/{index}")]
pub async fn remove_item(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<SelectionListBody>> {
    let (raw_id, raw_index) = path.into_inner();
    let id = parse_list_id(&raw_id)?;
    let index = parse_item_index(&raw_index)?;
    let list = state
        .lists
        .remove_item(RemoveItemRequest { id, index })
        .await?;
    Ok(web::Json(list.into()))
}

/// Remove every item of a list.
#[utoipa::path(
    delete,
    path = "/api/lists/{id}/items",
    params(("id" = String, Path, description = "List identifier")),
    responses(
        (status = 200, description = "Items cleared", body = SelectionListBody),
        (status = 404, description = "List not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "clearItems"
)]
#[delete("/lists/{id}/items")]
pub async fn clear_items(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SelectionListBody>> {
    let id = parse_list_id(&path.into_inner())?;
    let list = state.lists.clear_items(id).await?;
    Ok(web::Json(list.into()))
}

/// Delete a list. History rows referring to it are kept.
#[utoipa::path(
    delete,
    path = "/api/lists/{id}",
    params(("id" = String, Path, description = "List identifier")),
    responses(
        (status = 204, description = "List deleted"),
        (status = 404, description = "List not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "deleteList"
)]
#[delete("/lists/{id}")]
pub async fn delete_list(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_list_id(&path.into_inner())?;
    state.lists.delete_list(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;
