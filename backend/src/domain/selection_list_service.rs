//! List management services.
//!
//! Implements the list read and write driving ports over
//! [`SelectionListRepository`]. Item validation happens here so every
//! adapter sees trimmed, non-empty values.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    AddItemRequest, CreateListRequest, RemoveItemRequest, SelectionListCommand,
    SelectionListQuery, SelectionListRepository, SelectionListRepositoryError, UpdateListRequest,
};
use crate::domain::{Error, ListId, ListItem, SelectionList, SelectionListValidationError};
use crate::domain::selection_list::validate_list_name;

pub(crate) fn map_list_error(error: SelectionListRepositoryError) -> Error {
    match error {
        SelectionListRepositoryError::Connection { message } => {
            Error::internal(format!("selection list repository unavailable: {message}"))
        }
        SelectionListRepositoryError::Query { message } => {
            Error::internal(format!("selection list repository error: {message}"))
        }
    }
}

fn map_validation_error(error: SelectionListValidationError) -> Error {
    let field = match error {
        SelectionListValidationError::BlankItem => "item",
        SelectionListValidationError::BlankName => "name",
        SelectionListValidationError::IndexOutOfBounds { .. } => "index",
    };
    Error::invalid_request(error.to_string()).with_details(json!({ "field": field }))
}

fn list_not_found(id: &ListId) -> Error {
    Error::not_found(format!("list {id} not found")).with_details(json!({ "id": id.to_string() }))
}

fn normalise_items(items: Vec<String>) -> Result<Vec<String>, Error> {
    items
        .into_iter()
        .map(|raw| {
            ListItem::new(raw)
                .map(ListItem::into_inner)
                .map_err(map_validation_error)
        })
        .collect()
}

/// List service implementing the list command and query ports.
#[derive(Clone)]
pub struct SelectionListService<L> {
    list_repo: Arc<L>,
}

impl<L> SelectionListService<L> {
    /// Create a new service over the list repository.
    pub fn new(list_repo: Arc<L>) -> Self {
        Self { list_repo }
    }
}

impl<L> SelectionListService<L>
where
    L: SelectionListRepository,
{
    async fn require(&self, id: &ListId) -> Result<SelectionList, Error> {
        self.list_repo
            .find_by_id(id)
            .await
            .map_err(map_list_error)?
            .ok_or_else(|| list_not_found(id))
    }

    async fn store_items(&self, id: &ListId, items: &[String]) -> Result<SelectionList, Error> {
        self.list_repo
            .save_items(id, items)
            .await
            .map_err(map_list_error)?
            .ok_or_else(|| list_not_found(id))
    }
}

#[async_trait]
impl<L> SelectionListCommand for SelectionListService<L>
where
    L: SelectionListRepository,
{
    async fn create_list(&self, request: CreateListRequest) -> Result<SelectionList, Error> {
        let name = validate_list_name(&request.name).map_err(map_validation_error)?;
        let items = normalise_items(request.items)?;
        self.list_repo
            .create(&name, &items)
            .await
            .map_err(map_list_error)
    }

    async fn update_list(&self, request: UpdateListRequest) -> Result<SelectionList, Error> {
        let UpdateListRequest { id, name, items } = request;
        let name = name
            .as_deref()
            .map(validate_list_name)
            .transpose()
            .map_err(map_validation_error)?;
        let items = items.map(normalise_items).transpose()?;

        let mut current = self.require(&id).await?;
        if let Some(name) = name {
            current = self
                .list_repo
                .rename(&id, &name)
                .await
                .map_err(map_list_error)?
                .ok_or_else(|| list_not_found(&id))?;
        }
        if let Some(items) = items {
            current = self.store_items(&id, &items).await?;
        }
        Ok(current)
    }

    async fn add_item(&self, request: AddItemRequest) -> Result<SelectionList, Error> {
        let item = ListItem::new(&request.item).map_err(map_validation_error)?;
        let list = self.require(&request.id).await?;
        self.store_items(&request.id, &list.items_with_appended(item))
            .await
    }

    async fn remove_item(&self, request: RemoveItemRequest) -> Result<SelectionList, Error> {
        let list = self.require(&request.id).await?;
        let items = list
            .items_without(request.index)
            .map_err(map_validation_error)?;
        self.store_items(&request.id, &items).await
    }

    async fn clear_items(&self, id: ListId) -> Result<SelectionList, Error> {
        self.store_items(&id, &[]).await
    }

    async fn delete_list(&self, id: ListId) -> Result<(), Error> {
        let deleted = self.list_repo.delete(&id).await.map_err(map_list_error)?;
        if deleted {
            Ok(())
        } else {
            Err(list_not_found(&id))
        }
    }
}

#[async_trait]
impl<L> SelectionListQuery for SelectionListService<L>
where
    L: SelectionListRepository,
{
    async fn list_all(&self) -> Result<Vec<SelectionList>, Error> {
        self.list_repo.list_all().await.map_err(map_list_error)
    }

    async fn get_list(&self, id: ListId) -> Result<SelectionList, Error> {
        self.require(&id).await
    }
}

#[cfg(test)]
#[path = "selection_list_service_tests.rs"]
mod tests;
