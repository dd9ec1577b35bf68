//! Driving port for list and item mutations.

use async_trait::async_trait;

use crate::domain::{Error, ListId, SelectionList};

/// Request to create a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateListRequest {
    pub name: String,
    pub items: Vec<String>,
}

/// Partial update of a list; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateListRequest {
    pub id: ListId,
    pub name: Option<String>,
    pub items: Option<Vec<String>>,
}

/// Request to append one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItemRequest {
    pub id: ListId,
    pub item: String,
}

/// Request to remove the item at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveItemRequest {
    pub id: ListId,
    pub index: usize,
}

/// Driving port for list write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectionListCommand: Send + Sync {
    /// Create a list.
    async fn create_list(&self, request: CreateListRequest) -> Result<SelectionList, Error>;

    /// Rename a list and/or replace its items.
    async fn update_list(&self, request: UpdateListRequest) -> Result<SelectionList, Error>;

    /// Append a trimmed, non-empty item.
    async fn add_item(&self, request: AddItemRequest) -> Result<SelectionList, Error>;

    /// Remove the item at the requested position.
    async fn remove_item(&self, request: RemoveItemRequest) -> Result<SelectionList, Error>;

    /// Remove every item of a list.
    async fn clear_items(&self, id: ListId) -> Result<SelectionList, Error>;

    /// Delete a list.
    async fn delete_list(&self, id: ListId) -> Result<(), Error>;
}

/// Fixture command echoing requests back without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSelectionListCommand;

#[async_trait]
impl SelectionListCommand for FixtureSelectionListCommand {
    async fn create_list(&self, request: CreateListRequest) -> Result<SelectionList, Error> {
        Ok(SelectionList::new(
            ListId::random(),
            request.name,
            request.items,
        ))
    }

    async fn update_list(&self, request: UpdateListRequest) -> Result<SelectionList, Error> {
        Ok(SelectionList::new(
            request.id,
            request.name.unwrap_or_default(),
            request.items.unwrap_or_default(),
        ))
    }

    async fn add_item(&self, request: AddItemRequest) -> Result<SelectionList, Error> {
        Ok(SelectionList::new(request.id, "fixture", vec![request.item]))
    }

    async fn remove_item(&self, request: RemoveItemRequest) -> Result<SelectionList, Error> {
        Ok(SelectionList::new(request.id, "fixture", Vec::new()))
    }

    async fn clear_items(&self, id: ListId) -> Result<SelectionList, Error> {
        Ok(SelectionList::new(id, "fixture", Vec::new()))
    }

    async fn delete_list(&self, _id: ListId) -> Result<(), Error> {
        Ok(())
    }
}
