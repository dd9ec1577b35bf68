//! Selection lists and their items.
//!
//! A list owns an ordered sequence of plain strings. Order only matters for
//! display; eligibility tracking compares item values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a stored list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(Uuid);

impl ListId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Borrow the inner UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ListId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Validation errors raised by list item and list mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionListValidationError {
    /// Item text was blank once trimmed.
    #[error("item is required and must be a non-empty string")]
    BlankItem,
    /// List name was blank once trimmed.
    #[error("list name must not be empty")]
    BlankName,
    /// Removal index does not address an item.
    #[error("item index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A trimmed, non-empty list item.
///
/// # Examples
/// ```
/// use recitation_backend::domain::ListItem;
///
/// let item = ListItem::new("  Al-Fatiha ").expect("valid item");
/// assert_eq!(item.as_str(), "Al-Fatiha");
/// assert!(ListItem::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListItem(String);

impl ListItem {
    /// Validate and trim raw item text.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SelectionListValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SelectionListValidationError::BlankItem);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the item text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the item, returning its text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Validate a list name, returning the trimmed value.
pub fn validate_list_name(raw: &str) -> Result<String, SelectionListValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SelectionListValidationError::BlankName);
    }
    Ok(trimmed.to_owned())
}

/// A named, ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionList {
    id: ListId,
    name: String,
    items: Vec<String>,
}

impl SelectionList {
    /// Assemble a list from stored parts.
    pub fn new(id: ListId, name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }

    /// List identifier.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Display name, which binds the list to a role.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item sequence with `item` appended.
    pub fn items_with_appended(&self, item: ListItem) -> Vec<String> {
        let mut items = self.items.clone();
        items.push(item.into_inner());
        items
    }

    /// Item sequence with the entry at `index` removed.
    pub fn items_without(&self, index: usize) -> Result<Vec<String>, SelectionListValidationError> {
        if index >= self.items.len() {
            return Err(SelectionListValidationError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self
            .items
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, item)| item.clone())
            .collect())
    }
}
