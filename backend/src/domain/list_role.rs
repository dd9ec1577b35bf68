//! Fixed roles of the three managed selection lists.
//!
//! The engine resolves lists by role rather than by position. Each role is
//! bound to a display name at configuration time through [`ListRoleNames`],
//! so renaming a list in the UI only requires a configuration change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SelectionList;

/// Role a managed list plays in a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListRole {
    /// Short surahs or verses.
    ShortItems,
    /// Long surahs or verses.
    LongItems,
    /// Verses suggested for memorisation.
    MemorizationSuggestions,
}

impl ListRole {
    /// Every role in response order.
    pub const ALL: [Self; 3] = [
        Self::ShortItems,
        Self::LongItems,
        Self::MemorizationSuggestions,
    ];

    /// Stable slug used in logs and error details.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShortItems => "short_items",
            Self::LongItems => "long_items",
            Self::MemorizationSuggestions => "memorization_suggestions",
        }
    }

    /// Key the role occupies in a generation response.
    pub const fn response_key(self) -> &'static str {
        match self {
            Self::ShortItems => "list1",
            Self::LongItems => "list2",
            Self::MemorizationSuggestions => "list3",
        }
    }

    /// Display name seeded for the role on first boot.
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::ShortItems => "سور/آيات قصيرة",
            Self::LongItems => "سور/آيات طويلة",
            Self::MemorizationSuggestions => "أيات مقترحة للحفظ",
        }
    }
}

impl fmt::Display for ListRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list role: {0}")]
pub struct ParseListRoleError(String);

impl FromStr for ListRole {
    type Err = ParseListRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseListRoleError(s.to_owned()))
    }
}

/// Failure to bind stored lists to roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleResolutionError {
    /// No stored list carries the role's configured name.
    #[error("required list missing: {role}")]
    Missing { role: ListRole },
    /// More than one stored list carries the role's configured name.
    #[error("list role is ambiguous: {role} matches {count} lists")]
    Ambiguous { role: ListRole, count: usize },
}

/// Configuration-time mapping from role to stored list name.
///
/// # Examples
/// ```
/// use recitation_backend::domain::{ListRole, ListRoleNames};
///
/// let names = ListRoleNames::default().with_name(ListRole::LongItems, "Long surahs");
/// assert_eq!(names.name_for(ListRole::LongItems), "Long surahs");
/// assert_eq!(
///     names.name_for(ListRole::ShortItems),
///     ListRole::ShortItems.default_name()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRoleNames {
    short_items: String,
    long_items: String,
    memorization_suggestions: String,
}

impl Default for ListRoleNames {
    fn default() -> Self {
        Self {
            short_items: ListRole::ShortItems.default_name().to_owned(),
            long_items: ListRole::LongItems.default_name().to_owned(),
            memorization_suggestions: ListRole::MemorizationSuggestions
                .default_name()
                .to_owned(),
        }
    }
}

impl ListRoleNames {
    /// Override the display name bound to `role`.
    #[must_use]
    pub fn with_name(mut self, role: ListRole, name: impl Into<String>) -> Self {
        let name = name.into();
        match role {
            ListRole::ShortItems => self.short_items = name,
            ListRole::LongItems => self.long_items = name,
            ListRole::MemorizationSuggestions => self.memorization_suggestions = name,
        }
        self
    }

    /// Display name bound to `role`.
    pub fn name_for(&self, role: ListRole) -> &str {
        match role {
            ListRole::ShortItems => &self.short_items,
            ListRole::LongItems => &self.long_items,
            ListRole::MemorizationSuggestions => &self.memorization_suggestions,
        }
    }

    /// Pick the single stored list bound to `role`.
    pub fn resolve<'a>(
        &self,
        role: ListRole,
        lists: &'a [SelectionList],
    ) -> Result<&'a SelectionList, RoleResolutionError> {
        let name = self.name_for(role);
        let mut matches = lists.iter().filter(|list| list.name() == name);
        let first = matches.next().ok_or(RoleResolutionError::Missing { role })?;
        let extra = matches.count();
        if extra > 0 {
            return Err(RoleResolutionError::Ambiguous {
                role,
                count: extra + 1,
            });
        }
        Ok(first)
    }
}
