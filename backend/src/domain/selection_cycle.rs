//! Selection cycle record and token.
//!
//! Exactly one cycle row exists process-wide. Its token scopes which history
//! entries count as "already selected"; a reset swaps the token in place.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token naming one generation of selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleToken(Uuid);

impl CycleToken {
    /// Generate a fresh, unique token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a stored UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Borrow the inner UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CycleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CycleToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The singleton cycle row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCycle {
    pub id: Uuid,
    pub current_cycle: CycleToken,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
