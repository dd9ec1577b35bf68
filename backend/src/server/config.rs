//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use recitation_backend::domain::ListRoleNames;
use recitation_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) role_names: ListRoleNames,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr` with in-memory storage.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            role_names: ListRoleNames::default(),
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// Without a pool the server keeps lists and history in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Bind the three roles to configured list names.
    #[must_use]
    pub fn with_role_names(mut self, role_names: ListRoleNames) -> Self {
        self.role_names = role_names;
        self
    }
}
