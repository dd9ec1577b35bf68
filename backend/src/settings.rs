//! Application settings loaded via OrthoConfig.
//!
//! Values merge CLI flags, `RECITATION_*` environment variables and an
//! optional config file. Unset values fall back to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{ListRole, ListRoleNames};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Runtime configuration for the recitation backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECITATION")]
pub struct AppSettings {
    /// Address to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without one the server keeps everything in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Leave the schema alone at startup instead of applying embedded
    /// migrations.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
    /// Stored name of the short items list.
    pub short_items_name: Option<String>,
    /// Stored name of the long items list.
    pub long_items_name: Option<String>,
    /// Stored name of the memorization suggestions list.
    pub memorization_name: Option<String>,
}

impl AppSettings {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Pool size for the Diesel connection pool.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether migrations run at startup.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }

    /// Role bindings with any configured name overrides applied.
    pub fn role_names(&self) -> ListRoleNames {
        [
            (ListRole::ShortItems, &self.short_items_name),
            (ListRole::LongItems, &self.long_items_name),
            (ListRole::MemorizationSuggestions, &self.memorization_name),
        ]
        .into_iter()
        .fold(ListRoleNames::default(), |names, (role, name)| {
            match name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => names.with_name(role, name),
                _ => names,
            }
        })
    }
}
