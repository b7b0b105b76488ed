//! GraphQL API over three related in-memory collections: courses, the
//! students enrolled in them, and the grades those students receive.
//!
//! Collections are seeded from JSON files at startup and live for the
//! lifetime of the process. See [`store::SchoolStore`] for the data access
//! seam and [`graphql::build_schema`] for the schema.

pub mod config;
pub mod error;
pub mod graphql;
pub mod http_server;
pub mod logging;
pub mod model;
pub mod seed;
pub mod store;

pub use config::{load_server_config, ServerConfig};
pub use error::{GradebookError, GradebookResult};
pub use http_server::GradebookHttpServer;
pub use store::{InMemoryStore, IntegrityMode, SchoolStore};
