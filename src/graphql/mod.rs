pub mod queries;
pub mod schema;
pub mod types;

pub use schema::{build_schema, schema_sdl, AppSchema};
pub use types::{MutationRoot, QueryRoot};
