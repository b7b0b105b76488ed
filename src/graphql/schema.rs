use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

use super::types::{MutationRoot, QueryRoot};
use crate::store::SchoolStore;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<dyn SchoolStore>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// The schema in SDL form. Needs no store.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
