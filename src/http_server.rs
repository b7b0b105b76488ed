use crate::config::ServerConfig;
use crate::error::GradebookResult;
use crate::graphql::{build_schema, AppSchema};
use crate::seed::SeedData;
use crate::store::{InMemoryStore, SchoolStore};

use actix_cors::Cors;
use actix_web::guard::{self, GuardContext};
use actix_web::http::header;
use actix_web::{web, App, HttpResponse, HttpServer as ActixHttpServer, Responder};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;

pub const GRAPHQL_PATH: &str = "/graphql";

/// HTTP server exposing the gradebook GraphQL schema.
///
/// Documents are accepted on `POST /graphql` and on `GET /graphql?query=`.
/// When enabled, the GraphiQL IDE is served from a bare `GET /graphql`.
pub struct GradebookHttpServer {
    schema: AppSchema,
    bind_address: String,
    graphiql: bool,
}

/// Shared application state for the HTTP server.
pub struct AppState {
    pub schema: AppSchema,
}

impl GradebookHttpServer {
    pub fn new(schema: AppSchema, config: &ServerConfig) -> Self {
        Self {
            schema,
            bind_address: config.bind_address.clone(),
            graphiql: config.graphiql,
        }
    }

    /// Seed an in-memory store from `config.data_dir` and wrap it in a server.
    ///
    /// # Errors
    ///
    /// Returns a `GradebookError` if any seed file cannot be read or parsed.
    pub fn from_config(config: &ServerConfig) -> GradebookResult<Self> {
        let seed = SeedData::load(&config.data_dir)?;
        let store = InMemoryStore::new(seed, config.integrity);
        info!("Store initialised with {:?} integrity", store.integrity());
        let store: Arc<dyn SchoolStore> = Arc::new(store);
        Ok(Self::new(build_schema(store), config))
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Run the HTTP server until it is stopped.
    ///
    /// # Errors
    ///
    /// Returns a `GradebookError` if:
    /// * There is an error binding to the configured address
    /// * The server stops with an IO error
    pub async fn run(&self) -> GradebookResult<()> {
        info!("HTTP server running on {}", self.bind_address);
        if self.graphiql {
            info!("GraphiQL available at http://{}{}", self.bind_address, GRAPHQL_PATH);
        }

        let app_state = web::Data::new(AppState {
            schema: self.schema.clone(),
        });
        let graphiql = self.graphiql;

        ActixHttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(app_state.clone())
                .configure(|cfg| configure_routes(cfg, graphiql))
        })
        .bind(&self.bind_address)?
        .run()
        .await?;

        Ok(())
    }
}

/// Register the GraphQL routes on an actix service config.
///
/// `POST /graphql` takes JSON, multipart or `application/graphql` bodies.
/// `GET /graphql?query=...` executes the document from the query string;
/// a plain `GET /graphql` serves GraphiQL when `graphiql` is set.
pub fn configure_routes(cfg: &mut web::ServiceConfig, graphiql: bool) {
    let mut resource = web::resource(GRAPHQL_PATH)
        .route(
            web::post()
                .guard(guard::fn_guard(is_graphql_document))
                .to(execute_graphql_document),
        )
        .route(web::post().to(execute_graphql))
        .route(
            web::get()
                .guard(guard::fn_guard(has_query_param))
                .to(execute_graphql),
        );
    if graphiql {
        resource = resource.route(web::get().to(graphiql_page));
    }
    cfg.service(resource);
}

fn has_query_param(ctx: &GuardContext<'_>) -> bool {
    ctx.head().uri.query().is_some_and(|query| {
        web::Query::<HashMap<String, String>>::from_query(query)
            .is_ok_and(|params| params.contains_key("query"))
    })
}

fn is_graphql_document(ctx: &GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|content_type| content_type.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/graphql"))
}

async fn execute(state: &AppState, request: async_graphql::Request) -> GraphQLResponse {
    log::debug!(
        "Received GraphQL request (operation: {})",
        request.operation_name.as_deref().unwrap_or("<anonymous>")
    );

    let response = state.schema.execute(request).await;
    if response.is_err() {
        for error in &response.errors {
            log::warn!("GraphQL error: {}", error.message);
        }
    }
    response.into()
}

/// Execute a GraphQL query or mutation sent as JSON, multipart or query string.
pub async fn execute_graphql(
    request: GraphQLRequest,
    state: web::Data<AppState>,
) -> GraphQLResponse {
    execute(&state, request.into_inner()).await
}

/// Execute a raw `application/graphql` document body.
pub async fn execute_graphql_document(
    document: String,
    state: web::Data<AppState>,
) -> GraphQLResponse {
    execute(&state, async_graphql::Request::new(document)).await
}

pub async fn graphiql_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
