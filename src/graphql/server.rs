use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};

use super::schema::PlenumSchema;

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

/// Serve the schema on localhost. GET / renders the playground,
/// POST / executes queries.
pub async fn run_server(schema: PlenumSchema, port: u16) -> std::io::Result<()> {
    let app = Router::new().route("/", get(playground).post_service(GraphQL::new(schema)));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    tracing::info!(port, "GraphQL server listening");
    axum::serve(listener, app).await
}
