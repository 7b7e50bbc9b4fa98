use axum::Router;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::WebsiteRepository;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    edit_component_handler, export_handler, export_website_handler, generate_component_handler,
    get_conversation_handler, get_website_handler, health_handler, remove_component_handler,
    rename_website_handler, reorder_components_handler, submit_component_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: WebsiteRepository + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let website_routes = Router::new()
        .route("/", get(get_website_handler::<R>))
        .route("/title", put(rename_website_handler::<R>))
        .route("/components", post(submit_component_handler::<R>))
        .route(
            "/components/{id}",
            put(edit_component_handler::<R>).delete(remove_component_handler::<R>),
        )
        .route("/conversations/{id}", get(get_conversation_handler::<R>))
        .route("/order", put(reorder_components_handler::<R>))
        .route("/export", get(export_website_handler::<R>));

    Router::new()
        .route("/health", get(health_handler::<R>))
        .route("/api/ai", post(generate_component_handler::<R>))
        .route("/api/save", post(export_handler))
        .nest("/api/website", website_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
