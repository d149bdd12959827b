// File: services/mynotes_backend/src/lib.rs
use axum::{routing::get, Router};
use http::{header, Method};
use mynotes_push::{routes as push_routes, PushState};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const WELCOME: &str = "Welcome to My Notes reminder API!";

/// The browser app is served from another origin (the dev server or a static
/// host), so every route answers CORS preflights.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn app(state: Arc<PushState>) -> Router {
    #[allow(unused_mut)] // mutated when the openapi feature is on
    let mut app = Router::new()
        .route("/", get(|| async { WELCOME }))
        .merge(push_routes(state));

    #[cfg(feature = "openapi")]
    {
        use mynotes_push::openapi::PushApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "My Notes API",
                version = "0.1.0",
                description = "Push subscriptions and task reminders",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            tags((name = "MyNotes", description = "Core service endpoints")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(PushApiDoc::openapi());
        tracing::info!("Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    app.layer(cors())
}
