use axum::routing::get;
use axum::{Json, Router};
use emapi_kernel::server::ApiState;
use emapi_kernel::server::openapi::openapi;
use emapi_kernel::server::router::system_router;
use tower_http::trace::TraceLayer;
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let docs = state.config.docs.clone();
    let api = openapi(state.metadata());

    // Separate the documented routes from the assembled OpenAPI document
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .with_state(state)
        .split_for_parts();

    let mut app = Router::new().merge(api_routes);

    if docs.enabled {
        debug!(spec = %docs.spec_path, ui = %docs.ui_path, "Mounting API documentation");

        let spec = api_doc.clone();
        app = app
            .route(
                &docs.spec_path,
                get(move || {
                    let spec = spec.clone();
                    async move { Json(spec) }
                }),
            )
            .merge(Scalar::with_url(docs.ui_path, api_doc));
    }

    app.layer(TraceLayer::new_for_http())
}
