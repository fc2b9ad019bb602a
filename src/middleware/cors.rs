// CORS configuration, driven by ALLOWED_ORIGINS

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;

pub fn apply_cors(router: Router, config: &ServerConfig) -> Router {
    let allow_origin = if config.cors_allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .cors_allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    router.layer(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
