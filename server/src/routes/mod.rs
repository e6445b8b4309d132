//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health probe, the compiled client bundle under
//! `/pkg`, and Leptos SSR of the landing page into a single Axum router. The
//! server holds no state of its own; everything interactive runs in the
//! hydrated client.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// Routes that do not go through Leptos.
fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full site: health probe + Leptos SSR at `/` + static bundle at `/pkg`.
pub fn app(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    let router = api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    if config.compression { router.layer(CompressionLayer::new()) } else { router }
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Page not found.")
}
