/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post, put};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use provost_core::types::ServerState;
use std::sync::Arc;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(
            "/api/projects",
            get(endpoints::projects::get).post(endpoints::projects::post),
        )
        .route("/api/projects/stats", get(endpoints::projects::get_stats))
        .route("/api/projects/{project}", get(endpoints::projects::get_project))
        .route(
            "/api/projects/{project}/review",
            put(endpoints::projects::put_review),
        )
        .route("/api/user", get(endpoints::user::get))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/auth/register", post(endpoints::auth::post_register))
        .route("/api/auth/login", post(endpoints::auth::post_login))
        .route("/api/health", get(endpoints::get_health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .fallback(endpoints::handle_404)
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip.clone(), state.cli.port.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
