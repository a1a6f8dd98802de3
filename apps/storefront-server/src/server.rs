//! HTTP pipeline and listener

use crate::config::{AppConfig, Environment};
use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::any::Any;
use std::net::SocketAddr;
use store_service::{InternalErrorDetail, Problem};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Wrap the API router with static files and the middleware stack.
///
/// Request order: tracing, error pages, panic recovery, then the API routes
/// with the web root (and its `index.html`) as the fallback.
pub fn build_router(api: Router, config: &AppConfig) -> Router {
    let static_files = ServeDir::new(&config.server.web_root);

    api.fallback_service(static_files)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(
            config.environment,
            error_pages,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Replace the generic body of internal errors with their cause in development
async fn error_pages(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !environment.is_development() {
        return response;
    }

    let Some(InternalErrorDetail(detail)) = response.extensions().get::<InternalErrorDetail>().cloned() else {
        return response;
    };

    Problem::new(response.status(), "Internal Server Error")
        .with_detail(detail)
        .into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(%detail, "Request handler panicked");
    Problem::internal()
        .with_internal_detail(format!("handler panicked: {detail}"))
        .into_response()
}

/// Serve `router` on `addr` until Ctrl-C
pub async fn serve(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Storefront server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Storefront server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
