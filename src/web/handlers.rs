//! HTTP routing and the page handler.

use crate::config::{DashboardConfig, ListenConfig};
use crate::dashboard::{Dashboard, DashboardError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Read-only configuration handed to every request. Datasets are not held
/// here; each request loads its own copy.
#[derive(Clone)]
pub struct AppState {
    config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(listen: ListenConfig, state: AppState) -> std::io::Result<()> {
    let addr = listen.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "dashboard listening");
    axum::serve(listener, build_router(state)).await
}

async fn index_handler(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let config = Arc::clone(&state.config);

    let result = tokio::task::spawn_blocking(move || Dashboard::render_page(&config))
        .await
        .map_err(|e| DashboardError::Worker(e.to_string()))
        .and_then(|page| page);

    match result {
        Ok(html) => {
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                bytes = html.len(),
                "rendered dashboard"
            );
            Html(html).into_response()
        }
        Err(e) => {
            error!(error = %e, "dashboard request failed");
            error_response(&e, state.config.debug)
        }
    }
}

fn error_response(err: &DashboardError, debug: bool) -> Response {
    let body = if debug {
        format!("Internal Server Error\n\n{err}")
    } else {
        "Internal Server Error".to_string()
    };
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoadError;

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn error_detail_only_in_debug() {
        let err = DashboardError::Load(LoadError::Missing {
            path: "data/matches.csv".into(),
        });

        let quiet = error_response(&err, false);
        assert_eq!(quiet.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(quiet).await, "Internal Server Error");

        let verbose = error_response(&err, true);
        assert_eq!(verbose.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(verbose).await;
        assert!(body.starts_with("Internal Server Error\n\n"));
        assert!(body.contains("Dataset not found: data/matches.csv"));
    }

    #[test]
    fn state_shares_one_config() {
        let state = AppState::new(DashboardConfig {
            debug: true,
            ..DashboardConfig::default()
        });
        let copy = state.clone();
        assert!(copy.config.debug);
        assert!(Arc::ptr_eq(&state.config, &copy.config));
    }
}
