//! Page Routes
//!
//! Every view path gets the bundle's `index.html`; the frontend router then
//! picks the view. Paths that are neither a view nor a bundle asset still get
//! the shell, with a 404 status, so the client can render its not-found page.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
};
use std::sync::Arc;

use crate::routing::ViewKind;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET / and GET /documentation
pub async fn view_page(State(state): State<Arc<AppState>>, uri: Uri) -> ServerResult<Html<String>> {
    tracing::debug!(path = %uri.path(), "Serving view shell");
    read_shell(&state).await.map(Html)
}

/// Fallback behind the static asset service
pub async fn fallback(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> ServerResult<(StatusCode, Html<String>)> {
    let shell = read_shell(&state).await?;

    match ViewKind::resolve(uri.path()) {
        Ok(view) => {
            tracing::debug!(path = %uri.path(), %view, "Serving view shell");
            Ok((StatusCode::OK, Html(shell)))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Serving not-found shell");
            Ok((StatusCode::NOT_FOUND, Html(shell)))
        }
    }
}

async fn read_shell(state: &AppState) -> ServerResult<String> {
    let path = state.index_path();
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ServerError::Bundle { path, source })
}
