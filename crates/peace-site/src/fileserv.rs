//! Static files with a rendered-page fallback
//!
//! Anything under the Leptos site root (APK, icon, screenshots, `pkg/`) is
//! served as-is; every other path renders the app, which answers unknown
//! routes with the not-found page.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::error;

use crate::app::App;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    match serve_static(uri, &options.site_root).await {
        Ok(res) if res.status() == StatusCode::OK => res,
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(options.to_owned(), App);
            handler(req).await.into_response()
        }
        Err(err) => {
            error!("static file lookup failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
        }
    }
}

/// Look `uri` up under `root`. Misses come back as a non-200 response.
pub async fn serve_static(uri: Uri, root: &str) -> Result<Response, axum::http::Error> {
    let req = Request::builder().uri(uri).body(Body::empty())?;
    let res = match ServeDir::new(root).oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(never) => match never {},
    };
    Ok(res)
}
