//! Peace Marketing Site
//!
//! Serves the server-rendered page and its static assets.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> peace_site::SiteResult<()> {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use peace_site::app::{interaction_config, App};
    use peace_site::config::ServerConfig;
    use peace_site::fileserv::file_and_error_handler;
    use peace_site::SiteError;
    use tower_http::trace::TraceLayer;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let server_config = ServerConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&server_config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    interaction_config().validate()?;

    let conf = get_configuration(server_config.leptos_config_file.as_deref())
        .await
        .map_err(|e| SiteError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Peace site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser entry point is `peace_site::hydrate`.
}
