#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use trusted_by::app::*;
    use trusted_by::core::config::Config;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load server config from environment variables
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid server config, using defaults: {}", e);
            Config::default()
        }
    };
    tracing::info!(
        "Config loaded: compression={}, level={:?}",
        config.compression,
        config.compression_level
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Failed to load Leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed static assets (.br / .gz) from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let mut app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    if config.compression {
        // Brotli first, gzip as the widely supported fallback
        app = app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(config.compression_level.into()),
        );
    }

    log!("listening on http://{}", &addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
