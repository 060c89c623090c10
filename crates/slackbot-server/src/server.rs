use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use shared::error::CommonError;
use slackbot::App;
use tracing::info;

pub struct StartAxumServerParams {
    pub host: String,
    pub port: u16,
    pub app: Arc<App>,
}

/// Starts the Axum server and blocks until shutdown completes.
///
/// SIGINT triggers a graceful shutdown: the listener stops accepting
/// new connections and in-flight webhook cycles get a bounded drain
/// window.
pub async fn start_axum_server(params: StartAxumServerParams) -> Result<(), CommonError> {
    let addr: SocketAddr = format!("{}:{}", params.host, params.port)
        .parse()
        .map_err(|e| CommonError::AddrParseError { source: e })?;

    info!("Starting server on {}", addr);

    let handle = axum_server::Handle::new();

    let (router, _openapi) = slackbot::router::create_router().split_for_parts();
    let router: Router = router.with_state(params.app);

    info!("Router initiated");

    let handle_clone = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down axum server, waiting for in-flight requests to complete...");
            handle_clone.graceful_shutdown(Some(Duration::from_secs(30)));
        }
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .map_err(|e| CommonError::IoError { source: e })?;

    Ok(())
}
