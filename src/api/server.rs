use crate::api::routes;
use crate::db::Database;
use std::net::SocketAddr;
use tracing::info;

/// Starts and runs the HTTP server using Axum
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `database` - Shared database handle injected into the router
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Ok if the server ran to
///   completion, Error if binding or serving fails
pub async fn launch_server(
    port: u16,
    database: Database,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = routes::app(database);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
