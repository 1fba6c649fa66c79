/// API error types and handling
pub mod errors;
/// HTTP request handlers
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
