pub mod activities;
pub mod app;
pub mod config;
pub mod state;

mod assets;
mod templates;

use std::net::SocketAddr;

pub async fn serve(addr: SocketAddr, config: config::AppConfig) {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app::app(config))
        .await
        .expect("server error");
}
