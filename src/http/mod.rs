//! # HTTP Surface
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET, POST | `/dishes` | 200, 201 |
//! | GET, PUT | `/dishes/{dishId}` | 200 |
//! | GET, POST | `/orders` | 200, 201 |
//! | GET, PUT, DELETE | `/orders/{orderId}` | 200, 200, 204 |
//!
//! Payloads travel as `{"data": ...}` and failures as `{"error": "..."}`. Any other method
//! on these paths is a 405 and any other path a 404.

pub mod error;
pub mod routes;

pub use error::*;

use crate::clients::{DishClient, OrderClient};
use crate::config::Config;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use routes::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

/// Handler state: one client per actor.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishClient,
    pub orders: OrderClient,
}

/// The `{"data": ...}` envelope of every successful response.
#[derive(Debug, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/dishes",
            get(list_dishes).post(create_dish).fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(read_dish).put(update_dish).fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(list_orders).post(create_order).fallback(method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(read_order)
                .put(update_order)
                .delete(delete_order)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serves the API on `config.port` until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config, state: AppState) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
