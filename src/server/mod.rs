mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{orderings, sessions};

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/destinations/order/point", post(orderings::from_point))
        .route("/destinations/order/anchor", post(orderings::from_anchor))
        .route("/sessions", post(sessions::create))
        .route("/sessions/active/:username", get(sessions::find_active))
        .route("/sessions/:id/places/complete", patch(sessions::mark_completed))
        .route("/sessions/:id/complete", patch(sessions::complete))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
