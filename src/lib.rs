// Biblioteca do gateway de busca IGDB
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// AppState é somente leitura: cada requisição monta seus próprios clientes
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(settings: config::Settings) -> utils::GatewayResult<Self> {
        let http_client = services::build_http_client(&settings.igdb)?;
        Ok(Self { settings, http_client })
    }
}

/// Monta o router com todas as rotas públicas
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/games/search", get(handlers::search_games))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
