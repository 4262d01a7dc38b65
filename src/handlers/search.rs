use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tokio::time::Instant;

use crate::models::GameRecord;
use crate::services::{IgdbClient, TwitchTokenProvider};
use crate::utils::logging::*;
use crate::utils::SearchError;
use crate::AppState;

const SEARCH_ENDPOINT: &str = "/games/search";

/// Primeiro valor de `key` na query string (chaves repetidas são ignoradas)
pub fn first_param(params: &[(String, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// GET /games/search?q=<texto>
///
/// Token OAuth2 novo a cada requisição, depois a busca na IGDB. Qualquer
/// falha encerra a requisição com text/plain.
pub async fn search_games(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let start_time = Instant::now();
    log_request_received(SEARCH_ENDPOINT, "GET");

    // Query string malformada conta como `q` ausente
    let query = params
        .ok()
        .and_then(|Query(pairs)| first_param(&pairs, "q"))
        .unwrap_or_default();

    let response = match run_search(&state, &query).await.and_then(encode_games) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            if matches!(e, SearchError::MissingQuery) {
                log_validation_error("q", "parâmetro ausente ou vazio");
            } else {
                log_error(&format!("❌ Busca '{}' falhou: {}", query, e));
            }
            e.into_response()
        }
    };

    let processing_time = start_time.elapsed().as_millis() as u64;
    log_request_processed(SEARCH_ENDPOINT, response.status().as_u16(), processing_time);

    response
}

/// Sequência token → busca, sem estado compartilhado entre requisições
async fn run_search(state: &AppState, query: &str) -> Result<Vec<GameRecord>, SearchError> {
    if query.is_empty() {
        return Err(SearchError::MissingQuery);
    }

    let token_provider = TwitchTokenProvider::new(state.http_client.clone(), &state.settings.igdb);
    let access_token = token_provider.fetch_token().await.map_err(SearchError::Token)?;

    let igdb = IgdbClient::new(state.http_client.clone(), &state.settings.igdb);
    igdb.search_games(query, &access_token).await.map_err(SearchError::Games)
}

fn encode_games(games: Vec<GameRecord>) -> Result<Vec<u8>, SearchError> {
    serde_json::to_vec(&games).map_err(SearchError::Encode)
}
