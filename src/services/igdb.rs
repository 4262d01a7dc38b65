//! Cliente da API de jogos da IGDB (v4)

use reqwest::Client;

use crate::config::IgdbSettings;
use crate::models::GameRecord;
use crate::utils::logging::*;
use crate::utils::{GatewayError, GatewayResult};
use super::http::decode_json;

/// Monta o corpo Apicalypse da busca
///
/// A query é interpolada literalmente: aspas dentro dela não são escapadas.
pub fn build_search_body(query: &str) -> String {
    format!(r#"search "{}"; fields name, first_release_date, summary;"#, query)
}

#[derive(Clone)]
pub struct IgdbClient {
    client_id: String,
    api_url: String,
    http_client: Client,
}

impl IgdbClient {
    pub fn new(http_client: Client, settings: &IgdbSettings) -> Self {
        Self {
            client_id: settings.client_id.clone(),
            api_url: settings.api_url.clone(),
            http_client,
        }
    }

    /// Busca jogos pelo texto livre `query`
    ///
    /// Retorna a lista exatamente como veio da API (pode ser vazia).
    pub async fn search_games(&self, query: &str, access_token: &str) -> GatewayResult<Vec<GameRecord>> {
        if self.client_id.is_empty() || access_token.is_empty() {
            return Err(GatewayError::configuration("IGDB Client ID or Access Token is not set"));
        }

        tracing::debug!("POST {} - search: {}", self.api_url, query);

        let response = self.http_client
            .post(&self.api_url)
            .header("Client-ID", &self.client_id)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Content-Type", "text/plain")
            .body(build_search_body(query))
            .send()
            .await
            .map_err(|e| {
                log_upstream_error("igdb", &e.to_string());
                GatewayError::Transport(e)
            })?;

        let games: Vec<GameRecord> = decode_json("igdb", response).await.map_err(|e| {
            log_upstream_error("igdb", &e.to_string());
            e
        })?;

        log_info(&format!("🎮 [IGDB] {} jogos encontrados para '{}'", games.len(), query));

        Ok(games)
    }
}
