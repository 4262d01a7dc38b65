//! OAuth2 client credentials da Twitch
//!
//! A IGDB usa a Twitch como provedor de identidade: o par client_id /
//! client_secret é trocado por um bearer token a cada busca. Não há cache
//! nem refresh.

use reqwest::Client;

use crate::config::IgdbSettings;
use crate::models::{AccessToken, Credentials};
use crate::utils::logging::*;
use crate::utils::{mask_secret, GatewayError, GatewayResult};
use super::http::decode_json;

const GRANT_TYPE: &str = "client_credentials";

/// Cliente do endpoint de token da Twitch
pub struct TwitchTokenProvider {
    credentials: Credentials,
    token_url: String,
    http_client: Client,
}

impl TwitchTokenProvider {
    pub fn new(http_client: Client, settings: &IgdbSettings) -> Self {
        Self {
            credentials: settings.credentials(),
            token_url: settings.token_url.clone(),
            http_client,
        }
    }

    /// Obtém um token novo e retorna apenas a string do access token
    pub async fn fetch_token(&self) -> GatewayResult<String> {
        self.fetch_access_token().await.map(|token| token.access_token)
    }

    /// Obtém um token novo com todos os campos da resposta
    ///
    /// # Retorno
    /// - `Err(GatewayError::Configuration)`: credenciais ausentes (nenhuma requisição é feita)
    /// - `Err(GatewayError::Transport)`: falha de rede
    /// - `Err(GatewayError::Decode)`: resposta não é um token
    pub async fn fetch_access_token(&self) -> GatewayResult<AccessToken> {
        if !self.credentials.is_complete() {
            return Err(GatewayError::configuration(
                "IGDB Client ID or Client Secret is not set",
            ));
        }

        log_info(&format!("🔐 [OAuth2] Solicitando token - POST {} (client_id: {})",
            self.token_url, self.credentials.client_id));

        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", GRANT_TYPE),
        ];

        // .form() define Content-Type: application/x-www-form-urlencoded
        let response = self.http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                log_upstream_error("twitch-oauth", &e.to_string());
                GatewayError::Transport(e)
            })?;

        let token: AccessToken = decode_json("twitch-oauth", response).await.map_err(|e| {
            log_upstream_error("twitch-oauth", &e.to_string());
            e
        })?;

        log_info(&format!("✅ [OAuth2] Access token obtido: {} (expira em {}s)",
            mask_secret(&token.access_token, 6), token.expires_in));

        Ok(token)
    }
}
