//! Infra HTTP compartilhada pelos clientes da Twitch e da IGDB

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::IgdbSettings;
use crate::utils::logging::*;
use crate::utils::{GatewayError, GatewayResult};

/// Cria o cliente HTTP usado nas chamadas externas
///
/// Sem `timeout_secs` configurado, valem os defaults do reqwest (sem
/// timeout total).
pub fn build_http_client(settings: &IgdbSettings) -> GatewayResult<Client> {
    let mut builder = Client::builder();

    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| GatewayError::configuration(format!("Failed to create HTTP client: {}", e)))
}

/// Lê o corpo da resposta e decodifica como JSON
///
/// O status HTTP não decide sucesso: um corpo de erro que não bate com `T`
/// vira `GatewayError::Decode` com o status anotado.
pub(crate) async fn decode_json<T: DeserializeOwned>(upstream: &str, response: Response) -> GatewayResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log_upstream_status(upstream, status.as_u16());
    }

    serde_json::from_str(&body).map_err(|e| GatewayError::decode(status.as_u16(), e))
}
