use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Erros das chamadas às APIs externas (Twitch OAuth2 e IGDB)
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Credenciais ou token ausentes; nenhuma requisição é feita
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Falha de conexão, timeout ou leitura do corpo da resposta
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Corpo da resposta não tem o formato JSON esperado
    #[error("Failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn decode(status: u16, source: serde_json::Error) -> Self {
        Self::Decode { status, source }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Erros do endpoint de busca, convertidos em respostas text/plain
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Query parameter 'q' is required")]
    MissingQuery,

    #[error("Error fetching OAuth token: {0}")]
    Token(#[source] GatewayError),

    #[error("Error fetching games: {0}")]
    Games(#[source] GatewayError),

    #[error("Error encoding response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::MissingQuery => StatusCode::BAD_REQUEST,
            SearchError::Token(_) | SearchError::Games(_) | SearchError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        // (StatusCode, String) => Content-Type: text/plain; charset=utf-8
        (self.status_code(), self.to_string()).into_response()
    }
}
