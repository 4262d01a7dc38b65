/// Tipos da autenticação OAuth2 (client credentials) da Twitch
use serde::{Deserialize, Serialize};

use super::game::null_as_default;

/// Credenciais da aplicação registrada na Twitch
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

// Nunca expor o secret em logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Resposta do endpoint de token
///
/// `token_type` e `expires_in` são lidos mas nunca validados: cada busca
/// obtém um token novo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub token_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expires_in: u64,
}
