use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};

use crate::models::Credentials;

pub const DEFAULT_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
pub const DEFAULT_API_URL: &str = "https://api.igdb.com/v4/games";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub igdb: IgdbSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IgdbSettings {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    pub token_url: String,  // Endpoint OAuth2 da Twitch
    pub api_url: String,    // Endpoint de busca de jogos da IGDB
    #[serde(default)]
    pub timeout_secs: Option<u64>,  // Sem timeout explícito quando ausente
}

impl IgdbSettings {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", DEFAULT_PORT as i64)?
            .set_default("igdb.client_id", "")?
            .set_default("igdb.client_secret", "")?
            .set_default("igdb.token_url", DEFAULT_TOKEN_URL)?
            .set_default("igdb.api_url", DEFAULT_API_URL)?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("IGDB_GATEWAY").separator("__"));

        // Variáveis de ambiente "oficiais" têm prioridade sobre tudo
        if let Ok(client_id) = std::env::var("IGDB_CLIENT_ID") {
            builder = builder.set_override("igdb.client_id", client_id)?;
        }
        if let Ok(client_secret) = std::env::var("IGDB_CLIENT_SECRET") {
            builder = builder.set_override("igdb.client_secret", client_secret)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            if !port.is_empty() {
                builder = builder.set_override("server.port", port)?;
            }
        }

        let s = builder.build()?;

        s.try_deserialize()
    }

    /// Endereço de bind do listener HTTP
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
