pub mod http;
pub mod igdb;
pub mod twitch_auth;

pub use http::build_http_client;
pub use igdb::{build_search_body, IgdbClient};
pub use twitch_auth::TwitchTokenProvider;
