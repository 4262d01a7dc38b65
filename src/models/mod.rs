pub mod game;
pub mod token;

pub use game::GameRecord;
pub use token::{AccessToken, Credentials};
