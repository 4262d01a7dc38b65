pub mod settings;

pub use settings::{IgdbSettings, ServerSettings, Settings};
