pub mod settings;

pub use settings::{LinkdApiSettings, LinkedInSettings, ServerSettings, Settings};
