pub mod client;
pub mod generate;
pub mod translate;
pub mod types;

pub use generate::GeminiPromptClient;
pub use translate::GeminiTranslateClient;
