pub mod groq;

use std::env;
use std::sync::Arc;

use log::{info, warn};

use crate::config::Config;
use crate::llm::LlmBackend;

pub use groq::GroqProvider;

/// Build the configured backend, if any. A missing or empty API key is not
/// an error: it selects demo mode.
pub fn from_config(config: &Config) -> Option<Arc<dyn LlmBackend>> {
    let groq = config.provider.groq.as_ref()?;
    if !groq.enabled {
        info!("Groq provider disabled in config; running in demo mode");
        return None;
    }

    match env::var("GROQ_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            // Log presence only, never the key itself.
            info!("API key loaded? true");
            Some(Arc::new(GroqProvider::new(
                key,
                groq.model.clone(),
                groq.temperature,
            )))
        }
        _ => {
            info!("API key loaded? false");
            warn!("GROQ_API_KEY not found. Set it in .env or the environment.");
            None
        }
    }
}
