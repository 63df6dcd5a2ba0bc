use std::time::Duration;

use llm::ClientConfig;

/// Runtime configuration assembled once at startup and threaded through the
/// application; nothing reads the process environment after this is built.
#[derive(Clone, Debug)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,
    pub request_timeout: Duration,
}

impl Settings {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.api_key.clone())
            .with_model(self.model.clone())
            .with_timeout(self.request_timeout);
        if let Some(api_base) = &self.api_base {
            config = config.with_api_base(api_base.clone());
        }
        config
    }
}
