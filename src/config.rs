use serde::{Deserialize, Serialize};

/// Configuración de la app, resuelta en tiempo de compilación
/// (build.rs carga .env y la expone via `option_env!`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub google_client_id: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:7500".to_string(),
            google_client_id: String::new(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("http://localhost:7500")
                .to_string(),
            google_client_id: option_env!("GOOGLE_CLIENT_ID")
                .unwrap_or("")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
