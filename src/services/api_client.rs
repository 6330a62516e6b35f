// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al backend de tickets
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{BackendUser, StatsQuery, TicketQuery, TicketStats, TicketsResponse};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Verificar si un correo ya está registrado
    pub async fn verify_user(&self, email: &str) -> Result<VerifyUserResponse, String> {
        let url = format!("{}/api/user/verify", self.base_url);
        let request = VerifyUserRequest {
            email: email.to_string(),
        };

        log::info!("🔍 Verificando usuario: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<VerifyUserResponse>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }

    /// Registrar un usuario nuevo (rol "user")
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        avatar: Option<&str>,
    ) -> Result<(), String> {
        let url = format!("{}/api/user", self.base_url);
        let request = CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar.map(|s| s.to_string()),
            role: "user".to_string(),
        };

        log::info!("📝 Registrando usuario: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == 201 {
            log::info!("✅ Usuario registrado: {}", email);
            Ok(())
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }

    /// Listar todos los usuarios registrados
    pub async fn get_users(&self) -> Result<Vec<BackendUser>, String> {
        let url = format!("{}/api/user", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Vec<BackendUser>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Obtener el QR personal del usuario (data URI en base64)
    pub async fn get_qr_code(&self, email: &str) -> Result<String, String> {
        let url = format!(
            "{}/api/user/qrcode?email={}",
            self.base_url,
            urlencoding::encode(email)
        );

        log::info!("📇 Obteniendo QR para: {}", email);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let qr = response
            .json::<QrCodeResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(qr.qr_code)
    }

    /// Listar tickets paginados/filtrados. El backend filtra, ordena y
    /// cuenta; el cliente confía en `meta.total` tal cual.
    pub async fn get_tickets(&self, query: &TicketQuery) -> Result<TicketsResponse, String> {
        let url = format!("{}/api/ticket?{}", self.base_url, query.to_query_string());

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<TicketsResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Estadísticas agregadas del periodo filtrado
    pub async fn get_ticket_stats(&self, query: &StatsQuery) -> Result<TicketStats, String> {
        let qs = query.to_query_string();
        let url = if qs.is_empty() {
            format!("{}/api/ticket/stats", self.base_url)
        } else {
            format!("{}/api/ticket/stats?{}", self.base_url, qs)
        };

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<TicketStats>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Emitir tickets para un usuario. El backend espera quantity como string.
    pub async fn create_tickets(
        &self,
        precio_ticket: f64,
        quantity: u32,
        user_id: &str,
    ) -> Result<String, String> {
        let url = format!("{}/api/ticket", self.base_url);
        let request = CreateTicketsRequest {
            precio_ticket,
            quantity: quantity.to_string(),
            user_id: user_id.to_string(),
        };

        log::info!(
            "🎫 Emitiendo {} ticket(s) de {} $ para usuario {}",
            quantity,
            precio_ticket,
            user_id
        );

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == 201 {
            let body = response
                .json::<MessageResponse>()
                .await
                .map_err(|e| format!("Parse error: {}", e))?;
            log::info!("✅ Tickets emitidos: {}", body.message);
            Ok(body.message)
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }

    /// Consumir un ticket por correo (única vía de escritura de estado).
    /// POST único, sin reintentos: el backend decide la transición.
    /// Tanto el éxito como el error traen un mensaje legible.
    pub async fn consume_ticket(&self, email: &str) -> Result<String, String> {
        let url = format!("{}/api/ticket/consume-ticket", self.base_url);
        let request = ConsumeTicketRequest {
            email: email.to_string(),
        };

        log::info!("🍽️ Consumiendo ticket de: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Error al comunicarse con el servidor: {}", e))?;

        let ok = response.ok();
        let body = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if ok {
            log::info!("✅ Ticket consumido: {}", body.message);
            Ok(body.message)
        } else {
            log::warn!("⚠️ Consumo rechazado: {}", body.message);
            Err(body.message)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct VerifyUserRequest {
    email: String,
}

#[derive(serde::Deserialize)]
pub struct VerifyUserResponse {
    pub exists: bool,
    #[serde(rename = "userData", default)]
    pub user_data: Option<VerifiedUserData>,
}

#[derive(serde::Deserialize)]
pub struct VerifiedUserData {
    #[serde(rename = "_id")]
    pub id: String,
    pub role: String,
    #[serde(default)]
    pub becado: Option<bool>,
    #[serde(rename = "qrCode", default)]
    pub qr_code: Option<String>,
}

#[derive(serde::Serialize)]
struct CreateUserRequest {
    name: String,
    email: String,
    avatar: Option<String>,
    role: String,
}

#[derive(serde::Deserialize)]
struct QrCodeResponse {
    #[serde(rename = "qrCode")]
    qr_code: String,
}

#[derive(serde::Serialize)]
struct CreateTicketsRequest {
    #[serde(rename = "precioTicket")]
    precio_ticket: f64,
    quantity: String,
    #[serde(rename = "userId")]
    user_id: String,
}

#[derive(serde::Serialize)]
struct ConsumeTicketRequest {
    email: String,
}

#[derive(serde::Deserialize)]
struct MessageResponse {
    message: String,
}
