// ============================================================================
// SESSION - Sesión de usuario creada a partir del sign-in con Google
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Vida máxima de la sesión: 24 horas (igual que el maxAge del backend).
pub const SESSION_MAX_AGE_HOURS: i64 = 24;

/// Dominio institucional del cual se deriva el estudianteID.
pub const INSTITUTIONAL_DOMAIN: &str = "usb.ve";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Perfil que entrega el flujo de Google Identity (via FFI, ya decodificado).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleProfile {
    pub sub: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub picture: Option<String>,
}

impl GoogleProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: Role,
    #[serde(rename = "estudianteID")]
    pub estudiante_id: Option<String>,
    #[serde(default)]
    pub becado: bool,
    #[serde(rename = "qrCode")]
    pub qr_code: Option<String>,
}

/// Sesión persistida en localStorage, con expiración fija.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(user: SessionUser, now: DateTime<Utc>) -> Self {
        Self {
            user,
            expires_at: now + Duration::hours(SESSION_MAX_AGE_HOURS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Deriva el estudianteID a partir del correo institucional
/// (`12-34567@usb.ve` → `12-34567`). Correos de otros dominios no tienen.
pub fn derive_estudiante_id(email: &str) -> Option<String> {
    let (local, domain) = email.split_once('@')?;
    if domain.eq_ignore_ascii_case(INSTITUTIONAL_DOMAIN) && !local.is_empty() {
        Some(local.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> SessionUser {
        SessionUser {
            id: "abc123".into(),
            name: "Ana Pérez".into(),
            email: "12-34567@usb.ve".into(),
            avatar: None,
            role: Role::User,
            estudiante_id: Some("12-34567".into()),
            becado: false,
            qr_code: None,
        }
    }

    #[test]
    fn estudiante_id_solo_para_correos_institucionales() {
        assert_eq!(
            derive_estudiante_id("12-34567@usb.ve"),
            Some("12-34567".to_string())
        );
        assert_eq!(derive_estudiante_id("alguien@gmail.com"), None);
        assert_eq!(derive_estudiante_id("sin-arroba"), None);
        assert_eq!(derive_estudiante_id("@usb.ve"), None);
    }

    #[test]
    fn sesion_expira_a_las_24_horas() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let session = StoredSession::new(user(), created);

        assert!(!session.is_expired(created + Duration::hours(23)));
        assert!(session.is_expired(created + Duration::hours(24)));
        assert!(session.is_expired(created + Duration::hours(25)));
    }

    #[test]
    fn role_se_serializa_en_minusculas() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }
}
