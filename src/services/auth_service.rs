// ============================================================================
// AUTH SERVICE - Intercambia el perfil de Google por una sesión de la app
// ============================================================================
// Replica el callback de sign-in del backend de identidad: los admins entran
// siempre; el resto necesita correo institucional y se registra si no existe.
// ============================================================================

use crate::models::{derive_estudiante_id, GoogleProfile, Role, SessionUser};
use crate::services::api_client::ApiClient;

/// Completa el sign-in con el perfil que entrega Google Identity.
pub async fn complete_sign_in(profile: GoogleProfile) -> Result<SessionUser, String> {
    let api = ApiClient::new();

    log::info!("🔐 Sign-in de: {}", profile.email);

    let verification = api.verify_user(&profile.email).await?;
    let estudiante_id = derive_estudiante_id(&profile.email);

    let (role, backend_id, becado, qr_code) = match verification.user_data {
        Some(data) if verification.exists => {
            let role = if data.role == "admin" {
                Role::Admin
            } else {
                Role::User
            };
            (role, Some(data.id), data.becado.unwrap_or(false), data.qr_code)
        }
        _ => (Role::User, None, false, None),
    };

    // Los no-admin necesitan correo institucional
    if role != Role::Admin && estudiante_id.is_none() {
        log::warn!("⚠️ Correo no institucional rechazado: {}", profile.email);
        return Err("Solo se pueden registrar correos que terminen en usb.ve".to_string());
    }

    // Primera vez: crear el usuario en el backend
    if !verification.exists {
        api.create_user(
            &profile.full_name(),
            &profile.email,
            profile.picture.as_deref(),
        )
        .await?;
    }

    let user = SessionUser {
        id: backend_id.unwrap_or_else(|| profile.sub.clone()),
        name: profile.full_name(),
        email: profile.email.clone(),
        avatar: profile.picture.clone(),
        role,
        estudiante_id,
        becado,
        qr_code,
    };

    log::info!("✅ Sign-in exitoso: {} ({:?})", user.email, user.role);

    Ok(user)
}
