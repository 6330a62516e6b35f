// ============================================================================
// SESSION SERVICE - Persistencia de la sesión en localStorage
// ============================================================================
// Único punto del crate que toca localStorage: una sola clave con la sesión
// serializada y su expiración.
// ============================================================================

use chrono::Utc;
use web_sys::Storage;

use crate::models::{SessionUser, StoredSession};
use crate::utils::STORAGE_KEY_SESSION;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Guarda la sesión con expiración fija de 24 horas.
pub fn save_session(user: &SessionUser) -> Result<(), String> {
    let storage = local_storage().ok_or("No se pudo acceder a localStorage")?;
    let session = StoredSession::new(user.clone(), Utc::now());
    let json = serde_json::to_string(&session)
        .map_err(|e| format!("Error serializando la sesión: {}", e))?;
    storage
        .set_item(STORAGE_KEY_SESSION, &json)
        .map_err(|_| "Error guardando la sesión".to_string())
}

/// Carga la sesión guardada. Las sesiones expiradas (o ilegibles) se
/// descartan y se eliminan del storage.
pub fn load_session() -> Option<SessionUser> {
    let storage = local_storage()?;
    let json = storage.get_item(STORAGE_KEY_SESSION).ok()??;

    let Ok(session) = serde_json::from_str::<StoredSession>(&json) else {
        let _ = storage.remove_item(STORAGE_KEY_SESSION);
        return None;
    };

    if session.is_expired(Utc::now()) {
        log::info!("⏰ Sesión expirada, cerrando sesión");
        let _ = storage.remove_item(STORAGE_KEY_SESSION);
        return None;
    }

    Some(session.user)
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_SESSION);
    }
    log::info!("👋 Sesión cerrada");
}
