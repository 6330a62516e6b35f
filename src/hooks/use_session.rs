use yew::prelude::*;

use crate::models::{GoogleProfile, SessionUser};
use crate::services::{clear_session, complete_sign_in, load_session, save_session};

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: UseStateHandle<Option<SessionUser>>,
    /// `true` mientras se restaura la sesión guardada (evita redirecciones
    /// prematuras del guard).
    pub restoring: UseStateHandle<bool>,
    pub signing_in: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub sign_in: Callback<GoogleProfile>,
    pub sign_out: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let session = use_state(|| None::<SessionUser>);
    let restoring = use_state(|| true);
    let signing_in = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Restaurar sesión guardada al montar
    {
        let session = session.clone();
        let restoring = restoring.clone();
        use_effect_with((), move |_| {
            if let Some(user) = load_session() {
                log::info!("✅ Sesión restaurada: {}", user.email);
                session.set(Some(user));
            }
            restoring.set(false);
            || ()
        });
    }

    let sign_in = {
        let session = session.clone();
        let signing_in = signing_in.clone();
        let error = error.clone();

        Callback::from(move |profile: GoogleProfile| {
            let session = session.clone();
            let signing_in = signing_in.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                signing_in.set(true);
                error.set(None);

                match complete_sign_in(profile).await {
                    Ok(user) => {
                        if let Err(e) = save_session(&user) {
                            log::error!("❌ Error guardando sesión: {}", e);
                        }
                        session.set(Some(user));
                    }
                    Err(e) => {
                        log::error!("❌ Error en sign-in: {}", e);
                        error.set(Some(e));
                    }
                }

                signing_in.set(false);
            });
        })
    };

    let sign_out = {
        let session = session.clone();
        let error = error.clone();

        Callback::from(move |_| {
            clear_session();
            session.set(None);
            error.set(None);
        })
    };

    UseSessionHandle {
        session,
        restoring,
        signing_in,
        error,
        sign_in,
        sign_out,
    }
}
