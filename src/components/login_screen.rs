// ============================================================================
// LOGIN SCREEN - Landing con el botón "Sign in with Google"
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::UseSessionHandle;
use crate::models::GoogleProfile;
use crate::utils::google_ffi;

const SIGNIN_CONTAINER_ID: &str = "google-signin";

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session_handle =
        use_context::<UseSessionHandle>().expect("LoginScreen requiere SessionContextProvider");

    // Montar el botón de Google una sola vez
    {
        let sign_in = session_handle.sign_in.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |profile_json: JsValue| {
                let Some(json) = profile_json.as_string() else {
                    log::error!("❌ El credential de Google no es un string");
                    return;
                };

                match serde_json::from_str::<GoogleProfile>(&json) {
                    Ok(profile) => {
                        log::info!("🔑 Credential recibido para: {}", profile.email);
                        sign_in.emit(profile);
                    }
                    Err(e) => {
                        log::error!("❌ Perfil de Google inválido: {}", e);
                    }
                }
            }) as Box<dyn FnMut(JsValue)>);

            google_ffi::init_google_sign_in(
                SIGNIN_CONTAINER_ID,
                &CONFIG.google_client_id,
                closure.as_ref().unchecked_ref(),
            );

            // El botón se registra una sola vez; el closure debe vivir
            // mientras la página exista
            closure.forget();
            || ()
        });
    }

    let signing_in = *session_handle.signing_in;
    let error = (*session_handle.error).clone();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🍽️"}</div>
                    </div>
                    <h1>{"Sistema de Comedores USB"}</h1>
                    <p>{"Tickets de comedor con tu cuenta institucional"}</p>
                </div>

                if signing_in {
                    <div class="login-loading">
                        <div class="spinner"></div>
                        <p>{"Verificando cuenta..."}</p>
                    </div>
                } else {
                    <div id={SIGNIN_CONTAINER_ID} class="google-signin-container"></div>
                }

                if let Some(message) = error {
                    <div class="login-error">
                        <p>{message}</p>
                    </div>
                }

                <div class="login-footer">
                    <p>{"Solo correos @usb.ve pueden registrarse"}</p>
                </div>
            </div>
        </div>
    }
}
