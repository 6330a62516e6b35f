// ============================================================================
// GOOGLE SIGN-IN FFI - Botón de Google Identity Services (js/google_auth.js)
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Renderiza el botón "Sign in with Google" en el contenedor indicado.
    /// `on_profile` recibe el perfil ya decodificado del credential JWT como
    /// JSON: `{sub, email, given_name, family_name, picture}`.
    #[wasm_bindgen(js_name = initGoogleSignIn)]
    pub fn init_google_sign_in(container_id: &str, client_id: &str, on_profile: &js_sys::Function);
}
