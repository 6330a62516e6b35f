// ============================================================================
// QR SCANNER FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers para el lector QR de cámara (js/qr_scanner.js) - Sin estado,
// sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Monta el lector en el contenedor indicado y empieza a decodificar.
    /// `on_decoded` recibe el payload como string; `on_error` recibe el
    /// mensaje de error del decodificador.
    #[wasm_bindgen(js_name = initQrScanner)]
    pub fn init_qr_scanner(
        container_id: &str,
        on_decoded: &js_sys::Function,
        on_error: &js_sys::Function,
    );

    #[wasm_bindgen(js_name = stopQrScanner)]
    pub fn stop_qr_scanner();
}
