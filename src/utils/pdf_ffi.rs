// ============================================================================
// PDF FFI - Exportar una región del DOM a PDF (js/carnet_pdf.js)
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Captura el elemento indicado como imagen y la incrusta en un PDF A4
    /// con título y fecha de generación. Devuelve una promesa que resuelve
    /// cuando el archivo se descargó.
    #[wasm_bindgen(js_name = exportCarnetPdf)]
    pub fn export_carnet_pdf(selector: &str, title: &str, filename: &str) -> js_sys::Promise;
}
