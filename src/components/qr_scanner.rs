// ============================================================================
// QR SCANNER - Redención de tickets por cámara
// ============================================================================
// El lector JS decodifica en bucle mientras el código sigue frente a la
// cámara; el ScanDebouncer decide qué lecturas disparan el consumo. Los
// errores del decodificador llegan en cada frame sin código, así que solo
// los de cámara/permiso detienen el escáner.
// ============================================================================

use chrono::Utc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::services::ApiClient;
use crate::utils::{qr_ffi, ScanDebouncer, SCAN_DEBOUNCE_MS};

const SCANNER_CONTAINER_ID: &str = "qr-reader";

#[derive(Debug, Clone, PartialEq)]
pub enum ScannerPhase {
    Idle,
    RequestingCamera,
    Scanning,
    Error(String),
}

/// Los mensajes de decodificación fallida ("No QR code found") se repiten en
/// cada frame y no son errores; solo los de cámara o permiso justifican
/// detener el escáner.
fn is_critical_error(message: &str) -> bool {
    let lowered = message.to_lowercase();
    ["camera", "permission", "notallowed", "notreadable", "no disponible"]
        .iter()
        .any(|marker| lowered.contains(marker))
}

async fn request_camera() -> Result<(), String> {
    let window = web_sys::window().ok_or("window no disponible")?;
    let media_devices = window
        .navigator()
        .media_devices()
        .map_err(|_| "Este navegador no soporta acceso a la cámara".to_string())?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| "No se pudo solicitar la cámara".to_string())?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| "Permiso de cámara denegado".to_string())
}

#[function_component(QrScannerPage)]
pub fn qr_scanner_page() -> Html {
    let phase = use_state(|| ScannerPhase::Idle);
    let last_result = use_state(|| None::<Result<String, String>>);
    let debouncer = use_mut_ref(|| ScanDebouncer::new(SCAN_DEBOUNCE_MS));

    // Montar/desmontar el lector cuando la fase entra o sale de Scanning.
    // El contenedor ya existe en el DOM porque el render ocurre antes del
    // efecto.
    {
        let phase = phase.clone();
        let last_result = last_result.clone();
        let debouncer = debouncer.clone();

        use_effect_with((*phase).clone(), move |current| {
            let scanning = *current == ScannerPhase::Scanning;

            if scanning {
                let on_decoded = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
                    let Some(email) = payload.as_string() else {
                        return;
                    };
                    let now = Utc::now().timestamp_millis();
                    if !debouncer.borrow_mut().accept(now, &email) {
                        return;
                    }

                    log::info!("📷 QR leído: {}", email);
                    let last_result = last_result.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match ApiClient::new().consume_ticket(&email).await {
                            Ok(message) => last_result.set(Some(Ok(message))),
                            Err(message) => last_result.set(Some(Err(message))),
                        }
                    });
                });

                let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
                    let message = err
                        .as_string()
                        .unwrap_or_else(|| "Error del escáner".to_string());
                    if is_critical_error(&message) {
                        log::error!("❌ Error de cámara: {}", message);
                        qr_ffi::stop_qr_scanner();
                        phase.set(ScannerPhase::Error(message));
                    }
                });

                qr_ffi::init_qr_scanner(
                    SCANNER_CONTAINER_ID,
                    on_decoded.as_ref().unchecked_ref(),
                    on_error.as_ref().unchecked_ref(),
                );

                // El lector JS retiene los callbacks mientras viva
                on_decoded.forget();
                on_error.forget();
            }

            move || {
                if scanning {
                    qr_ffi::stop_qr_scanner();
                }
            }
        });
    }

    let on_start = {
        let phase = phase.clone();
        let last_result = last_result.clone();
        Callback::from(move |_: MouseEvent| {
            if matches!(
                *phase,
                ScannerPhase::Scanning | ScannerPhase::RequestingCamera
            ) {
                return;
            }
            last_result.set(None);
            phase.set(ScannerPhase::RequestingCamera);

            let phase = phase.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request_camera().await {
                    Ok(()) => phase.set(ScannerPhase::Scanning),
                    Err(e) => {
                        log::error!("❌ {}", e);
                        phase.set(ScannerPhase::Error(e));
                    }
                }
            });
        })
    };

    let on_stop = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| phase.set(ScannerPhase::Idle))
    };

    html! {
        <div class="qr-scanner-page">
            <h2>{"Escanear Ticket"}</h2>

            {
                match &*phase {
                    ScannerPhase::Idle => html! {
                        <button class="btn-start-scan" onclick={on_start}>
                            {"Iniciar escáner"}
                        </button>
                    },
                    ScannerPhase::RequestingCamera => html! {
                        <p class="scanner-status">{"Solicitando acceso a la cámara..."}</p>
                    },
                    ScannerPhase::Scanning => html! {
                        <button class="btn-stop-scan" onclick={on_stop}>
                            {"Detener escáner"}
                        </button>
                    },
                    ScannerPhase::Error(message) => html! {
                        <>
                            <div class="scanner-error">{message.clone()}</div>
                            <button class="btn-start-scan" onclick={on_start}>
                                {"Reintentar"}
                            </button>
                        </>
                    },
                }
            }

            <div
                id={SCANNER_CONTAINER_ID}
                class={classes!(
                    "scanner-container",
                    (*phase != ScannerPhase::Scanning).then_some("scanner-hidden"),
                )}
            ></div>

            {
                match &*last_result {
                    Some(Ok(message)) => html! {
                        <div class="scan-feedback scan-success">{message.clone()}</div>
                    },
                    Some(Err(message)) => html! {
                        <div class="scan-feedback scan-error">{message.clone()}</div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errores_de_decodificacion_no_detienen_el_escaner() {
        assert!(!is_critical_error("No QR code found"));
        assert!(!is_critical_error("QR code parse error"));
    }

    #[test]
    fn errores_de_camara_y_permiso_son_criticos() {
        assert!(is_critical_error("NotAllowedError: Permission denied"));
        assert!(is_critical_error("Camera not found"));
        assert!(is_critical_error("NotReadableError: device in use"));
    }
}
