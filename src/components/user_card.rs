// ============================================================================
// USER CARD - Carnet del usuario con su QR y exportación a PDF
// ============================================================================

use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::models::SessionUser;
use crate::services::ApiClient;
use crate::utils::pdf_ffi;

/// Selector de la región del DOM que se captura para el PDF.
const CARNET_SELECTOR: &str = ".info-container";

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    pub user: SessionUser,
}

#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let qr_code = use_state(|| props.user.qr_code.clone());
    let qr_error = use_state(|| false);
    let generating = use_state(|| false);

    // Obtener el QR del backend si la sesión no lo trae cacheado
    {
        let qr_code = qr_code.clone();
        let qr_error = qr_error.clone();
        let email = props.user.email.clone();

        use_effect_with(email, move |email| {
            if qr_code.is_none() {
                let email = email.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().get_qr_code(&email).await {
                        Ok(qr) => qr_code.set(Some(qr)),
                        Err(e) => {
                            log::error!("❌ Error obteniendo QR: {}", e);
                            qr_error.set(true);
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_download = {
        let generating = generating.clone();

        Callback::from(move |_: MouseEvent| {
            if *generating {
                return;
            }
            let generating = generating.clone();

            wasm_bindgen_futures::spawn_local(async move {
                generating.set(true);

                let promise =
                    pdf_ffi::export_carnet_pdf(CARNET_SELECTOR, "Carnet de estudiante", "carnet.pdf");
                if let Err(e) = JsFuture::from(promise).await {
                    log::error!("❌ Error generando PDF: {:?}", e);
                }

                generating.set(false);
            });
        })
    };

    html! {
        <div class="user-card">
            <div class="info-container">
                {
                    if let Some(qr) = (*qr_code).clone() {
                        html! { <img class="qr-image" src={qr} alt="QR Code" /> }
                    } else if *qr_error {
                        html! { <div class="qr-missing">{"QR no disponible"}</div> }
                    } else {
                        html! { <div class="qr-loading">{"Cargando código QR..."}</div> }
                    }
                }
                <div class="carnet-line">
                    {"Nombre: "}<span class="carnet-value">{&props.user.name}</span>
                </div>
                <div class="carnet-line">
                    {"Email: "}<span class="carnet-value">{&props.user.email}</span>
                </div>
                if let Some(estudiante_id) = &props.user.estudiante_id {
                    <div class="carnet-line">
                        {"Carnet: "}<span class="carnet-value">{estudiante_id}</span>
                    </div>
                }
            </div>

            <button
                class="btn-download-pdf"
                disabled={*generating}
                onclick={on_download}
            >
                { if *generating { "Generando PDF..." } else { "Descargar PDF" } }
            </button>
        </div>
    }
}
