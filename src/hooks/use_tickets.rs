// ============================================================================
// USE TICKETS - Query client de la tabla de tickets
// ============================================================================
// Re-consulta al backend en cada cambio de query, al recuperar el foco de la
// ventana, al reconectar y en un intervalo fijo de 1 segundo (polling). Sin
// caché ni reintentos: un fallo solo levanta `is_error`.
// ============================================================================

use gloo_timers::callback::Interval;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::models::{Ticket, TicketQuery};
use crate::services::ApiClient;
use crate::utils::POLL_INTERVAL_MS;

pub struct UseTicketsHandle {
    pub tickets: UseStateHandle<Vec<Ticket>>,
    /// Total reportado por el backend (`meta.total`).
    pub total: UseStateHandle<u64>,
    pub loading: UseStateHandle<bool>,
    pub is_error: UseStateHandle<bool>,
}

#[hook]
pub fn use_tickets(query: TicketQuery) -> UseTicketsHandle {
    let tickets = use_state(Vec::<Ticket>::new);
    let total = use_state(|| 0u64);
    let loading = use_state(|| true);
    let is_error = use_state(|| false);

    {
        let tickets = tickets.clone();
        let total = total.clone();
        let loading = loading.clone();
        let is_error = is_error.clone();

        use_effect_with(query, move |query| {
            let fetch: Rc<dyn Fn()> = {
                let query = query.clone();
                let tickets = tickets.clone();
                let total = total.clone();
                let loading = loading.clone();
                let is_error = is_error.clone();

                Rc::new(move || {
                    let query = query.clone();
                    let tickets = tickets.clone();
                    let total = total.clone();
                    let loading = loading.clone();
                    let is_error = is_error.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        match ApiClient::new().get_tickets(&query).await {
                            Ok(response) => {
                                total.set(response.meta.total);
                                tickets.set(response.data);
                                is_error.set(false);
                            }
                            Err(e) => {
                                log::error!("❌ Error cargando tickets: {}", e);
                                is_error.set(true);
                            }
                        }
                        loading.set(false);
                    });
                })
            };

            // Fetch inicial para esta query (el spinner solo se muestra aquí,
            // no en cada tick del polling)
            loading.set(true);
            fetch();

            // Polling fijo
            let interval = Interval::new(POLL_INTERVAL_MS, {
                let fetch = fetch.clone();
                move || fetch()
            });

            // Re-fetch al volver el foco y al reconectar
            let on_refetch = Closure::wrap(Box::new({
                let fetch = fetch.clone();
                move |_: web_sys::Event| fetch()
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("focus", on_refetch.as_ref().unchecked_ref());
                let _ = win.add_event_listener_with_callback(
                    "online",
                    on_refetch.as_ref().unchecked_ref(),
                );
            }

            // Cleanup: cancela el intervalo y quita los listeners al
            // desmontar o cambiar la query
            move || {
                drop(interval);
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "focus",
                        on_refetch.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "online",
                        on_refetch.as_ref().unchecked_ref(),
                    );
                }
                drop(on_refetch);
            }
        });
    }

    UseTicketsHandle {
        tickets,
        total,
        loading,
        is_error,
    }
}
