use yew::prelude::*;

use crate::models::{StatsQuery, TicketStats};
use crate::services::ApiClient;

pub struct UseTicketStatsHandle {
    pub stats: UseStateHandle<Option<TicketStats>>,
    pub loading: UseStateHandle<bool>,
    pub is_error: UseStateHandle<bool>,
}

/// Estadísticas agregadas, re-consultadas en cada cambio de filtros.
#[hook]
pub fn use_ticket_stats(query: StatsQuery) -> UseTicketStatsHandle {
    let stats = use_state(|| None::<TicketStats>);
    let loading = use_state(|| true);
    let is_error = use_state(|| false);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        let is_error = is_error.clone();

        use_effect_with(query, move |query| {
            let query = query.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);

                match ApiClient::new().get_ticket_stats(&query).await {
                    Ok(response) => {
                        stats.set(Some(response));
                        is_error.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        is_error.set(true);
                    }
                }

                loading.set(false);
            });

            || ()
        });
    }

    UseTicketStatsHandle {
        stats,
        loading,
        is_error,
    }
}
