// ============================================================================
// TICKET STATS - Cards de estadísticas del panel admin
// ============================================================================
// Lee los mismos filtros que la tabla (fechas + nombre/correo); el backend
// calcula los agregados.
// ============================================================================

use yew::prelude::*;

use crate::components::StatsCard;
use crate::hooks::{use_filters, use_ticket_stats};

#[function_component(TicketStats)]
pub fn ticket_stats() -> Html {
    let filters = use_filters();
    let stats_handle = use_ticket_stats(filters.to_stats_query());

    if *stats_handle.loading {
        return html! {
            <div class="stats-grid">
                { for (0..4).map(|i| html! { <div key={i} class="stats-skeleton"></div> }) }
            </div>
        };
    }

    if *stats_handle.is_error {
        return html! {
            <div class="stats-error">{"Error al cargar las estadísticas"}</div>
        };
    }

    let Some(stats) = (*stats_handle.stats).clone() else {
        return html! {};
    };

    html! {
        <div class="stats-grid">
            <StatsCard
                title="Tickets Emitidos"
                value={stats.total_tickets.to_string()}
                icon="🎫"
                description="Total del periodo"
                class="stats-card-blue"
            />
            <StatsCard
                title="Ingresos"
                value={format!("${:.2}", stats.total_ganancias)}
                icon="💵"
                description="Ganancias del periodo"
                class="stats-card-green"
            />
            <StatsCard
                title="Sin Usar"
                value={stats.tickets_disponibles.to_string()}
                icon="✅"
                description="Tickets disponibles"
                class="stats-card-yellow"
            />
            <StatsCard
                title="Utilizados"
                value={stats.tickets_usados.to_string()}
                icon="🍽️"
                description="Tickets consumidos"
                class="stats-card-red"
            />
        </div>
    }
}
