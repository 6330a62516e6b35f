// ============================================================================
// TICKETS TABLE - Tickets del usuario autenticado (vista "Mis Tickets")
// ============================================================================
// Misma mecánica que la tabla admin pero fija a un usuario: filtros de
// estado, rango de fechas y búsqueda por ID, con orden local de la página
// visible. Los filtros son estado local (no se comparten con stats).
// ============================================================================

use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_tickets;
use crate::models::{sort_tickets, Ticket, TicketQuery, TicketSortKey, TicketStatus};
use crate::stores::filter_store::STATUS_ALL;
use crate::utils::{can_next, can_previous, display_range, format_fecha_larga, DEFAULT_PAGE_SIZE};

#[derive(Properties, PartialEq)]
pub struct TicketsTableProps {
    /// La tabla queda fija a los tickets de este usuario.
    pub user_id: String,
}

#[function_component(TicketsTable)]
pub fn tickets_table(props: &TicketsTableProps) -> Html {
    let page_index = use_state(|| 0u32);
    let status_filter = use_state(|| STATUS_ALL.to_string());
    let fecha_inicio = use_state(|| None::<NaiveDate>);
    let fecha_fin = use_state(|| None::<NaiveDate>);
    let id_filter = use_state(String::new);
    let sort = use_state(|| None::<(TicketSortKey, bool)>);

    let query = {
        let mut query = TicketQuery::new(*page_index, DEFAULT_PAGE_SIZE);
        query.user_id = Some(props.user_id.clone());
        query.status = TicketStatus::from_filter_value(&status_filter);
        query.fecha_inicio = *fecha_inicio;
        query.fecha_fin = *fecha_fin;
        query
    };

    let tickets_handle = use_tickets(query);
    let total = *tickets_handle.total;

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status_filter.set(select.value());
        })
    };

    let on_fecha_inicio = {
        let fecha_inicio = fecha_inicio.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fecha_inicio.set(NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok());
        })
    };

    let on_fecha_fin = {
        let fecha_fin = fecha_fin.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fecha_fin.set(NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok());
        })
    };

    let on_id_search = {
        let id_filter = id_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            id_filter.set(input.value());
        })
    };

    let on_clear_filters = {
        let status_filter = status_filter.clone();
        let fecha_inicio = fecha_inicio.clone();
        let fecha_fin = fecha_fin.clone();
        let id_filter = id_filter.clone();
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| {
            status_filter.set(STATUS_ALL.to_string());
            fecha_inicio.set(None);
            fecha_fin.set(None);
            id_filter.set(String::new());
            page_index.set(0);
        })
    };

    let on_previous = {
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| {
            if *page_index > 0 {
                page_index.set(*page_index - 1);
            }
        })
    };

    let on_next = {
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| page_index.set(*page_index + 1))
    };

    let sort_header = |label: &'static str, key: TicketSortKey| {
        let handle = sort.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            handle.set(match *handle {
                Some((current, ascending)) if current == key => Some((key, !ascending)),
                _ => Some((key, true)),
            });
        });
        let arrow = match *sort {
            Some((current, true)) if current == key => " ▲",
            Some((current, false)) if current == key => " ▼",
            _ => "",
        };
        html! {
            <th class="sortable" {onclick}>{label}{arrow}</th>
        }
    };

    let mut visible: Vec<Ticket> = tickets_handle
        .tickets
        .iter()
        .filter(|t| id_filter.is_empty() || t.id.contains(id_filter.as_str()))
        .cloned()
        .collect();
    if let Some((key, ascending)) = *sort {
        sort_tickets(&mut visible, key, ascending);
    }

    let body = if *tickets_handle.loading {
        html! {
            <tr><td colspan="4" class="table-message">{"Cargando tickets..."}</td></tr>
        }
    } else if *tickets_handle.is_error {
        html! {
            <tr><td colspan="4" class="table-message table-error">
                {"Error al cargar los tickets. Intente nuevamente."}
            </td></tr>
        }
    } else if visible.is_empty() {
        html! {
            <tr><td colspan="4" class="table-message">{"No se encontraron tickets."}</td></tr>
        }
    } else {
        html! { <>{ for visible.iter().map(render_row) }</> }
    };

    html! {
        <div class="tickets-table">
            <div class="filter-bar">
                <div class="filter-row">
                    <select
                        class="filter-select"
                        value={(*status_filter).clone()}
                        onchange={on_status_change}
                    >
                        <option value={STATUS_ALL} selected={*status_filter == STATUS_ALL}>
                            {"Todos"}
                        </option>
                        { for [TicketStatus::Disponible, TicketStatus::Usado, TicketStatus::Anulado]
                            .iter()
                            .map(|status| html! {
                                <option
                                    value={status.as_str()}
                                    selected={*status_filter == status.as_str()}
                                >
                                    {status.as_str()}
                                </option>
                            })
                        }
                    </select>

                    <input
                        type="date"
                        class="filter-date"
                        title="Fecha inicio"
                        onchange={on_fecha_inicio}
                    />
                    <input
                        type="date"
                        class="filter-date"
                        title="Fecha fin"
                        onchange={on_fecha_fin}
                    />
                    <input
                        class="filter-input"
                        placeholder="Buscar por ID de ticket..."
                        value={(*id_filter).clone()}
                        oninput={on_id_search}
                    />
                    <button class="btn-clear-filters" onclick={on_clear_filters}>
                        {"Limpiar filtros"}
                    </button>
                </div>
            </div>

            <table>
                <thead>
                    <tr>
                        { sort_header("ID Ticket", TicketSortKey::Id) }
                        { sort_header("Precio", TicketSortKey::Precio) }
                        { sort_header("Fecha Emisión", TicketSortKey::FechaEmision) }
                        <th>{"Estado"}</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>

            <div class="table-pagination">
                <div class="pagination-range">
                    {
                        match display_range(total, *page_index, DEFAULT_PAGE_SIZE) {
                            Some((start, end)) => format!("Mostrando {} a {} de {} tickets", start, end, total),
                            None => "No hay tickets disponibles".to_string(),
                        }
                    }
                </div>
                <div class="pagination-buttons">
                    <button
                        disabled={!can_previous(*page_index)}
                        onclick={on_previous}
                    >
                        {"Anterior"}
                    </button>
                    <button
                        disabled={!can_next(total, *page_index, DEFAULT_PAGE_SIZE)}
                        onclick={on_next}
                    >
                        {"Siguiente"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_row(ticket: &Ticket) -> Html {
    let emitted = ticket
        .emitted_at()
        .and_then(format_fecha_larga)
        .unwrap_or_else(|| "No disponible".to_string());

    html! {
        <tr key={ticket.id.clone()}>
            <td class="ticket-id">{&ticket.id}</td>
            <td>{format!("{:.2} $.", ticket.precio_ticket)}</td>
            <td>{emitted}</td>
            <td>
                <span class={ticket.status.badge_class()}>{ticket.status.as_str()}</span>
            </td>
        </tr>
    }
}
