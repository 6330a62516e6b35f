// ============================================================================
// ADMIN TICKETS TABLE - Tabla completa con filtros server-driven
// ============================================================================
// Filtrado, orden y conteo los hace el backend; la tabla solo arma la query
// desde el FilterStore compartido y pagina con el total reportado. En el
// cliente quedan la búsqueda por ID y el ordenamiento de la página visible.
// ============================================================================

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_filters, use_tickets};
use crate::models::{sort_tickets, Ticket, TicketSortKey, TicketStatus};
use crate::stores::filter_store::STATUS_ALL;
use crate::stores::FilterAction;
use crate::utils::{
    can_next, can_previous, display_range, format_fecha_larga, DEFAULT_PAGE_SIZE,
    SEARCH_DEBOUNCE_MS,
};

#[derive(Properties, PartialEq)]
pub struct AdminTicketsTableProps {
    #[prop_or(true)]
    pub show_filters: bool,
    #[prop_or(DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

#[function_component(AdminTicketsTable)]
pub fn admin_tickets_table(props: &AdminTicketsTableProps) -> Html {
    let filters = use_filters();
    let page_index = use_state(|| 0u32);
    // Búsqueda por ID de ticket: filtro local sobre la página actual
    let id_filter = use_state(String::new);
    // Orden de la página visible: columna + ascendente
    let sort = use_state(|| None::<(TicketSortKey, bool)>);

    // Debounce: los valores crudos de búsqueda se vuelven filtros efectivos
    // 500 ms después de la última tecla. La aplicación es una acción por
    // campo, así que un timeout tardío no pisa otros filtros.
    {
        let filters = filters.clone();
        use_effect_with(filters.name_search_value.clone(), move |value| {
            let value = value.clone();
            let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                filters.dispatch(FilterAction::ApplyNameFilter(value));
            });
            move || drop(timeout)
        });
    }
    {
        let filters = filters.clone();
        use_effect_with(filters.email_search_value.clone(), move |value| {
            let value = value.clone();
            let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                filters.dispatch(FilterAction::ApplyEmailFilter(value));
            });
            move || drop(timeout)
        });
    }

    let query = filters.to_ticket_query(*page_index, props.page_size, None);
    let tickets_handle = use_tickets(query);
    let total = *tickets_handle.total;
    let page_size = props.page_size;

    // --- Callbacks de la barra de filtros -----------------------------------

    let on_name_search = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.dispatch(FilterAction::SetNameSearch(input.value()));
        })
    };

    let on_email_search = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.dispatch(FilterAction::SetEmailSearch(input.value()));
        })
    };

    let on_id_search = {
        let id_filter = id_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            id_filter.set(input.value());
        })
    };

    let on_status_change = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filters.dispatch(FilterAction::SetStatus(select.value()));
        })
    };

    let on_fecha_inicio = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.dispatch(FilterAction::SetFechaInicio(
                NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok(),
            ));
        })
    };

    let on_fecha_fin = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.dispatch(FilterAction::SetFechaFin(
                NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok(),
            ));
        })
    };

    let on_clear_filters = {
        let filters = filters.clone();
        let id_filter = id_filter.clone();
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| {
            filters.dispatch(FilterAction::Clear);
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

    // Cabecera ordenable: primer click asciende, el segundo invierte
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

    // --- Filas --------------------------------------------------------------

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
            <tr><td colspan="7" class="table-message">{"Cargando tickets..."}</td></tr>
        }
    } else if *tickets_handle.is_error {
        html! {
            <tr><td colspan="7" class="table-message table-error">
                {"Error al cargar los tickets. Intente nuevamente."}
            </td></tr>
        }
    } else if visible.is_empty() {
        html! {
            <tr><td colspan="7" class="table-message">{"No se encontraron tickets."}</td></tr>
        }
    } else {
        html! { <>{ for visible.iter().map(render_row) }</> }
    };

    html! {
        <div class="admin-tickets-table">
            if props.show_filters {
                <div class="filter-bar">
                    <div class="filter-row">
                        <input
                            class="filter-input"
                            placeholder="Buscar por nombre de usuario..."
                            value={filters.name_search_value.clone()}
                            oninput={on_name_search}
                        />
                        <input
                            class="filter-input"
                            placeholder="Buscar por correo..."
                            value={filters.email_search_value.clone()}
                            oninput={on_email_search}
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

                    <div class="filter-row">
                        <select
                            class="filter-select"
                            value={filters.status_filter.clone()}
                            onchange={on_status_change}
                        >
                            <option value={STATUS_ALL} selected={filters.status_filter == STATUS_ALL}>
                                {"Todos"}
                            </option>
                            { for [TicketStatus::Disponible, TicketStatus::Usado, TicketStatus::Anulado]
                                .iter()
                                .map(|status| html! {
                                    <option
                                        value={status.as_str()}
                                        selected={filters.status_filter == status.as_str()}
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
                    </div>
                </div>
            }

            <table>
                <thead>
                    <tr>
                        { sort_header("ID Ticket", TicketSortKey::Id) }
                        { sort_header("Nombre Usuario", TicketSortKey::UserName) }
                        { sort_header("Correo Usuario", TicketSortKey::UserEmail) }
                        { sort_header("Precio", TicketSortKey::Precio) }
                        { sort_header("Fecha Emisión", TicketSortKey::FechaEmision) }
                        { sort_header("Fecha Uso", TicketSortKey::FechaUso) }
                        <th>{"Estado"}</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>

            <div class="table-pagination">
                <div class="pagination-range">
                    {
                        match display_range(total, *page_index, page_size) {
                            Some((start, end)) => format!("Mostrando {} a {} de {} tickets", start, end, total),
                            None => "No hay tickets disponibles".to_string(),
                        }
                    }
                </div>
                <div class="pagination-buttons">
                    <button disabled={!can_previous(*page_index)} onclick={on_previous}>
                        {"Anterior"}
                    </button>
                    <button disabled={!can_next(total, *page_index, page_size)} onclick={on_next}>
                        {"Siguiente"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_row(ticket: &Ticket) -> Html {
    let user_name = ticket
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Usuario desconocido".to_string());
    let user_email = ticket
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_else(|| "No disponible".to_string());
    let emitted = ticket
        .emitted_at()
        .and_then(format_fecha_larga)
        .unwrap_or_else(|| "No disponible".to_string());
    let used = ticket
        .fecha_uso
        .as_deref()
        .and_then(format_fecha_larga)
        .unwrap_or_else(|| "No usado".to_string());

    html! {
        <tr key={ticket.id.clone()}>
            <td class="ticket-id">{&ticket.id}</td>
            <td>{user_name}</td>
            <td>{user_email}</td>
            <td>{format!("{:.2} $.", ticket.precio_ticket)}</td>
            <td>{emitted}</td>
            <td>{used}</td>
            <td>
                <span class={ticket.status.badge_class()}>{ticket.status.as_str()}</span>
            </td>
        </tr>
    }
}
