// ============================================================================
// FILTER STORE - Estado de filtros de la tabla de tickets
// ============================================================================
// Estado compartido a nivel de pestaña entre la barra de filtros, la tabla y
// las estadísticas (via ContextProvider). No se persiste; se resetea con
// "Limpiar filtros". Las escrituras son acciones por campo: un debounce que
// dispara tarde solo toca su propio campo y no revierte cambios concurrentes.
// ============================================================================

use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use crate::models::{StatsQuery, TicketQuery, TicketStatus};

/// Valor del select de estado cuando no se filtra.
pub const STATUS_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterStore {
    /// "all" o un `TicketStatus` como string (valor directo del select).
    pub status_filter: String,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    /// Filtros efectivos que viajan al backend.
    pub name_filter: String,
    pub email_filter: String,
    /// Valores crudos de los inputs de búsqueda; se propagan a los filtros
    /// efectivos tras el debounce de 500 ms.
    pub name_search_value: String,
    pub email_search_value: String,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self {
            status_filter: STATUS_ALL.to_string(),
            fecha_inicio: None,
            fecha_fin: None,
            name_filter: String::new(),
            email_filter: String::new(),
            name_search_value: String::new(),
            email_search_value: String::new(),
        }
    }
}

impl FilterStore {
    /// Resetea todos los filtros a sus valores iniciales.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Construye la query de tickets para la página actual. `user_id` fija
    /// la tabla a un solo usuario (vista "Mis Tickets").
    pub fn to_ticket_query(
        &self,
        page_index: u32,
        page_size: u32,
        user_id: Option<String>,
    ) -> TicketQuery {
        let mut query = TicketQuery::new(page_index, page_size);
        query.status = TicketStatus::from_filter_value(&self.status_filter);
        query.fecha_inicio = self.fecha_inicio;
        query.fecha_fin = self.fecha_fin;
        query.user_name = non_empty(&self.name_filter);
        query.user_email = non_empty(&self.email_filter);
        query.user_id = user_id;
        query
    }

    pub fn to_stats_query(&self) -> StatsQuery {
        StatsQuery {
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            user_name: non_empty(&self.name_filter),
            user_email: non_empty(&self.email_filter),
        }
    }
}

/// Escrituras del store. Cada acción modifica un solo campo; `Clear` es la
/// única que toca varios.
pub enum FilterAction {
    SetStatus(String),
    SetFechaInicio(Option<NaiveDate>),
    SetFechaFin(Option<NaiveDate>),
    /// Valor crudo del input de búsqueda por nombre (cada tecla).
    SetNameSearch(String),
    /// Valor crudo del input de búsqueda por correo (cada tecla).
    SetEmailSearch(String),
    /// Aplica el filtro efectivo de nombre (dispara tras el debounce).
    ApplyNameFilter(String),
    /// Aplica el filtro efectivo de correo (dispara tras el debounce).
    ApplyEmailFilter(String),
    Clear,
}

impl Reducible for FilterStore {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: FilterAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FilterAction::SetStatus(value) => next.status_filter = value,
            FilterAction::SetFechaInicio(value) => next.fecha_inicio = value,
            FilterAction::SetFechaFin(value) => next.fecha_fin = value,
            FilterAction::SetNameSearch(value) => next.name_search_value = value,
            FilterAction::SetEmailSearch(value) => next.email_search_value = value,
            FilterAction::ApplyNameFilter(value) => next.name_filter = value,
            FilterAction::ApplyEmailFilter(value) => next.email_filter = value,
            FilterAction::Clear => next.clear(),
        }
        Rc::new(next)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_estado_all_no_viaja_al_backend() {
        let filters = FilterStore::default();
        let query = filters.to_ticket_query(0, 5, None);
        assert_eq!(query.status, None);
        assert_eq!(query.to_query_string(), "page=1&limit=5");
    }

    #[test]
    fn cada_cambio_de_filtro_cambia_los_params() {
        let mut filters = FilterStore::default();
        filters.status_filter = "Disponible".to_string();
        filters.name_filter = "ana".to_string();
        filters.fecha_inicio = NaiveDate::from_ymd_opt(2025, 1, 1);

        let query = filters.to_ticket_query(1, 5, None);
        assert_eq!(
            query.to_query_string(),
            "page=2&limit=5&status=Disponible&fechaInicio=2025-01-01T00%3A00%3A00.000Z&userName=ana"
        );
    }

    #[test]
    fn user_id_fija_la_tabla_a_un_usuario() {
        let filters = FilterStore::default();
        let query = filters.to_ticket_query(0, 10, Some("u1".into()));
        assert_eq!(query.to_query_string(), "page=1&limit=10&userID=u1");
    }

    #[test]
    fn un_apply_retrasado_no_revierte_otros_filtros() {
        // Se escribe "an" en el input de nombre y, antes de que el debounce
        // aplique el filtro, se cambia el estado a "Usado". La aplicación
        // tardía del nombre no debe deshacer el cambio de estado.
        let store = Rc::new(FilterStore::default());
        let store = store.reduce(FilterAction::SetNameSearch("an".into()));
        let store = store.reduce(FilterAction::SetStatus("Usado".into()));
        let store = store.reduce(FilterAction::ApplyNameFilter("an".into()));

        assert_eq!(store.status_filter, "Usado");
        assert_eq!(store.name_filter, "an");
        assert_eq!(store.name_search_value, "an");
    }

    #[test]
    fn cada_accion_toca_un_solo_campo() {
        let mut store = Rc::new(FilterStore::default());
        store = store.reduce(FilterAction::SetFechaInicio(NaiveDate::from_ymd_opt(
            2025, 1, 1,
        )));
        store = store.reduce(FilterAction::SetEmailSearch("ana@".into()));
        store = store.reduce(FilterAction::ApplyEmailFilter("ana@".into()));

        assert_eq!(store.fecha_inicio, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(store.email_filter, "ana@");
        // El resto queda en su valor por defecto
        assert_eq!(store.status_filter, STATUS_ALL);
        assert_eq!(store.name_filter, "");
    }

    #[test]
    fn clear_vuelve_al_estado_inicial() {
        let mut filters = FilterStore::default();
        filters.status_filter = "Usado".to_string();
        filters.email_search_value = "ana@".to_string();
        filters.fecha_fin = NaiveDate::from_ymd_opt(2025, 6, 1);

        filters.clear();
        assert_eq!(filters, FilterStore::default());
    }

    #[test]
    fn la_query_de_stats_ignora_estado_y_paginacion() {
        let mut filters = FilterStore::default();
        filters.status_filter = "Usado".to_string();
        filters.email_filter = "ana@usb.ve".to_string();

        let query = filters.to_stats_query();
        assert_eq!(query.to_query_string(), "userEmail=ana%40usb.ve");
    }
}
