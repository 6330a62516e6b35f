// ============================================================================
// QUERY - Mapeo del estado de filtros a query params del backend
// ============================================================================
// El mapeo es total y determinista: mismo estado → misma URL, siempre en el
// mismo orden de parámetros.
// ============================================================================

use chrono::{NaiveDate, NaiveTime, SecondsFormat};

use crate::models::ticket::TicketStatus;

/// Parámetros de `GET /api/ticket`.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketQuery {
    /// Página 1-based, como la espera el backend.
    pub page: u32,
    pub limit: u32,
    pub status: Option<TicketStatus>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_id: Option<String>,
}

impl TicketQuery {
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page: page_index + 1,
            limit: page_size,
            status: None,
            fecha_inicio: None,
            fecha_fin: None,
            user_name: None,
            user_email: None,
            user_id: None,
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        push_param(&mut out, "page", &self.page.to_string());
        push_param(&mut out, "limit", &self.limit.to_string());

        if let Some(status) = self.status {
            push_param(&mut out, "status", status.as_str());
        }
        if let Some(fecha) = self.fecha_inicio {
            push_param(&mut out, "fechaInicio", &iso_midnight(fecha));
        }
        if let Some(fecha) = self.fecha_fin {
            push_param(&mut out, "fechaFin", &iso_midnight(fecha));
        }
        if let Some(name) = &self.user_name {
            push_param(&mut out, "userName", name);
        }
        if let Some(email) = &self.user_email {
            push_param(&mut out, "userEmail", email);
        }
        if let Some(id) = &self.user_id {
            push_param(&mut out, "userID", id);
        }

        out
    }
}

/// Parámetros de `GET /api/ticket/stats` (sin paginación ni estado).
#[derive(Debug, Clone, PartialEq)]
pub struct StatsQuery {
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

impl StatsQuery {
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();

        if let Some(fecha) = self.fecha_inicio {
            push_param(&mut out, "fechaInicio", &iso_midnight(fecha));
        }
        if let Some(fecha) = self.fecha_fin {
            push_param(&mut out, "fechaFin", &iso_midnight(fecha));
        }
        if let Some(name) = &self.user_name {
            push_param(&mut out, "userName", name);
        }
        if let Some(email) = &self.user_email {
            push_param(&mut out, "userEmail", email);
        }

        out
    }
}

fn push_param(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str(key);
    out.push('=');
    out.push_str(&urlencoding::encode(value));
}

/// Las fechas del filtro son días completos: se envían como medianoche UTC
/// en formato ISO (igual que `Date.toISOString()`).
fn iso_midnight(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_minima_solo_lleva_paginacion() {
        let query = TicketQuery::new(0, 5);
        assert_eq!(query.to_query_string(), "page=1&limit=5");
    }

    #[test]
    fn query_completa_mantiene_orden_fijo() {
        let mut query = TicketQuery::new(2, 10);
        query.status = Some(TicketStatus::Usado);
        query.fecha_inicio = NaiveDate::from_ymd_opt(2025, 2, 1);
        query.fecha_fin = NaiveDate::from_ymd_opt(2025, 2, 28);
        query.user_name = Some("Ana Pérez".into());
        query.user_email = Some("ana@usb.ve".into());
        query.user_id = Some("u1".into());

        assert_eq!(
            query.to_query_string(),
            "page=3&limit=10&status=Usado\
             &fechaInicio=2025-02-01T00%3A00%3A00.000Z\
             &fechaFin=2025-02-28T00%3A00%3A00.000Z\
             &userName=Ana%20P%C3%A9rez\
             &userEmail=ana%40usb.ve\
             &userID=u1"
        );
    }

    #[test]
    fn el_mapeo_es_determinista() {
        let mut query = TicketQuery::new(0, 5);
        query.user_email = Some("ana@usb.ve".into());
        assert_eq!(query.to_query_string(), query.clone().to_query_string());
    }

    #[test]
    fn stats_query_sin_filtros_es_vacia() {
        let query = StatsQuery {
            fecha_inicio: None,
            fecha_fin: None,
            user_name: None,
            user_email: None,
        };
        assert_eq!(query.to_query_string(), "");
    }
}
