// ============================================================================
// TICKET - Modelos compartidos con el backend (el backend es la autoridad:
// el cliente nunca calcula transiciones de estado localmente)
// ============================================================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// El orden de las variantes define el orden de la columna Estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TicketStatus {
    Disponible,
    Usado,
    Anulado,
}

impl TicketStatus {
    /// Clases del badge de estado. Mapeo puro: Disponible → verde,
    /// Usado → azul, Anulado → rojo.
    pub fn badge_class(&self) -> &'static str {
        match self {
            TicketStatus::Disponible => "badge badge-green",
            TicketStatus::Usado => "badge badge-blue",
            TicketStatus::Anulado => "badge badge-red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Disponible => "Disponible",
            TicketStatus::Usado => "Usado",
            TicketStatus::Anulado => "Anulado",
        }
    }

    pub fn from_filter_value(value: &str) -> Option<TicketStatus> {
        match value {
            "Disponible" => Some(TicketStatus::Disponible),
            "Usado" => Some(TicketStatus::Usado),
            "Anulado" => Some(TicketStatus::Anulado),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usuario embebido en la respuesta de tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub becado: Option<bool>,
    #[serde(rename = "estudianteID", default)]
    pub estudiante_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "precioTicket")]
    pub precio_ticket: f64,
    #[serde(rename = "fechaEmision", default)]
    pub fecha_emision: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fechaUso", default)]
    pub fecha_uso: Option<String>,
    pub status: TicketStatus,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub user: Option<TicketUser>,
}

impl Ticket {
    /// Fecha de emisión: `createdAt` con fallback a `fechaEmision`.
    pub fn emitted_at(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.fecha_emision.as_deref())
    }
}

/// Columnas ordenables de las tablas de tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSortKey {
    Id,
    UserName,
    UserEmail,
    Precio,
    FechaEmision,
    FechaUso,
    Estado,
}

/// Ordena la página actual en el cliente (el backend pagina, el cliente solo
/// reordena las filas visibles). Las fechas ISO se comparan como texto, que
/// coincide con el orden cronológico; los valores ausentes quedan primero en
/// ascendente.
pub fn sort_tickets(tickets: &mut [Ticket], key: TicketSortKey, ascending: bool) {
    tickets.sort_by(|a, b| {
        let ord = match key {
            TicketSortKey::Id => a.id.cmp(&b.id),
            TicketSortKey::UserName => cmp_ci(
                a.user.as_ref().map(|u| u.name.as_str()),
                b.user.as_ref().map(|u| u.name.as_str()),
            ),
            TicketSortKey::UserEmail => cmp_ci(
                a.user.as_ref().map(|u| u.email.as_str()),
                b.user.as_ref().map(|u| u.email.as_str()),
            ),
            TicketSortKey::Precio => a.precio_ticket.total_cmp(&b.precio_ticket),
            TicketSortKey::FechaEmision => a.emitted_at().cmp(&b.emitted_at()),
            TicketSortKey::FechaUso => a.fecha_uso.as_deref().cmp(&b.fecha_uso.as_deref()),
            TicketSortKey::Estado => a.status.cmp(&b.status),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

fn cmp_ci(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.map(str::to_lowercase).cmp(&b.map(str::to_lowercase))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketsMeta {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketsResponse {
    pub data: Vec<Ticket>,
    pub meta: TicketsMeta,
}

/// Estadísticas agregadas que reporta el backend para el periodo filtrado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketStats {
    #[serde(rename = "totalTickets")]
    pub total_tickets: u64,
    #[serde(rename = "totalGanancias")]
    pub total_ganancias: f64,
    #[serde(rename = "ticketsDisponibles")]
    pub tickets_disponibles: u64,
    #[serde(rename = "ticketsUsados")]
    pub tickets_usados: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_sigue_el_mapeo_de_colores() {
        assert!(TicketStatus::Disponible.badge_class().contains("green"));
        assert!(TicketStatus::Usado.badge_class().contains("blue"));
        assert!(TicketStatus::Anulado.badge_class().contains("red"));
    }

    #[test]
    fn ticket_se_deserializa_con_nombres_del_backend() {
        let json = r#"{
            "_id": "t1",
            "precioTicket": 2.5,
            "fechaUso": null,
            "status": "Disponible",
            "userID": "u1",
            "createdAt": "2025-02-01T12:00:00.000Z",
            "user": { "_id": "u1", "name": "Ana", "email": "ana@usb.ve" }
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "t1");
        assert_eq!(ticket.status, TicketStatus::Disponible);
        assert_eq!(ticket.emitted_at(), Some("2025-02-01T12:00:00.000Z"));
        assert_eq!(ticket.user.unwrap().name, "Ana");
    }

    fn ticket(id: &str, precio: f64, created_at: Option<&str>, user_name: Option<&str>) -> Ticket {
        Ticket {
            id: id.into(),
            precio_ticket: precio,
            fecha_emision: None,
            created_at: created_at.map(String::from),
            fecha_uso: None,
            status: TicketStatus::Disponible,
            user_id: "u1".into(),
            user: user_name.map(|name| TicketUser {
                id: "u1".into(),
                name: name.into(),
                email: format!("{}@usb.ve", name.to_lowercase()),
                role: None,
                becado: None,
                estudiante_id: None,
            }),
        }
    }

    #[test]
    fn ordena_por_precio_en_ambas_direcciones() {
        let mut tickets = vec![
            ticket("t1", 3.0, None, None),
            ticket("t2", 1.0, None, None),
            ticket("t3", 2.0, None, None),
        ];

        sort_tickets(&mut tickets, TicketSortKey::Precio, true);
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t2", "t3", "t1"]);

        sort_tickets(&mut tickets, TicketSortKey::Precio, false);
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t3", "t2"]);
    }

    #[test]
    fn ordena_por_nombre_sin_distinguir_mayusculas() {
        let mut tickets = vec![
            ticket("t1", 1.0, None, Some("carlos")),
            ticket("t2", 1.0, None, Some("Ana")),
            ticket("t3", 1.0, None, None),
        ];

        sort_tickets(&mut tickets, TicketSortKey::UserName, true);
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        // Sin usuario queda primero en ascendente
        assert_eq!(ids, ["t3", "t2", "t1"]);
    }

    #[test]
    fn las_fechas_iso_se_ordenan_cronologicamente() {
        let mut tickets = vec![
            ticket("t1", 1.0, Some("2025-03-01T00:00:00.000Z"), None),
            ticket("t2", 1.0, Some("2025-01-15T00:00:00.000Z"), None),
            ticket("t3", 1.0, Some("2025-02-01T12:00:00.000Z"), None),
        ];

        sort_tickets(&mut tickets, TicketSortKey::FechaEmision, true);
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t2", "t3", "t1"]);
    }

    #[test]
    fn emitted_at_cae_a_fecha_emision() {
        let json = r#"{
            "_id": "t2",
            "precioTicket": 1.0,
            "fechaEmision": "2025-01-15T00:00:00.000Z",
            "status": "Usado",
            "userID": "u1"
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.emitted_at(), Some("2025-01-15T00:00:00.000Z"));
    }
}
