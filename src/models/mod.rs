pub mod query;
pub mod session;
pub mod ticket;
pub mod user;

pub use query::{StatsQuery, TicketQuery};
pub use session::{derive_estudiante_id, GoogleProfile, Role, SessionUser, StoredSession};
pub use ticket::{
    sort_tickets, Ticket, TicketSortKey, TicketStats, TicketStatus, TicketUser, TicketsResponse,
};
pub use user::BackendUser;
