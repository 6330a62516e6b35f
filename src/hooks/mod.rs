pub mod filter_context;
pub mod session_context;
pub mod use_session;
pub mod use_ticket_stats;
pub mod use_tickets;
pub mod use_users;

pub use filter_context::{use_filters, FilterContextProvider, FilterHandle};
pub use session_context::SessionContextProvider;
pub use use_session::{use_session, UseSessionHandle};
pub use use_ticket_stats::{use_ticket_stats, UseTicketStatsHandle};
pub use use_tickets::{use_tickets, UseTicketsHandle};
pub use use_users::{use_users, UseUsersHandle};
