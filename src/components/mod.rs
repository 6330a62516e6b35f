pub mod admin_tickets_table;
pub mod app;
pub mod create_ticket_form;
pub mod login_screen;
pub mod navbar;
pub mod qr_scanner;
pub mod stats_card;
pub mod ticket_stats;
pub mod tickets_table;
pub mod user_card;

pub use admin_tickets_table::AdminTicketsTable;
pub use app::App;
pub use create_ticket_form::CreateTicketForm;
pub use login_screen::LoginScreen;
pub use navbar::Navbar;
pub use qr_scanner::QrScannerPage;
pub use stats_card::StatsCard;
pub use ticket_stats::TicketStats;
pub use tickets_table::TicketsTable;
pub use user_card::UserCard;
