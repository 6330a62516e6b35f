/// Clave de localStorage para la sesión firmada del usuario.
pub const STORAGE_KEY_SESSION: &str = "comedorUSB_session";

/// Intervalo de polling de la tabla de tickets (ms).
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Debounce de los campos de búsqueda libre antes de aplicar el filtro (ms).
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Ventana de debounce entre lecturas del escáner QR (ms).
pub const SCAN_DEBOUNCE_MS: i64 = 3_000;

/// Tamaño de página por defecto de las tablas.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
