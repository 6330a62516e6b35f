// Utils compartidos

pub mod constants;
pub mod dates;
pub mod debounce;
pub mod google_ffi;
pub mod pagination;
pub mod pdf_ffi;
pub mod qr_ffi;

pub use constants::*;
pub use dates::*;
pub use debounce::ScanDebouncer;
pub use pagination::*;
