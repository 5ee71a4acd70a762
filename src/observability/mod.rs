//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (registration, navigation, unmatched paths)
//!     → logging.rs (filter + fmt layer → stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
