pub mod alert;
pub mod config;

mod macros;

// Re-exported for use inside the exported macros.
#[doc(hidden)]
pub use tracing;
