//! Status macros shared by every crate in the workspace.
//!
//! These route through `tracing` under the `rectarea::status` target so
//! the CLI formatter can style them with level symbols.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "rectarea::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "rectarea::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "rectarea::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "rectarea::status", $($arg)*)
    };
}
