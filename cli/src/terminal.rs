pub mod alert;
pub mod colors;
pub mod logging;
pub mod print;
