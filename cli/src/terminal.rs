pub mod colors;
pub mod format;
pub mod input;
pub mod logging;
pub mod print;
pub mod spinner;
pub mod viewer;
