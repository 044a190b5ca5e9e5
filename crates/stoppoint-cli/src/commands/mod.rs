pub mod lang_resolver;
pub mod langs;
pub mod offset;
pub mod run_common;
pub mod state;
pub mod table;
