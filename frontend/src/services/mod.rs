pub mod browser_history;
pub mod catalog_state;
