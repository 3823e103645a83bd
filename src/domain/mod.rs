pub mod debounce;
pub mod document;
pub mod models;
