// UI module organization
pub mod layout;
pub mod form;
pub mod components;

// Re-export the main UI function
pub use layout::render_ui;
