pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{record_card, status_select};
pub use layouts::desktop::desktop_layout;
