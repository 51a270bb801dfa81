pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, disclaimer, field_row, pie_chart};
pub use layouts::desktop::desktop_layout;
