pub mod app;
pub mod event;
pub mod form;
pub mod terminal;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::{App, DashboardTab, Mode};
pub use event::{handle_key, HandleResult};
pub use form::{ClaimForm, FormField};
