//! Context providers for shared application state and services.

pub mod api;
pub mod layout;
pub mod locale;
pub mod theme;

pub use layout::{LayoutProvider, use_layout};
pub use locale::{LocaleProvider, use_locale};
pub use theme::{ThemeProvider, use_theme};
