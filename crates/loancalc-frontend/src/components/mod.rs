//! Reusable UI components for the loancalc frontend.

pub mod confirmation_dialog;
pub mod icons;
pub mod rooms_sidebar;

pub use confirmation_dialog::*;
pub use rooms_sidebar::*;
