//! The rooms panel, independent of any UI framework.
//!
//! [`RoomsPanel`] performs the user's actions against the rooms API and the
//! host page, and reports every outcome as a [`PanelAction`] applied to a
//! [`PanelState`] through a [`StateDispatch`]. The frontend renders the state.

pub mod controller;
pub mod state;

pub use controller::*;
pub use state::*;
