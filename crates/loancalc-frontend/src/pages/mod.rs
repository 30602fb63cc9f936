//! Page components for different routes in the application.

pub mod landing;
pub mod room;
pub mod rooms;

pub use landing::*;
pub use room::*;
pub use rooms::*;
