pub mod display;
pub mod models;
pub mod session;

pub use display::*;
pub use models::*;
pub use session::*;
