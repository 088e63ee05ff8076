//! Data Models
//!
//! Configuration, session, and command response types.

pub mod response;
pub mod session;
pub mod settings;

pub use response::*;
pub use session::*;
pub use settings::*;
