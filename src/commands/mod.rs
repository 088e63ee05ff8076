//! Commands
//!
//! Entry points a UI collaborator calls. Every command takes the shared
//! [`AppState`](crate::state::AppState) and answers with a
//! [`CommandResponse`](crate::models::response::CommandResponse).

pub mod health;
pub mod interview;
pub mod settings;

pub use health::*;
pub use interview::*;
pub use settings::*;
