//! Game sessions and the store that owns them.

mod error;
mod session;
mod store;

pub use error::GameError;
pub use session::{GameSession, MAX_GUESSES};
pub use store::SessionStore;
