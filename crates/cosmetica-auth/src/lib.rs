//! Session handling for Cosmetica.
//!
//! Users log in by stating an email and a role; nothing is verified. The
//! role decides which surfaces are shown, and [`AdminCatalog`] is only handed
//! out to admin sessions. This is a presentation gate, not a trust boundary:
//! anything that needs real authorization must check on a server.

mod admin;
mod error;
mod session;
mod user;

pub use admin::AdminCatalog;
pub use error::AuthError;
pub use session::{SessionGate, USER_KEY};
pub use user::{Role, User};
