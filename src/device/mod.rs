//! Device session layer: handshake, per-session colour state and one call
//! per device capability.

mod colour;
mod config;
mod session;

pub use colour::Colour;
pub use config::{DEFAULT_READ_BUFFER_SIZE, MIN_READ_BUFFER_SIZE, SessionConfig};
pub use session::{MAX_PERCENT, MAX_SCORE, Session};
