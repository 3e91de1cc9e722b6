//! Session configuration

use super::Colour;
use crate::protocol::HELLO_SIGNATURE;

/// Default size of the buffer handed to each transport read
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;

/// Smallest buffer handed to a transport read, whatever the configured size.
///
/// Large enough for the hello response and every reply the cataloged
/// commands produce.
pub const MIN_READ_BUFFER_SIZE: usize = 64;

const _: () = assert!(MIN_READ_BUFFER_SIZE >= HELLO_SIGNATURE.len());

/// Session configuration options.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Size of the buffer used for each transport read. Values below
    /// [`MIN_READ_BUFFER_SIZE`] are raised to it.
    pub read_buffer_size: usize,
    /// Colour applied to view commands until the caller changes it.
    pub initial_colour: Option<Colour>,
}

impl SessionConfig {
    /// Buffer length actually used for each transport read.
    #[must_use]
    pub fn read_buffer_len(&self) -> usize {
        self.read_buffer_size.max(MIN_READ_BUFFER_SIZE)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            initial_colour: None,
        }
    }
}
