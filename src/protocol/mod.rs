//! Timebox wire protocol
//!
//! This module provides byte escaping, the additive checksum, frame
//! delimiting and command payload construction.

mod codec;
mod command;
mod error;
mod message;
mod stuffing;
mod sum;
mod types;

pub use codec::{decode_frame, encode_frame};
pub use command::build_command_payload;
pub use error::{Error, Result};
pub use message::Message;
pub use stuffing::{escape, escape_into, escaped_len, unescape};
pub use sum::checksum;
pub use types::{ClockFormat, Command, TemperatureUnit, View, WeatherCondition};

/// Leading frame delimiter
pub const FRAME_START: u8 = 0x01;

/// Trailing frame delimiter
pub const FRAME_END: u8 = 0x02;

/// Escape marker; the following byte carries the reserved value plus `ESCAPE_OFFSET`
pub const ESCAPE: u8 = 0x03;

/// Offset added to a reserved byte when it is escaped
pub const ESCAPE_OFFSET: u8 = 0x03;

/// Checksum size in bytes
pub const CHECKSUM_SIZE: usize = 2;

/// Command header size: two length bytes and the opcode
pub const COMMAND_HEADER_SIZE: usize = 3;

/// Smallest frame the decoder will look at
pub const MIN_FRAME_SIZE: usize = 4;

/// First bytes the device sends after the stream is established: a
/// length-prefixed "HELLO"
pub const HELLO_SIGNATURE: [u8; 8] = [0x00, 0x05, b'H', b'E', b'L', b'L', b'O', 0x00];
