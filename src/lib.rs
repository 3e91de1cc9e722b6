//! Timebox - framing codec and control session for Timebox display/speaker devices
//!
//! The device speaks a small binary protocol over an RFCOMM byte stream.
//! Every command is a length-prefixed payload, followed by a 16-bit additive
//! checksum, byte-stuffed so the delimiters never appear inside, and wrapped
//! in `0x01 ... 0x02`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use timebox::{Colour, Command, Message, Session};
//!
//! // Frame a raw command
//! let msg = Message::command(Command::SetBrightness, &[50]);
//! let frame = msg.encode();
//! assert_eq!(Message::decode(&frame)?, msg);
//!
//! // Or drive a device over any Read + Write stream
//! let stream = std::net::TcpStream::connect("127.0.0.1:4000")?;
//! let mut session = Session::new(stream);
//! session.initialize()?;
//! session.set_colour(Colour::new(0, 255, 66));
//! session.display_solid()?;
//! # Ok::<(), timebox::Error>(())
//! ```
//!
//! # Wire Format
//!
//! ```text
//! 0x01 <escaped( [LEN LSB] [LEN MSB] [OPCODE] [ARGS...] [CSUM LSB] [CSUM MSB] )> 0x02
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod device;
pub mod protocol;

pub use device::{Colour, Session, SessionConfig};
pub use protocol::{
    ClockFormat, Command, Error, HELLO_SIGNATURE, Message, Result, TemperatureUnit, View,
    WeatherCondition, build_command_payload, checksum, decode_frame, encode_frame, escape,
    unescape,
};

/// RFCOMM channel the Timebox mini listens on
pub const RFCOMM_CHANNEL: u8 = 4;
