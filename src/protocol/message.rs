//! Timebox message implementation

use bytes::Bytes;

use super::{COMMAND_HEADER_SIZE, Command, build_command_payload};

/// Timebox message: one command payload, before framing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    payload: Bytes,
}

impl Message {
    /// Wrap an already built payload
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Build a message for a cataloged command
    #[must_use]
    pub fn command(command: Command, args: &[u8]) -> Self {
        Self::raw_command(command.as_u8(), args)
    }

    /// Build a message for an arbitrary opcode
    #[must_use]
    pub fn raw_command(opcode: u8, args: &[u8]) -> Self {
        Self::new(build_command_payload(opcode, args))
    }

    /// Get payload
    #[must_use]
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Length carried in the first two payload bytes
    #[must_use]
    pub fn declared_len(&self) -> Option<u16> {
        match self.payload.as_ref() {
            [lsb, msb, ..] => Some(u16::from_le_bytes([*lsb, *msb])),
            _ => None,
        }
    }

    /// Opcode byte of a command payload
    #[must_use]
    pub fn opcode(&self) -> Option<u8> {
        self.payload.get(2).copied()
    }

    /// Opcode as a cataloged command
    #[must_use]
    pub fn command_kind(&self) -> Option<Command> {
        self.opcode().and_then(Command::from_u8)
    }

    /// Argument bytes following the command header
    #[must_use]
    pub fn args(&self) -> &[u8] {
        self.payload.get(COMMAND_HEADER_SIZE..).unwrap_or_default()
    }

    /// Encode message to a wire frame
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        super::encode_frame(&self.payload)
    }

    /// Decode message from a wire frame
    pub fn decode(frame: &[u8]) -> super::Result<Self> {
        super::decode_frame(frame).map(Self::new)
    }
}

impl From<Vec<u8>> for Message {
    fn from(payload: Vec<u8>) -> Self {
        Self::new(payload)
    }
}
