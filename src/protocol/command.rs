//! Command payload construction

use super::COMMAND_HEADER_SIZE;

/// Prefix `args` with the length header and opcode
///
/// # Format
///
/// ```text
/// [LEN LSB] [LEN MSB] [OPCODE] [ARGS...]      LEN = len(ARGS) + 3
/// ```
///
/// The length counts its own two bytes and the opcode. Lengths past
/// `u16::MAX` wrap; callers keep argument lists short.
#[must_use]
pub fn build_command_payload(opcode: u8, args: &[u8]) -> Vec<u8> {
    #[allow(clippy::cast_possible_truncation)]
    let len = (args.len() + COMMAND_HEADER_SIZE) as u16;

    let mut payload = Vec::with_capacity(COMMAND_HEADER_SIZE + args.len());
    payload.extend_from_slice(&len.to_le_bytes());
    payload.push(opcode);
    payload.extend_from_slice(args);
    payload
}
