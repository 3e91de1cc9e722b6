//! Additive frame checksum

/// Sum of `payload` modulo 2^16, as `[lsb, msb]`
///
/// This is a plain rolling sum, which is what the device firmware computes.
/// It is not a CRC.
#[must_use]
pub fn checksum(payload: &[u8]) -> [u8; 2] {
    payload
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(u16::from(b)))
        .to_le_bytes()
}
