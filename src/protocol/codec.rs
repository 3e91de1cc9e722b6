//! Timebox frame codec (encode/decode)
//!
//! This module wraps command payloads in checksummed, escaped, delimited
//! frames and validates frames received from the device.

use bytes::{BufMut, Bytes, BytesMut};

use super::{
    CHECKSUM_SIZE, Error, FRAME_END, FRAME_START, MIN_FRAME_SIZE, Result, checksum, escape_into,
    escaped_len, unescape,
};

/// Encode a payload into a wire frame
///
/// # Format
///
/// ```text
/// [0x01] [ESCAPED(PAYLOAD ++ CHECKSUM (2 bytes, LE))] [0x02]
/// ```
#[must_use]
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let csum = checksum(payload);
    let body_len = escaped_len(payload) + escaped_len(&csum);

    let mut frame = BytesMut::with_capacity(body_len + 2);
    frame.put_u8(FRAME_START);
    escape_into(payload, &mut frame);
    escape_into(&csum, &mut frame);
    frame.put_u8(FRAME_END);

    frame.to_vec()
}

/// Decode a wire frame back into its payload
///
/// # Format
///
/// ```text
/// [0x01] [ESCAPED(PAYLOAD ++ CHECKSUM (2 bytes, LE))] [0x02]
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The frame is shorter than [`MIN_FRAME_SIZE`], or its unescaped body
///   cannot hold a checksum ([`Error::InvalidLength`])
/// - A delimiter is missing or an escape sequence is invalid
///   ([`Error::MalformedPayload`])
/// - The checksum doesn't match ([`Error::InvalidChecksum`])
pub fn decode_frame(frame: &[u8]) -> Result<Bytes> {
    if frame.len() < MIN_FRAME_SIZE {
        return Err(Error::InvalidLength { got: frame.len() });
    }

    if frame[0] != FRAME_START {
        return Err(Error::MalformedPayload {
            reason: "missing start delimiter",
        });
    }
    if frame[frame.len() - 1] != FRAME_END {
        return Err(Error::MalformedPayload {
            reason: "missing end delimiter",
        });
    }

    let mut interior = unescape(&frame[1..frame.len() - 1])?;

    // Escapes shrink the interior, so four raw bytes can still leave less
    // than a checksum.
    let Some(body_len) = interior.len().checked_sub(CHECKSUM_SIZE) else {
        return Err(Error::InvalidLength { got: frame.len() });
    };

    let found = u16::from_le_bytes([interior[body_len], interior[body_len + 1]]);
    interior.truncate(body_len);
    let expected = u16::from_le_bytes(checksum(&interior));

    if found != expected {
        return Err(Error::InvalidChecksum { expected, found });
    }

    Ok(Bytes::from(interior))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCK_PAYLOAD: [u8; 5] = [0x05, 0x00, 0x45, 0x00, 0x01];
    const CLOCK_FRAME: [u8; 10] = [0x01, 0x05, 0x00, 0x45, 0x00, 0x03, 0x04, 0x4B, 0x00, 0x02];

    #[test]
    fn test_encode_known_frame() {
        assert_eq!(encode_frame(&CLOCK_PAYLOAD), CLOCK_FRAME.to_vec());
    }

    #[test]
    fn test_decode_known_frame() {
        let payload = decode_frame(&CLOCK_FRAME).unwrap();
        assert_eq!(payload.as_ref(), &CLOCK_PAYLOAD);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let payload = b"\x01\x02\x03test payload\xFF";
        let encoded = encode_frame(payload);
        let decoded = decode_frame(&encoded).unwrap();
        assert_eq!(decoded.as_ref(), payload);
    }

    #[test]
    fn test_empty_payload_frame() {
        let encoded = encode_frame(&[]);
        assert_eq!(encoded, vec![0x01, 0x00, 0x00, 0x02]);
        assert!(decode_frame(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_escaped_checksum() {
        // Checksum 0x0201 needs both of its bytes escaped
        let payload = [0xFF, 0xFF, 0x03];
        let encoded = encode_frame(&payload);
        assert_eq!(
            encoded,
            vec![0x01, 0xFF, 0xFF, 0x03, 0x06, 0x03, 0x04, 0x03, 0x05, 0x02]
        );
        assert_eq!(decode_frame(&encoded).unwrap().as_ref(), &payload);
    }

    #[test]
    fn test_decode_too_short() {
        for len in 0..MIN_FRAME_SIZE {
            let result = decode_frame(&CLOCK_FRAME[..len]);
            assert!(matches!(result, Err(Error::InvalidLength { got }) if got == len));
        }
    }

    #[test]
    fn test_decode_bad_start() {
        let mut frame = CLOCK_FRAME;
        frame[0] = 0x00;
        let result = decode_frame(&frame);
        assert!(matches!(result, Err(Error::MalformedPayload { .. })));
    }

    #[test]
    fn test_decode_bad_end() {
        let mut frame = CLOCK_FRAME;
        frame[frame.len() - 1] = 0x03;
        let result = decode_frame(&frame);
        assert!(matches!(result, Err(Error::MalformedPayload { .. })));
    }

    #[test]
    fn test_decode_bad_escape() {
        let frame = [0x01, 0x03, 0x07, 0x00, 0x00, 0x02];
        let result = decode_frame(&frame);
        assert!(matches!(result, Err(Error::MalformedPayload { .. })));
    }

    #[test]
    fn test_decode_interior_shorter_than_checksum() {
        // Four raw bytes, but the interior unescapes to a single byte
        let frame = [0x01, 0x03, 0x04, 0x02];
        let result = decode_frame(&frame);
        assert!(matches!(result, Err(Error::InvalidLength { got: 4 })));
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        let mut frame = CLOCK_FRAME;
        // Corrupt the checksum LSB
        frame[7] = 0x4C;
        let result = decode_frame(&frame);
        assert!(matches!(
            result,
            Err(Error::InvalidChecksum {
                expected: 0x004B,
                found: 0x004C
            })
        ));
    }

    // Property-based tests
    mod proptests {
        use super::*;
        use crate::protocol::{ESCAPE, escape};
        use proptest::prelude::*;

        fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
            prop::collection::vec(any::<u8>(), 0..=4096)
        }

        proptest! {
            /// Property: Any payload should roundtrip correctly
            #[test]
            fn prop_roundtrip_preserves_data(payload in payload_strategy()) {
                let encoded = encode_frame(&payload);
                let decoded = decode_frame(&encoded).unwrap();
                prop_assert_eq!(decoded.as_ref(), payload.as_slice());
            }

            /// Property: Frames are delimited and carry no raw delimiters inside
            #[test]
            fn prop_frame_delimited(payload in payload_strategy()) {
                let encoded = encode_frame(&payload);
                prop_assert_eq!(encoded[0], FRAME_START);
                prop_assert_eq!(encoded[encoded.len() - 1], FRAME_END);
                let interior = &encoded[1..encoded.len() - 1];
                prop_assert!(!interior.contains(&FRAME_START));
                prop_assert!(!interior.contains(&FRAME_END));
            }

            /// Property: Changing any payload byte before the checksum is detected
            #[test]
            fn prop_payload_corruption_detected(
                payload in payload_strategy().prop_filter("non-empty", |p| !p.is_empty()),
                index_ratio in 0.0f64..1.0,
                delta in 1u8..=255,
            ) {
                let index = ((payload.len() as f64) * index_ratio) as usize;
                let csum = checksum(&payload);

                // Tamper with the unescaped payload, keep the original checksum,
                // then frame it the same way the encoder does.
                let mut tampered = payload.clone();
                tampered[index] = tampered[index].wrapping_add(delta);
                tampered.extend_from_slice(&csum);

                let mut frame = vec![FRAME_START];
                frame.extend_from_slice(&escape(&tampered));
                frame.push(FRAME_END);

                let result = decode_frame(&frame);
                prop_assert!(
                    matches!(result, Err(Error::InvalidChecksum { .. })),
                    "Corrupted payload should fail checksum"
                );
            }

            /// Property: Non-delimiter leading bytes are rejected
            #[test]
            fn prop_bad_start_rejected(
                payload in payload_strategy(),
                start in any::<u8>().prop_filter("not start", |b| *b != FRAME_START),
            ) {
                let mut encoded = encode_frame(&payload);
                encoded[0] = start;
                let result = decode_frame(&encoded);
                let is_malformed = matches!(result, Err(Error::MalformedPayload { .. }));
                prop_assert!(is_malformed);
            }

            /// Property: Encoding should be deterministic (same input = same output)
            #[test]
            fn prop_encoding_deterministic(payload in payload_strategy()) {
                prop_assert_eq!(encode_frame(&payload), encode_frame(&payload));
            }

            /// Property: A dangling escape before the end delimiter is malformed
            #[test]
            fn prop_dangling_escape_rejected(payload in payload_strategy()) {
                let mut encoded = encode_frame(&payload);
                let end = encoded.len() - 1;
                encoded.insert(end, ESCAPE);
                let result = decode_frame(&encoded);
                let is_malformed = matches!(result, Err(Error::MalformedPayload { .. }));
                prop_assert!(is_malformed);
            }
        }
    }
}
