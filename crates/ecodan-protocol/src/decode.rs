//! Fixed-point field decoders.
//!
//! The controller packs temperatures, energies and counters into a handful of
//! fixed-point encodings. Each decoder here reads a field at a payload-relative
//! byte offset and applies exactly the observed scale, nothing more. All
//! decoders are bounds-checked: reading past the end of the payload returns
//! [`ProtocolError::TruncatedFrame`] instead of garbage.
//!
//! The one-byte and three-byte encodings each come in two variants with
//! different scales. They look interchangeable but are not; the controller
//! uses one or the other depending on the field.

use crate::error::ProtocolError;

fn field<const N: usize>(payload: &[u8], offset: usize) -> Result<[u8; N], ProtocolError> {
    let end = offset + N;
    match payload.get(offset..end) {
        Some(bytes) => {
            let mut out = [0u8; N];
            out.copy_from_slice(bytes);
            Ok(out)
        }
        None => Err(ProtocolError::TruncatedFrame {
            expected: end,
            actual: payload.len(),
        }),
    }
}

/// Raw unsigned byte.
pub fn byte(payload: &[u8], offset: usize) -> Result<u8, ProtocolError> {
    let [b] = field::<1>(payload, offset)?;
    Ok(b)
}

/// Big-endian unsigned 16-bit value.
pub fn u16_be(payload: &[u8], offset: usize) -> Result<u16, ProtocolError> {
    Ok(u16::from_be_bytes(field::<2>(payload, offset)?))
}

/// Two-byte temperature: big-endian u16 in hundredths of a degree.
pub fn scaled16(payload: &[u8], offset: usize) -> Result<f32, ProtocolError> {
    Ok(u16_be(payload, offset)? as f32 / 100.0)
}

/// Two-byte signed temperature: big-endian i16 in hundredths of a degree.
/// Used for refrigerant temperatures that can go below zero.
pub fn scaled16_signed(payload: &[u8], offset: usize) -> Result<f32, ProtocolError> {
    Ok(i16::from_be_bytes(field::<2>(payload, offset)?) as f32 / 100.0)
}

/// One-byte temperature in half-degree steps offset by -40.
pub fn scaled8(payload: &[u8], offset: usize) -> Result<f32, ProtocolError> {
    Ok(byte(payload, offset)? as f32 / 2.0 - 40.0)
}

/// One-byte temperature in whole-degree steps offset by -40.
pub fn scaled8_v2(payload: &[u8], offset: usize) -> Result<f32, ProtocolError> {
    Ok(byte(payload, offset)? as f32 - 40.0)
}

fn u24_be(payload: &[u8], offset: usize) -> Result<u32, ProtocolError> {
    let [hi, mid, lo] = field::<3>(payload, offset)?;
    Ok(((hi as u32) << 16) | ((mid as u32) << 8) | lo as u32)
}

/// Three-byte energy counter: big-endian u24 in hundredths of a kWh.
pub fn scaled24(payload: &[u8], offset: usize) -> Result<f32, ProtocolError> {
    Ok(u24_be(payload, offset)? as f32 / 100.0)
}

/// Three-byte runtime counter: big-endian u24, unscaled.
pub fn scaled24_v2(payload: &[u8], offset: usize) -> Result<f32, ProtocolError> {
    Ok(u24_be(payload, offset)? as f32)
}

// ============================================================================
// Encode helpers
// ============================================================================
//
// Inverses of the scaled decoders, used when building set-request payloads
// and by the round-trip tests. Values outside the representable range are
// saturated.

/// Encode a temperature as a big-endian u16 in hundredths.
pub fn scaled16_encode(value: f32) -> [u8; 2] {
    ((value * 100.0).round().clamp(0.0, u16::MAX as f32) as u16).to_be_bytes()
}

/// Encode a signed temperature as a big-endian i16 in hundredths.
pub fn scaled16_signed_encode(value: f32) -> [u8; 2] {
    ((value * 100.0)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16)
        .to_be_bytes()
}

/// Encode a temperature in half-degree steps offset by -40.
pub fn scaled8_encode(value: f32) -> u8 {
    ((value + 40.0) * 2.0).round().clamp(0.0, 255.0) as u8
}

/// Encode a temperature in whole-degree steps offset by -40.
pub fn scaled8_v2_encode(value: f32) -> u8 {
    (value + 40.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_and_u16_be() {
        let payload = [0x03, 0x02, 0x9A];
        assert_eq!(byte(&payload, 0).unwrap(), 0x03);
        assert_eq!(u16_be(&payload, 1).unwrap(), 0x029A);
    }

    #[test]
    fn test_out_of_bounds_is_truncated_frame() {
        let payload = [0x01, 0x02];
        assert_eq!(
            u16_be(&payload, 1),
            Err(ProtocolError::TruncatedFrame {
                expected: 3,
                actual: 2
            })
        );
        assert!(byte(&payload, 2).is_err());
        assert!(scaled24(&payload, 0).is_err());
    }

    #[test]
    fn test_scaled16() {
        // 23.45 degrees = 2345 hundredths = 0x0929
        let payload = [0x00, 0x09, 0x29];
        assert_eq!(scaled16(&payload, 1).unwrap(), 23.45);
    }

    #[test]
    fn test_scaled16_signed_negative() {
        // -12.5 degrees = -1250 = 0xFB1E
        let payload = [0xFB, 0x1E];
        assert_eq!(scaled16_signed(&payload, 0).unwrap(), -12.5);
        // The unsigned decoder reads the same word very differently.
        assert!(scaled16(&payload, 0).unwrap() > 600.0);
    }

    #[test]
    fn test_scaled8_variants_are_distinct() {
        let payload = [100];
        assert_eq!(scaled8(&payload, 0).unwrap(), 10.0);
        assert_eq!(scaled8_v2(&payload, 0).unwrap(), 60.0);
    }

    #[test]
    fn test_scaled24_variants_are_distinct() {
        // 0x0186A0 = 100000
        let payload = [0x01, 0x86, 0xA0];
        assert_eq!(scaled24(&payload, 0).unwrap(), 1000.0);
        assert_eq!(scaled24_v2(&payload, 0).unwrap(), 100000.0);
    }

    #[test]
    fn test_scaled16_round_trip() {
        for value in [0.0, 0.01, 21.5, 23.45, 60.0, 655.35] {
            let bytes = scaled16_encode(value);
            let decoded = scaled16(&bytes, 0).unwrap();
            assert!((decoded - value).abs() < 0.005, "{value} -> {decoded}");
        }
    }

    #[test]
    fn test_scaled16_signed_round_trip() {
        for value in [-40.0, -12.5, -0.01, 0.0, 25.0, 120.0] {
            let bytes = scaled16_signed_encode(value);
            let decoded = scaled16_signed(&bytes, 0).unwrap();
            assert!((decoded - value).abs() < 0.005, "{value} -> {decoded}");
        }
    }

    #[test]
    fn test_scaled8_round_trip() {
        for value in [-40.0, -10.5, 0.0, 25.5, 87.5] {
            let b = [scaled8_encode(value)];
            let decoded = scaled8(&b, 0).unwrap();
            assert!((decoded - value).abs() < 0.25, "{value} -> {decoded}");
        }
    }

    #[test]
    fn test_scaled8_v2_round_trip() {
        for value in [-40.0, 0.0, 35.0, 60.0, 215.0] {
            let b = [scaled8_v2_encode(value)];
            let decoded = scaled8_v2(&b, 0).unwrap();
            assert!((decoded - value).abs() < 0.5, "{value} -> {decoded}");
        }
    }
}
