//! Script number encoding and decoding.
//!
//! Numbers in scripts are encoded as little-endian magnitude bytes with the
//! sign carried in the most significant bit of the last byte. Zero encodes to
//! an empty byte sequence. When the magnitude's top byte already has its high
//! bit set, an extra byte holding only the sign is appended.
//!
//! Numeric opcodes only interpret values up to four bytes long, but results
//! of arithmetic may exceed that range and still serialize correctly.

use crate::ScriptError;

/// A signed integer carried by a script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScriptNum(pub i64);

impl ScriptNum {
    /// Decode a script number from its byte encoding.
    ///
    /// `max_len` bounds the number of bytes accepted. When `require_minimal`
    /// is set, encodings with a superfluous high-order zero byte (including a
    /// lone `0x80`, i.e. negative zero) are rejected.
    ///
    /// Encodings longer than eight bytes do not fit an `i64`; bytes beyond the
    /// eighth contribute nothing to the magnitude, so callers should keep
    /// `max_len` at or below eight.
    pub fn from_bytes(bb: &[u8], max_len: usize, require_minimal: bool) -> Result<Self, ScriptError> {
        if bb.len() > max_len {
            return Err(ScriptError::ScriptNumberTooLong {
                len: bb.len(),
                max: max_len,
            });
        }

        if require_minimal {
            check_minimal_data_encoding(bb)?;
        }

        if bb.is_empty() {
            return Ok(ScriptNum(0));
        }

        let mut v: u64 = 0;
        for (i, &b) in bb.iter().enumerate() {
            if i < 8 {
                v |= (b as u64) << (8 * i);
            }
        }

        let last = bb.len() - 1;
        if bb[last] & 0x80 != 0 {
            if last < 8 {
                v &= !(0x80u64 << (8 * last));
            }
            return Ok(ScriptNum((v as i64).wrapping_neg()));
        }

        Ok(ScriptNum(v as i64))
    }

    /// Encode the number in its minimal form.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.0 == 0 {
            return vec![];
        }

        let is_negative = self.0 < 0;
        let mut magnitude = self.0.unsigned_abs();

        let mut result = Vec::with_capacity(9);
        while magnitude > 0 {
            result.push((magnitude & 0xff) as u8);
            magnitude >>= 8;
        }

        let last = result.len() - 1;
        if result[last] & 0x80 != 0 {
            result.push(if is_negative { 0x80 } else { 0x00 });
        } else if is_negative {
            result[last] |= 0x80;
        }

        result
    }

    /// Convert to i32, clamping to [i32::MIN, i32::MAX] on overflow.
    pub fn to_i32(&self) -> i32 {
        if self.0 > i32::MAX as i64 {
            i32::MAX
        } else if self.0 < i32::MIN as i64 {
            i32::MIN
        } else {
            self.0 as i32
        }
    }
}

impl From<i64> for ScriptNum {
    fn from(v: i64) -> Self {
        ScriptNum(v)
    }
}

/// Decode a minimally encoded script number of at most `max_len` bytes.
pub fn make_script_num(bb: &[u8], max_len: usize) -> Result<ScriptNum, ScriptError> {
    ScriptNum::from_bytes(bb, max_len, true)
}

/// Check that a byte array uses minimal data encoding.
pub fn check_minimal_data_encoding(v: &[u8]) -> Result<(), ScriptError> {
    if v.is_empty() {
        return Ok(());
    }

    // The top byte may only be zero (ignoring the sign bit) when it is needed
    // to keep the sign bit out of the next byte down.
    if v[v.len() - 1] & 0x7f == 0 && (v.len() == 1 || v[v.len() - 2] & 0x80 == 0) {
        return Err(ScriptError::NonMinimalEncoding(format!(
            "numeric value encoded as {} is not minimally encoded",
            hex::encode(v)
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MATH_OPCODE_MAX_SCRIPT_NUM_LEN;

    fn hex_to_bytes(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    #[test]
    fn test_script_num_bytes() {
        let tests: Vec<(i64, Vec<u8>)> = vec![
            (0, vec![]),
            (1, hex_to_bytes("01")),
            (-1, hex_to_bytes("81")),
            (127, hex_to_bytes("7f")),
            (-127, hex_to_bytes("ff")),
            (128, hex_to_bytes("8000")),
            (-128, hex_to_bytes("8080")),
            (129, hex_to_bytes("8100")),
            (-129, hex_to_bytes("8180")),
            (256, hex_to_bytes("0001")),
            (-256, hex_to_bytes("0081")),
            (32767, hex_to_bytes("ff7f")),
            (-32767, hex_to_bytes("ffff")),
            (32768, hex_to_bytes("008000")),
            (-32768, hex_to_bytes("008080")),
            (65535, hex_to_bytes("ffff00")),
            (-65535, hex_to_bytes("ffff80")),
            (524288, hex_to_bytes("000008")),
            (-524288, hex_to_bytes("000088")),
            (7340032, hex_to_bytes("000070")),
            (-7340032, hex_to_bytes("0000f0")),
            (8388608, hex_to_bytes("00008000")),
            (-8388608, hex_to_bytes("00008080")),
            (2147483647, hex_to_bytes("ffffff7f")),
            (-2147483647, hex_to_bytes("ffffffff")),
            // Out of range for numeric operands, but valid results.
            (2147483648, hex_to_bytes("0000008000")),
            (-2147483648, hex_to_bytes("0000008080")),
            (2415919104, hex_to_bytes("0000009000")),
            (-2415919104, hex_to_bytes("0000009080")),
            (4294967295, hex_to_bytes("ffffffff00")),
            (-4294967295, hex_to_bytes("ffffffff80")),
            (4294967296, hex_to_bytes("0000000001")),
            (-4294967296, hex_to_bytes("0000000081")),
            (281474976710655, hex_to_bytes("ffffffffffff00")),
            (-281474976710655, hex_to_bytes("ffffffffffff80")),
            (72057594037927935, hex_to_bytes("ffffffffffffff00")),
            (-72057594037927935, hex_to_bytes("ffffffffffffff80")),
            (9223372036854775807, hex_to_bytes("ffffffffffffff7f")),
            (-9223372036854775807, hex_to_bytes("ffffffffffffffff")),
        ];

        for (num, expected) in &tests {
            let got = ScriptNum(*num).to_bytes();
            assert_eq!(
                &got, expected,
                "to_bytes: num={}, got={}, want={}",
                num,
                hex::encode(&got),
                hex::encode(expected)
            );
        }
    }

    #[test]
    fn test_i64_min_encodes() {
        let bytes = ScriptNum(i64::MIN).to_bytes();
        assert_eq!(bytes, hex_to_bytes("000000000000008080"));
    }

    #[test]
    fn test_make_script_num() {
        const MAX: usize = MATH_OPCODE_MAX_SCRIPT_NUM_LEN;

        let ok: Vec<(&str, i64, usize)> = vec![
            ("", 0, MAX),
            ("01", 1, MAX),
            ("81", -1, MAX),
            ("7f", 127, MAX),
            ("ff", -127, MAX),
            ("8000", 128, MAX),
            ("8080", -128, MAX),
            ("8100", 129, MAX),
            ("8180", -129, MAX),
            ("0001", 256, MAX),
            ("0081", -256, MAX),
            ("ff7f", 32767, MAX),
            ("ffff", -32767, MAX),
            ("008000", 32768, MAX),
            ("008080", -32768, MAX),
            ("ffff00", 65535, MAX),
            ("ffff80", -65535, MAX),
            ("000008", 524288, MAX),
            ("000088", -524288, MAX),
            ("000070", 7340032, MAX),
            ("0000f0", -7340032, MAX),
            ("00008000", 8388608, MAX),
            ("00008080", -8388608, MAX),
            ("ffffff7f", 2147483647, MAX),
            ("ffffffff", -2147483647, MAX),
            ("ffffffff7f", 549755813887, 5),
            ("ffffffffff", -549755813887, 5),
            ("ffffffffffffff7f", 9223372036854775807, 8),
            ("ffffffffffffffff", -9223372036854775807, 8),
            // Bytes past the eighth fall off the top of the magnitude.
            ("ffffffffffffffff7f", -1, 9),
            ("ffffffffffffffffff", 1, 9),
            ("ffffffffffffffffff7f", -1, 10),
            ("ffffffffffffffffffff", 1, 10),
        ];
        for (serialized, want, max_len) in ok {
            let got = make_script_num(&hex_to_bytes(serialized), max_len)
                .unwrap_or_else(|e| panic!("make_script_num({}): {}", serialized, e));
            assert_eq!(got.0, want, "make_script_num({})", serialized);
        }

        let too_long = [
            "0000008000",
            "0000008080",
            "0000009000",
            "0000009080",
            "ffffffff00",
            "ffffffff80",
            "0000000001",
            "0000000081",
            "ffffffffffff00",
            "ffffffffffff80",
            "ffffffffffffff00",
            "ffffffffffffff80",
            "ffffffffffffff7f",
            "ffffffffffffffff",
        ];
        for serialized in too_long {
            let err = make_script_num(&hex_to_bytes(serialized), MAX).unwrap_err();
            assert!(
                matches!(err, ScriptError::ScriptNumberTooLong { .. }),
                "make_script_num({}): got {:?}",
                serialized,
                err
            );
        }

        let non_minimal: Vec<(&str, usize)> = vec![
            ("80", MAX),
            ("00", MAX),
            ("0100", MAX),
            ("7f00", MAX),
            ("800000", MAX),
            ("810000", MAX),
            ("000100", MAX),
            ("ff7f00", MAX),
            ("00800000", MAX),
            ("ffff0000", MAX),
            ("00000800", MAX),
            ("00007000", MAX),
            ("0009000100", 5),
        ];
        for (serialized, max_len) in non_minimal {
            let err = make_script_num(&hex_to_bytes(serialized), max_len).unwrap_err();
            assert!(
                matches!(err, ScriptError::NonMinimalEncoding(_)),
                "make_script_num({}): got {:?}",
                serialized,
                err
            );
        }
    }

    #[test]
    fn test_non_minimal_allowed_without_flag() {
        let n = ScriptNum::from_bytes(&hex_to_bytes("0100"), 4, false).unwrap();
        assert_eq!(n.0, 1);
        let n = ScriptNum::from_bytes(&hex_to_bytes("80"), 4, false).unwrap();
        assert_eq!(n.0, 0);
        let n = ScriptNum::from_bytes(&hex_to_bytes("0180"), 4, false).unwrap();
        assert_eq!(n.0, -1);
    }

    #[test]
    fn test_length_checked_before_minimality() {
        let err = ScriptNum::from_bytes(&hex_to_bytes("0000000000"), 4, true).unwrap_err();
        assert!(matches!(err, ScriptError::ScriptNumberTooLong { len: 5, max: 4 }));
    }

    #[test]
    fn test_script_num_int32() {
        let tests: Vec<(i64, i32)> = vec![
            (0, 0),
            (1, 1),
            (-1, -1),
            (127, 127),
            (-127, -127),
            (128, 128),
            (-128, -128),
            (32768, 32768),
            (-32768, -32768),
            (8388608, 8388608),
            (-8388608, -8388608),
            (2147483647, 2147483647),
            (-2147483647, -2147483647),
            (-2147483648, -2147483648),
            // Clamped values
            (2147483648, 2147483647),
            (-2147483649, -2147483648),
            (1152921504606846975, 2147483647),
            (-1152921504606846975, -2147483648),
            (4611686018427387903, 2147483647),
            (-4611686018427387903, -2147483648),
            (9223372036854775807, 2147483647),
            (-9223372036854775808, -2147483648),
        ];

        for (input, want) in &tests {
            assert_eq!(ScriptNum(*input).to_i32(), *want, "to_i32({})", input);
        }
    }
}
