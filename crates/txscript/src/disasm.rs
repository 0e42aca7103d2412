//! Human-readable script disassembly.
//!
//! Two renderings are provided. The short form written by [`disasm_opcode`]
//! strips the `OP_` prefix, prints small integers as decimal values and tags
//! pushes with their opcode (`DUP HASH160 DATA_20 0x… EQUALVERIFY CHECKSIG`).
//! It parses back into the same bytes with [`crate::shortform::parse_short_form`].
//! The one-line form written by [`disasm_string`] keeps full `OP_` names and
//! prints push data as bare hex.

use crate::opcodes::*;
use crate::tokenizer::ScriptTokenizer;
use crate::ScriptError;

/// Marker appended when disassembly stops at a malformed push.
pub const DISASM_ERROR: &str = "[error]";

/// Decimal rendering of small-integer opcodes.
fn small_int_repr(op: u8) -> Option<&'static str> {
    const SMALL_INTS: [&str; 17] = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
        "16",
    ];
    match op {
        OP_1NEGATE => Some("-1"),
        OP_0 => Some(SMALL_INTS[0]),
        OP_1..=OP_16 => Some(SMALL_INTS[(op - OP_1 + 1) as usize]),
        _ => None,
    }
}

/// Append the short-form rendering of one opcode and its data to `buf`.
///
/// # Arguments
/// * `buf` - Output accumulator; the rendering is appended without separators.
/// * `op` - The opcode byte.
/// * `data` - The data pushed by the opcode, empty for non-push opcodes.
/// * `compress` - Collapse pushes small enough for a direct push opcode into
///   `DATA_<len> 0x<hex>`, regardless of the opcode actually used.
///
/// # Returns
/// `Err(ScriptError::UnknownOpcode)` if the byte has no descriptor.
pub fn disasm_opcode(
    buf: &mut String,
    op: u8,
    data: &[u8],
    compress: bool,
) -> Result<(), ScriptError> {
    let desc = lookup(op).ok_or(ScriptError::UnknownOpcode(op))?;

    if let Some(value) = small_int_repr(op) {
        buf.push_str(value);
        return Ok(());
    }

    if !desc.is_push() {
        buf.push_str(desc.short_name());
        return Ok(());
    }

    if compress {
        if data.is_empty() {
            buf.push('0');
        } else if data.len() <= OP_DATA_75 as usize {
            buf.push_str(&format!("DATA_{} 0x{}", data.len(), hex::encode(data)));
        } else {
            buf.push_str(&format!("{} 0x{}", desc.short_name(), hex::encode(data)));
        }
        return Ok(());
    }

    buf.push_str(desc.short_name());
    match desc.length {
        // Length prefixes are little-endian, written as they appear in the script.
        LengthRule::Prefixed(1) => buf.push_str(&format!(" 0x{:02x}", data.len())),
        LengthRule::Prefixed(2) => {
            buf.push_str(&format!(" 0x{}", hex::encode((data.len() as u16).to_le_bytes())))
        }
        LengthRule::Prefixed(_) => {
            buf.push_str(&format!(" 0x{}", hex::encode((data.len() as u32).to_le_bytes())))
        }
        LengthRule::Fixed(_) => {}
    }
    buf.push_str(&format!(" 0x{}", hex::encode(data)));
    Ok(())
}

/// Disassemble a whole script into space-separated short-form tokens.
///
/// A malformed push does not abort the rendering: the tokens parsed so far
/// are kept and [`DISASM_ERROR`] is appended in place of the bad one.
pub fn disassemble(version: u16, script: &[u8], compress: bool) -> String {
    let mut buf = String::with_capacity(script.len() * 2);
    let mut tokenizer = ScriptTokenizer::new(version, script);
    while tokenizer.next() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        if disasm_opcode(&mut buf, tokenizer.opcode(), tokenizer.data(), compress).is_err() {
            buf.push_str(DISASM_ERROR);
            return buf;
        }
    }
    if let Some(err) = tokenizer.err() {
        tracing::trace!(offset = tokenizer.byte_index(), %err, "disassembly stopped");
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(DISASM_ERROR);
    }
    buf
}

fn disasm_oneline_opcode(buf: &mut String, op: u8, data: &[u8]) {
    if let Some(value) = small_int_repr(op) {
        buf.push_str(value);
    } else if op <= OP_PUSHDATA4 {
        buf.push_str(&hex::encode(data));
    } else {
        buf.push_str(opcode_to_string(op));
    }
}

/// Disassemble a version 0 script into a single line.
///
/// Opcodes use their full `OP_` names, small integers are printed as
/// numbers and pushes as bare hex, e.g.
/// `OP_DUP OP_HASH160 128004ff2fcaf13b2b91eb654b1dc2b674f7ec61 OP_EQUALVERIFY OP_CHECKSIG`.
pub fn disasm_string(script: &[u8]) -> String {
    let mut buf = String::with_capacity(script.len() * 3);
    let mut tokenizer = ScriptTokenizer::new(0, script);
    while tokenizer.next() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        disasm_oneline_opcode(&mut buf, tokenizer.opcode(), tokenizer.data());
    }
    if tokenizer.err().is_some() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(DISASM_ERROR);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(op: u8, data: &[u8], compress: bool) -> String {
        let mut buf = String::new();
        disasm_opcode(&mut buf, op, data, compress).unwrap();
        buf
    }

    #[test]
    fn test_small_ints_render_as_numbers() {
        for compress in [false, true] {
            assert_eq!(render(OP_0, &[], compress), "0");
            assert_eq!(render(OP_1NEGATE, &[], compress), "-1");
            assert_eq!(render(OP_1, &[], compress), "1");
            assert_eq!(render(OP_16, &[], compress), "16");
        }
    }

    #[test]
    fn test_plain_opcodes_strip_prefix() {
        assert_eq!(render(OP_CHECKSIG, &[], false), "CHECKSIG");
        assert_eq!(render(OP_HASH160, &[], true), "HASH160");
        assert_eq!(render(OP_SSTXCHANGE, &[], false), "SSTXCHANGE");
        assert_eq!(render(0xc4, &[], false), "UNKNOWN196");
    }

    #[test]
    fn test_verbose_pushes() {
        assert_eq!(render(OP_DATA_2, &[0xab, 0xcd], false), "DATA_2 0xabcd");
        assert_eq!(render(OP_PUSHDATA1, &[0x01, 0x02], false), "PUSHDATA1 0x02 0x0102");
        assert_eq!(render(OP_PUSHDATA2, &[0xff], false), "PUSHDATA2 0x0100 0xff");
        assert_eq!(render(OP_PUSHDATA4, &[], false), "PUSHDATA4 0x00000000 0x");
    }

    #[test]
    fn test_compressed_pushes() {
        assert_eq!(render(OP_PUSHDATA1, &[0x01, 0x02], true), "DATA_2 0x0102");
        assert_eq!(render(OP_PUSHDATA2, &[], true), "0");
        let big = vec![0x11u8; 76];
        assert_eq!(
            render(OP_PUSHDATA1, &big, true),
            format!("PUSHDATA1 0x{}", hex::encode(&big))
        );
    }

    #[test]
    fn test_disassemble_p2pkh() {
        let script = hex::decode("76a914128004ff2fcaf13b2b91eb654b1dc2b674f7ec6188ac").unwrap();
        assert_eq!(
            disassemble(0, &script, false),
            "DUP HASH160 DATA_20 0x128004ff2fcaf13b2b91eb654b1dc2b674f7ec61 EQUALVERIFY CHECKSIG"
        );
        assert_eq!(
            disasm_string(&script),
            "OP_DUP OP_HASH160 128004ff2fcaf13b2b91eb654b1dc2b674f7ec61 OP_EQUALVERIFY OP_CHECKSIG"
        );
    }

    #[test]
    fn test_disassemble_malformed_keeps_prefix() {
        let script = hex::decode("76a90201").unwrap();
        assert_eq!(disassemble(0, &script, false), "DUP HASH160 [error]");
        assert_eq!(disasm_string(&script), "OP_DUP OP_HASH160 [error]");
        assert_eq!(disassemble(0, &[0x4c], true), "[error]");
    }

    #[test]
    fn test_disasm_string_small_ints() {
        let script = hex::decode("5221aa52ae").unwrap();
        // 0x21 needs 33 bytes, so this is malformed after OP_2.
        assert_eq!(disasm_string(&script), "2 [error]");
        let script = hex::decode("4f0060").unwrap();
        assert_eq!(disasm_string(&script), "-1 0 16");
    }

    #[test]
    fn test_unsupported_version_renders_nothing() {
        assert_eq!(disassemble(1, &[OP_DUP], false), "");
    }
}
