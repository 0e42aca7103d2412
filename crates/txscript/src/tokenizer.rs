//! Single-pass tokenizer over raw script bytes.
//!
//! The tokenizer borrows the script and walks it one opcode at a time,
//! exposing each opcode together with a view of its push data. Nothing is
//! copied. Once a malformed push is encountered the tokenizer records the
//! error and refuses to advance any further.

use crate::config::DEFAULT_SCRIPT_VERSION;
use crate::opcodes::{lookup, LengthRule};
use crate::ScriptError;

/// One opcode and its associated data, as produced by a tokenizer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The opcode byte.
    pub opcode: u8,
    /// The pushed data, empty for non-push opcodes.
    pub data: &'a [u8],
    /// Total bytes consumed: opcode, length prefix and data.
    pub raw_len: usize,
}

/// Cursor over the opcodes of a script.
///
/// Drive it with [`ScriptTokenizer::next`] and read the current opcode and
/// data through the accessors while it returns `true`:
///
/// ```
/// use txscript::tokenizer::ScriptTokenizer;
///
/// let script = hex::decode("76a914128004ff2fcaf13b2b91eb654b1dc2b674f7ec6188ac").unwrap();
/// let mut tokenizer = ScriptTokenizer::new(0, &script);
/// let mut count = 0;
/// while tokenizer.next() {
///     count += 1;
/// }
/// assert!(tokenizer.err().is_none());
/// assert_eq!(count, 5);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptTokenizer<'a> {
    script: &'a [u8],
    offset: usize,
    op: u8,
    data: &'a [u8],
    raw_len: usize,
    err: Option<ScriptError>,
}

impl<'a> ScriptTokenizer<'a> {
    /// Create a tokenizer positioned at the start of `script`.
    ///
    /// Only version 0 scripts are understood. Any other version produces a
    /// tokenizer that is already done and yields no tokens, without error.
    pub fn new(version: u16, script: &'a [u8]) -> Self {
        let offset = if version == DEFAULT_SCRIPT_VERSION {
            0
        } else {
            script.len()
        };
        ScriptTokenizer {
            script,
            offset,
            op: 0,
            data: &[],
            raw_len: 0,
            err: None,
        }
    }

    /// Whether the tokenizer has reached the end of the script or failed.
    pub fn done(&self) -> bool {
        self.err.is_some() || self.offset >= self.script.len()
    }

    /// Advance to the next opcode.
    ///
    /// Returns `false` at the end of the script or once an error has been
    /// recorded; check [`ScriptTokenizer::err`] to tell the two apart.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.done() {
            return false;
        }

        let op = self.script[self.offset];
        let Some(desc) = lookup(op) else {
            self.err = Some(ScriptError::UnknownOpcode(op));
            return false;
        };
        let remaining = &self.script[self.offset + 1..];

        match desc.length {
            LengthRule::Fixed(0) => {
                self.set_token(op, &[], 1);
            }
            LengthRule::Fixed(n) => {
                if remaining.len() < n {
                    self.err = Some(ScriptError::MalformedPush(format!(
                        "opcode {} requires {} bytes, but script only has {} remaining",
                        desc.name,
                        n,
                        remaining.len()
                    )));
                    return false;
                }
                self.set_token(op, &remaining[..n], 1 + n);
            }
            LengthRule::Prefixed(prefix_len) => {
                if remaining.len() < prefix_len {
                    self.err = Some(ScriptError::MalformedPush(format!(
                        "opcode {} requires {} bytes, but script only has {} remaining",
                        desc.name,
                        prefix_len,
                        remaining.len()
                    )));
                    return false;
                }

                let data_len = remaining[..prefix_len]
                    .iter()
                    .rev()
                    .fold(0usize, |acc, &b| (acc << 8) | b as usize);
                let payload = &remaining[prefix_len..];
                if payload.len() < data_len {
                    self.err = Some(ScriptError::MalformedPush(format!(
                        "opcode {} pushes {} bytes, but script only has {} remaining",
                        desc.name,
                        data_len,
                        payload.len()
                    )));
                    return false;
                }
                self.set_token(op, &payload[..data_len], 1 + prefix_len + data_len);
            }
        }

        true
    }

    fn set_token(&mut self, op: u8, data: &'a [u8], raw_len: usize) {
        self.op = op;
        self.data = data;
        self.raw_len = raw_len;
        self.offset += raw_len;
    }

    /// The current opcode.
    pub fn opcode(&self) -> u8 {
        self.op
    }

    /// The data pushed by the current opcode.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The current token as a value.
    pub fn token(&self) -> Token<'a> {
        Token {
            opcode: self.op,
            data: self.data,
            raw_len: self.raw_len,
        }
    }

    /// Byte offset of the next opcode to be parsed.
    pub fn byte_index(&self) -> usize {
        self.offset
    }

    /// The script being tokenized.
    pub fn script(&self) -> &'a [u8] {
        self.script
    }

    /// The error that stopped tokenization, if any.
    pub fn err(&self) -> Option<&ScriptError> {
        self.err.as_ref()
    }
}

/// Check that a script tokenizes cleanly from start to end.
pub fn check_script_parses(version: u16, script: &[u8]) -> Result<(), ScriptError> {
    let mut tokenizer = ScriptTokenizer::new(version, script);
    while tokenizer.next() {}
    match tokenizer.err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Collect every token of a script, failing on the first malformed push.
pub fn tokenize(version: u16, script: &[u8]) -> Result<Vec<Token<'_>>, ScriptError> {
    let mut tokenizer = ScriptTokenizer::new(version, script);
    let mut tokens = Vec::new();
    while tokenizer.next() {
        tokens.push(tokenizer.token());
    }
    match tokenizer.err {
        Some(e) => Err(e),
        None => Ok(tokens),
    }
}

#[cfg(test)]
mod tests {
    //! Tests for the script tokenizer.

    use super::*;
    use crate::opcodes::*;

    fn parse(hex_str: &str) -> Result<Vec<(u8, Vec<u8>)>, ScriptError> {
        let script = hex::decode(hex_str).unwrap();
        let tokens = tokenize(0, &script)?;
        Ok(tokens.iter().map(|t| (t.opcode, t.data.to_vec())).collect())
    }

    // -----------------------------------------------------------------------
    // Well-formed scripts
    // -----------------------------------------------------------------------

    /// The standard pay-to-pubkey-hash script yields five tokens.
    #[test]
    fn test_p2pkh_token_count() {
        let tokens = parse("76a914128004ff2fcaf13b2b91eb654b1dc2b674f7ec6188ac").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].0, OP_DUP);
        assert_eq!(tokens[1].0, OP_HASH160);
        assert_eq!(tokens[2].0, OP_DATA_20);
        assert_eq!(
            hex::encode(&tokens[2].1),
            "128004ff2fcaf13b2b91eb654b1dc2b674f7ec61"
        );
        assert_eq!(tokens[3].0, OP_EQUALVERIFY);
        assert_eq!(tokens[4].0, OP_CHECKSIG);
    }

    /// Length-prefixed pushes expose only the payload.
    #[test]
    fn test_prefixed_pushes() {
        assert_eq!(parse("4c0201ff").unwrap(), vec![(OP_PUSHDATA1, vec![0x01, 0xff])]);
        assert_eq!(parse("4d0200abcd").unwrap(), vec![(OP_PUSHDATA2, vec![0xab, 0xcd])]);
        assert_eq!(
            parse("4e0100000007").unwrap(),
            vec![(OP_PUSHDATA4, vec![0x07])]
        );
    }

    /// A zero-length push is legal and yields an empty slice.
    #[test]
    fn test_zero_length_pushes() {
        let tokens = parse("004c004d00004e00000000").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|(_, data)| data.is_empty()));
    }

    /// Byte index and raw length track the consumed region.
    #[test]
    fn test_byte_index_and_raw_len() {
        let script = hex::decode("4c0201ff76").unwrap();
        let mut tokenizer = ScriptTokenizer::new(0, &script);
        assert!(tokenizer.next());
        assert_eq!(tokenizer.byte_index(), 4);
        assert_eq!(tokenizer.token().raw_len, 4);
        assert!(tokenizer.next());
        assert_eq!(tokenizer.opcode(), OP_DUP);
        assert_eq!(tokenizer.byte_index(), 5);
        assert!(!tokenizer.next());
        assert!(tokenizer.done());
        assert!(tokenizer.err().is_none());
    }

    /// The data view borrows from the original script.
    #[test]
    fn test_data_is_borrowed() {
        let script = hex::decode("0201027a").unwrap();
        let mut tokenizer = ScriptTokenizer::new(0, &script);
        assert!(tokenizer.next());
        assert!(std::ptr::eq(tokenizer.data().as_ptr(), script[1..].as_ptr()));
    }

    #[test]
    fn test_empty_script() {
        let mut tokenizer = ScriptTokenizer::new(0, &[]);
        assert!(tokenizer.done());
        assert!(!tokenizer.next());
        assert!(tokenizer.err().is_none());
    }

    /// Unsupported versions yield no tokens and no error.
    #[test]
    fn test_unsupported_version() {
        let script = hex::decode("76a9").unwrap();
        let mut tokenizer = ScriptTokenizer::new(1, &script);
        assert!(!tokenizer.next());
        assert!(tokenizer.err().is_none());
        assert!(tokenize(65535, &script).unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Malformed scripts
    // -----------------------------------------------------------------------

    #[test]
    fn test_truncated_pushes() {
        let cases = [
            "01",       // DATA_1 with no data
            "0201",     // DATA_2 one short
            "4b",       // DATA_75 with nothing
            "4c",       // PUSHDATA1 missing prefix
            "4c0201",   // PUSHDATA1 payload short
            "4d01",     // PUSHDATA2 prefix short
            "4d0200ff", // PUSHDATA2 payload short
            "4e010000", // PUSHDATA4 prefix short
            "4e0200000001",
            "4effffffff",
        ];
        for case in cases {
            let err = parse(case).unwrap_err();
            assert!(
                matches!(err, ScriptError::MalformedPush(_)),
                "{}: got {:?}",
                case,
                err
            );
        }
    }

    /// After an error the tokenizer never advances again.
    #[test]
    fn test_error_freezes_tokenizer() {
        let script = hex::decode("76a90201").unwrap();
        let mut tokenizer = ScriptTokenizer::new(0, &script);
        assert!(tokenizer.next());
        assert!(tokenizer.next());
        let index = tokenizer.byte_index();
        assert!(!tokenizer.next());
        assert!(tokenizer.err().is_some());
        assert!(!tokenizer.next());
        assert!(!tokenizer.next());
        assert_eq!(tokenizer.byte_index(), index);
        assert!(tokenizer.done());
    }

    #[test]
    fn test_check_script_parses() {
        assert!(check_script_parses(0, &hex::decode("a914000000000000000000000000000000000000000087").unwrap()).is_ok());
        assert!(check_script_parses(0, &hex::decode("2d").unwrap()).is_err());
    }
}
