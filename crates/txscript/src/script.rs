//! Script byte-vector type with canonical push builders.
//!
//! `Script` wraps a `Vec<u8>` and provides construction from hex and short
//! form text, canonical data and integer pushes, and both disassembly
//! renderings.

use std::fmt;

use crate::config::{DEFAULT_SCRIPT_VERSION, MAX_SCRIPT_ELEMENT_SIZE, MAX_SCRIPT_SIZE};
use crate::disasm::{disasm_string, disassemble};
use crate::opcodes::*;
use crate::scriptnum::ScriptNum;
use crate::shortform::parse_short_form;
use crate::ScriptError;

/// A version 0 script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

/// Return the opcode and length prefix for a push of `len` bytes.
fn push_data_prefix(len: usize) -> Vec<u8> {
    if len <= OP_DATA_75 as usize {
        vec![len as u8]
    } else if len <= 0xff {
        vec![OP_PUSHDATA1, len as u8]
    } else if len <= 0xffff {
        let mut prefix = vec![OP_PUSHDATA2];
        prefix.extend_from_slice(&(len as u16).to_le_bytes());
        prefix
    } else {
        let mut prefix = vec![OP_PUSHDATA4];
        prefix.extend_from_slice(&(len as u32).to_le_bytes());
        prefix
    }
}

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or an error if the hex is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        Ok(Script(hex::decode(hex_str)?))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from short form text such as
    /// `DUP HASH160 DATA_20 0x… EQUALVERIFY CHECKSIG`.
    ///
    /// See [`crate::shortform`] for the accepted tokens.
    pub fn from_short_form(text: &str) -> Result<Self, ScriptError> {
        parse_short_form(text)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Render the script as one line with full `OP_` names and bare hex pushes.
    pub fn to_asm(&self) -> String {
        disasm_string(&self.0)
    }

    /// Render the script as short form text that parses back into the same bytes.
    pub fn to_short_form(&self) -> String {
        disassemble(DEFAULT_SCRIPT_VERSION, &self.0, false)
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the script and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    fn reserve_checked(&self, additional: usize) -> Result<(), ScriptError> {
        let len = self.0.len() + additional;
        if len > MAX_SCRIPT_SIZE {
            return Err(ScriptError::ScriptTooBig {
                len,
                max: MAX_SCRIPT_SIZE,
            });
        }
        Ok(())
    }

    /// Append a single opcode byte.
    ///
    /// The byte is written as is, so pushing a data opcode this way must be
    /// followed by the matching data via [`Script::append_raw`].
    pub fn append_opcode(&mut self, op: u8) -> Result<(), ScriptError> {
        self.reserve_checked(1)?;
        self.0.push(op);
        Ok(())
    }

    /// Append raw bytes without any push prefix.
    pub fn append_raw(&mut self, bytes: &[u8]) -> Result<(), ScriptError> {
        self.reserve_checked(bytes.len())?;
        self.0.extend_from_slice(bytes);
        Ok(())
    }

    /// Append a data push using the smallest encoding that produces it.
    ///
    /// Empty data and a single zero byte use `OP_0`, single bytes 1 to 16
    /// use `OP_1` to `OP_16`, `0x81` uses `OP_1NEGATE`, and everything else
    /// uses a direct push or the smallest `OP_PUSHDATA` opcode that fits.
    ///
    /// # Arguments
    /// * `data` - The data bytes to push.
    ///
    /// # Returns
    /// `Err(ScriptError::ElementTooBig)` when the data exceeds the maximum
    /// element size, or `Err(ScriptError::ScriptTooBig)` when the script
    /// would grow past the maximum script size.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        if data.len() > MAX_SCRIPT_ELEMENT_SIZE {
            return Err(ScriptError::ElementTooBig {
                len: data.len(),
                max: MAX_SCRIPT_ELEMENT_SIZE,
            });
        }

        match data {
            [] | [0] => return self.append_opcode(OP_0),
            [b @ 1..=16] => return self.append_opcode(OP_1 - 1 + *b),
            [0x81] => return self.append_opcode(OP_1NEGATE),
            _ => {}
        }

        let prefix = push_data_prefix(data.len());
        self.reserve_checked(prefix.len() + data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Append an integer push, using a small integer opcode when possible and
    /// the script number encoding otherwise.
    pub fn append_int(&mut self, n: i64) -> Result<(), ScriptError> {
        match n {
            0 => self.append_opcode(OP_0),
            -1 => self.append_opcode(OP_1NEGATE),
            1..=16 => self.append_opcode(OP_1 - 1 + n as u8),
            _ => self.append_push_data(&ScriptNum(n).to_bytes()),
        }
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
