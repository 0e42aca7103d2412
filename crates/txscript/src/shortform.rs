//! Parser for short form script text.
//!
//! Short form is a whitespace-separated list of tokens:
//!
//! * decimal integers, pushed with [`Script::append_int`];
//! * `0x` followed by hex, appended verbatim with no push prefix;
//! * `'text'`, pushed as data with [`Script::append_push_data`];
//! * opcode names with or without the `OP_` prefix, including the aliases
//!   `FALSE`, `TRUE`, `NOP2` and `NOP3`.
//!
//! Raw hex is not wrapped in a push, so `DATA_20 0x<20 bytes>` spells out a
//! 20-byte push exactly as it appears in the script.

use crate::opcodes::string_to_opcode;
use crate::script::Script;
use crate::ScriptError;

/// Parse short form text into a script.
pub fn parse_short_form(text: &str) -> Result<Script, ScriptError> {
    let mut script = Script::new();

    for tok in text.split_whitespace() {
        if let Ok(num) = tok.parse::<i64>() {
            script.append_int(num)?;
        } else if let Some(hex_str) = tok.strip_prefix("0x") {
            script.append_raw(&hex::decode(hex_str)?)?;
        } else if tok.len() >= 2 && tok.starts_with('\'') && tok.ends_with('\'') {
            script.append_push_data(tok[1..tok.len() - 1].as_bytes())?;
        } else if let Some(op) = string_to_opcode(tok) {
            script.append_opcode(op)?;
        } else {
            return Err(ScriptError::ShortForm(tok.to_string()));
        }
    }

    Ok(script)
}
