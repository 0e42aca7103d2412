//! Script limits and classification configuration.

/// The only script version understood by the tokenizer and templates.
pub const DEFAULT_SCRIPT_VERSION: u16 = 0;

/// Maximum size of a script in bytes.
pub const MAX_SCRIPT_SIZE: usize = 16384;
/// Maximum size of a single pushed element.
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 2048;
/// Maximum payload of a standard null data output.
pub const MAX_DATA_CARRIER_SIZE: usize = 256;
/// Maximum number of public keys in a standard multisig script.
pub const MAX_PUB_KEYS_PER_MULTISIG: usize = 20;
/// Maximum length of numeric opcode operands.
pub const MATH_OPCODE_MAX_SCRIPT_NUM_LEN: usize = 4;
/// Maximum length of a lock time operand, which needs five bytes to reach
/// the full range of an unsigned 32-bit value.
pub const CLTV_MAX_SCRIPT_NUM_LEN: usize = 5;

/// Classification settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Recognize the treasury templates.
    pub treasury_enabled: bool,
}

impl Config {
    pub fn with_treasury() -> Self {
        Config { treasury_enabled: true }
    }

    pub fn without_treasury() -> Self {
        Config { treasury_enabled: false }
    }
}
