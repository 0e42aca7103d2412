/// Error types for script operations.
///
/// Covers tokenizer failures, script number decoding, disassembly, and the
/// structural limits enforced by the standard script generators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    /// A push opcode's length prefix or payload runs past the end of the script.
    #[error("malformed push: {0}")]
    MalformedPush(String),

    /// An opcode byte with no descriptor in the opcode table.
    #[error("unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),

    /// A script number is not in its minimal canonical form.
    #[error("non-minimal encoding: {0}")]
    NonMinimalEncoding(String),

    /// A script number is encoded with more bytes than allowed.
    #[error("script number too long: {len} bytes exceeds the max allowed of {max}")]
    ScriptNumberTooLong {
        /// Number of bytes in the encoding.
        len: usize,
        /// The caller-specified maximum.
        max: usize,
    },

    /// The address is absent or of a kind the generator does not support.
    #[error("unsupported address: {0}")]
    UnsupportedAddress(String),

    /// More signatures were required than public keys were provided.
    #[error("unable to generate multisig script with {required} required signatures when there are only {keys} public keys available")]
    TooManyRequiredSigs {
        /// Requested number of signatures.
        required: usize,
        /// Number of keys supplied.
        keys: usize,
    },

    /// Null data payload exceeds the maximum data carrier size.
    #[error("data size {len} is larger than max allowed size {max}")]
    TooMuchNullData {
        /// Payload length.
        len: usize,
        /// Maximum allowed payload length.
        max: usize,
    },

    /// The script version is not understood by the caller.
    #[error("unsupported script version {0}")]
    UnsupportedScriptVersion(u16),

    /// The script is not a multisig script.
    #[error("script is not a multisig script")]
    NotMultisigScript,

    /// A single data push exceeds the maximum element size.
    #[error("push of {len} bytes exceeds the max allowed element size of {max}")]
    ElementTooBig {
        /// Push length.
        len: usize,
        /// Maximum element size.
        max: usize,
    },

    /// The script would exceed the maximum script size.
    #[error("script of {len} bytes exceeds the max allowed size of {max}")]
    ScriptTooBig {
        /// Script length after the failed append.
        len: usize,
        /// Maximum script size.
        max: usize,
    },

    /// Public key bytes failed to decode as a curve point.
    #[error("invalid public key: {0}")]
    InvalidPubKey(String),

    /// Short-form script text could not be parsed.
    #[error("bad short form token '{0}'")]
    ShortForm(String),

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
