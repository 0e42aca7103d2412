/// Decred transaction script toolkit.
///
/// Provides the opcode table, script number codec, a zero-copy tokenizer,
/// disassembly, standard template classification, address and data
/// extraction, and builders for the standard output scripts. Scripts are
/// never executed.

pub mod opcodes;
pub mod scriptnum;
pub mod tokenizer;
pub mod disasm;
pub mod script;
pub mod shortform;
pub mod address;
pub mod standard;
pub mod config;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use address::{Address, SignatureType};
pub use config::Config;
pub use scriptnum::ScriptNum;
pub use tokenizer::{ScriptTokenizer, Token};
pub use standard::{
    classify, extract_atomic_swap_data_pushes, extract_pk_script_addrs, get_script_class,
    AtomicSwapDataPushes, Classification, PkScriptAddrs, ScriptClass,
};
