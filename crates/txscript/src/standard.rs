//! Standard script templates.
//!
//! Classification, extraction and generation all revolve around the same
//! set of templates. A script is tokenized once and matched against the
//! templates in a fixed order by [`match_template`]; the first match wins.
//! Classification reports which template matched, extraction decodes the
//! payload it captured, and the generators build the same shapes from
//! structured inputs.
//!
//! Classification never fails. A script that does not tokenize is simply
//! non-standard.

use std::fmt;

use tracing::{debug, trace};

use crate::address::{
    is_strict_compressed_pubkey, is_strict_pubkey_encoding, Address, SignatureType,
};
use crate::config::{
    CLTV_MAX_SCRIPT_NUM_LEN, DEFAULT_SCRIPT_VERSION, MATH_OPCODE_MAX_SCRIPT_NUM_LEN,
    MAX_DATA_CARRIER_SIZE, MAX_PUB_KEYS_PER_MULTISIG,
};
use crate::opcodes::*;
use crate::script::Script;
use crate::scriptnum::make_script_num;
use crate::tokenizer::{tokenize, Token};
use crate::ScriptError;

/// Required size of the secret in an atomic swap contract.
pub const ATOMIC_SWAP_SECRET_SIZE: i64 = 32;

// ---------------------------------------------------------------------------
// Script classes
// ---------------------------------------------------------------------------

/// The standard template a script matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ScriptClass {
    /// None of the recognized templates.
    NonStandard = 0,
    /// Pay to a secp256k1 public key with ECDSA.
    PubKey,
    /// Pay to a public key with an alternative signature scheme.
    PubKeyAlt,
    /// Pay to the hash of a secp256k1 public key with ECDSA.
    PubKeyHash,
    /// Pay to a public key hash with an alternative signature scheme.
    PubKeyHashAlt,
    /// Pay to the hash of a redeem script.
    ScriptHash,
    /// Bare m-of-n multisig.
    MultiSig,
    /// Provably prunable data carrier.
    NullData,
    /// Ticket purchase output.
    StakeSubmission,
    /// Vote output.
    StakeGen,
    /// Ticket revocation output.
    StakeRevocation,
    /// Ticket purchase change output.
    StakeSubChange,
    /// Treasury add.
    TreasuryAdd,
    /// Treasury spend payout.
    TreasurySpend,
}

impl ScriptClass {
    /// Every class, in discriminant order.
    pub const ALL: [ScriptClass; 14] = [
        ScriptClass::NonStandard,
        ScriptClass::PubKey,
        ScriptClass::PubKeyAlt,
        ScriptClass::PubKeyHash,
        ScriptClass::PubKeyHashAlt,
        ScriptClass::ScriptHash,
        ScriptClass::MultiSig,
        ScriptClass::NullData,
        ScriptClass::StakeSubmission,
        ScriptClass::StakeGen,
        ScriptClass::StakeRevocation,
        ScriptClass::StakeSubChange,
        ScriptClass::TreasuryAdd,
        ScriptClass::TreasurySpend,
    ];

    /// Look up a class by its numeric value.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// The fixed lowercase name of the class.
    pub fn name(&self) -> &'static str {
        match self {
            ScriptClass::NonStandard => "nonstandard",
            ScriptClass::PubKey => "pubkey",
            ScriptClass::PubKeyAlt => "pubkeyalt",
            ScriptClass::PubKeyHash => "pubkeyhash",
            ScriptClass::PubKeyHashAlt => "pubkeyhashalt",
            ScriptClass::ScriptHash => "scripthash",
            ScriptClass::MultiSig => "multisig",
            ScriptClass::NullData => "nulldata",
            ScriptClass::StakeSubmission => "stakesubmission",
            ScriptClass::StakeGen => "stakegen",
            ScriptClass::StakeRevocation => "stakerevoke",
            ScriptClass::StakeSubChange => "sstxchange",
            ScriptClass::TreasuryAdd => "treasuryadd",
            ScriptClass::TreasurySpend => "treasuryspend",
        }
    }

    /// Whether the class is one of the four stake-tagged outputs.
    pub fn is_stake(&self) -> bool {
        matches!(
            self,
            ScriptClass::StakeSubmission
                | ScriptClass::StakeGen
                | ScriptClass::StakeRevocation
                | ScriptClass::StakeSubChange
        )
    }
}

impl fmt::Display for ScriptClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of a class given its raw numeric value; unknown values are `Invalid`.
pub fn class_name(value: u8) -> &'static str {
    ScriptClass::from_u8(value).map_or("Invalid", |class| class.name())
}

/// A script class and, for tagged outputs, the class of the wrapped script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub class: ScriptClass,
    /// Set for stake-tagged and treasury spend outputs only.
    pub sub_class: Option<ScriptClass>,
}

impl Classification {
    fn plain(class: ScriptClass) -> Self {
        Classification {
            class,
            sub_class: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Template matching
// ---------------------------------------------------------------------------

/// Details of a bare multisig script.
#[derive(Clone, Debug, PartialEq, Eq)]
struct MultisigDetails<'a> {
    required_sigs: usize,
    num_pubkeys: usize,
    /// Keys with a strict encoding; others count toward `num_pubkeys` only.
    pubkeys: Vec<&'a [u8]>,
}

/// The payload hash of a tagged output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TaggedHash<'a> {
    PubKeyHash(&'a [u8]),
    ScriptHash(&'a [u8]),
}

impl TaggedHash<'_> {
    fn class(&self) -> ScriptClass {
        match self {
            TaggedHash::PubKeyHash(_) => ScriptClass::PubKeyHash,
            TaggedHash::ScriptHash(_) => ScriptClass::ScriptHash,
        }
    }
}

/// A matched template together with the data it captured.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Template<'a> {
    NonStandard,
    PubKey(&'a [u8]),
    PubKeyAlt(&'a [u8], SignatureType),
    PubKeyHash(&'a [u8]),
    PubKeyHashAlt(&'a [u8], SignatureType),
    ScriptHash(&'a [u8]),
    MultiSig(MultisigDetails<'a>),
    NullData,
    Tagged(ScriptClass, TaggedHash<'a>),
    TreasuryAdd,
}

impl Template<'_> {
    fn classification(&self) -> Classification {
        let class = match self {
            Template::NonStandard => ScriptClass::NonStandard,
            Template::PubKey(_) => ScriptClass::PubKey,
            Template::PubKeyAlt(..) => ScriptClass::PubKeyAlt,
            Template::PubKeyHash(_) => ScriptClass::PubKeyHash,
            Template::PubKeyHashAlt(..) => ScriptClass::PubKeyHashAlt,
            Template::ScriptHash(_) => ScriptClass::ScriptHash,
            Template::MultiSig(_) => ScriptClass::MultiSig,
            Template::NullData => ScriptClass::NullData,
            Template::TreasuryAdd => ScriptClass::TreasuryAdd,
            Template::Tagged(class, hash) => {
                return Classification {
                    class: *class,
                    sub_class: Some(hash.class()),
                }
            }
        };
        Classification::plain(class)
    }
}

fn opcodes_match(tokens: &[Token<'_>], pattern: &[u8]) -> bool {
    tokens.len() == pattern.len()
        && tokens.iter().zip(pattern).all(|(t, &op)| t.opcode == op)
}

/// `<33 or 65 byte pubkey> CHECKSIG`
fn extract_pubkey<'a>(tokens: &[Token<'a>]) -> Option<&'a [u8]> {
    match tokens {
        [key, checksig]
            if checksig.opcode == OP_CHECKSIG
                && (key.opcode == OP_DATA_33 || key.opcode == OP_DATA_65)
                && is_strict_pubkey_encoding(key.data) =>
        {
            Some(key.data)
        }
        _ => None,
    }
}

/// `<pubkey> <sigtype> CHECKSIGALT`
fn extract_pubkey_alt<'a>(tokens: &[Token<'a>]) -> Option<(&'a [u8], SignatureType)> {
    let [key, sig_type, alt] = tokens else {
        return None;
    };
    if alt.opcode != OP_CHECKSIGALT || !is_small_int(sig_type.opcode) {
        return None;
    }
    let sig_type = SignatureType::from_alt(as_small_int(sig_type.opcode))?;
    match (sig_type, key.opcode) {
        (SignatureType::Ed25519, OP_DATA_32) => Some((key.data, sig_type)),
        (SignatureType::SchnorrSecp256k1, OP_DATA_33) if is_strict_compressed_pubkey(key.data) => {
            Some((key.data, sig_type))
        }
        _ => None,
    }
}

/// `DUP HASH160 <20 byte hash> EQUALVERIFY CHECKSIG`
fn extract_pubkey_hash<'a>(tokens: &[Token<'a>]) -> Option<&'a [u8]> {
    if opcodes_match(
        tokens,
        &[OP_DUP, OP_HASH160, OP_DATA_20, OP_EQUALVERIFY, OP_CHECKSIG],
    ) {
        return Some(tokens[2].data);
    }
    None
}

/// `DUP HASH160 <20 byte hash> EQUALVERIFY <sigtype> CHECKSIGALT`
fn extract_pubkey_hash_alt<'a>(tokens: &[Token<'a>]) -> Option<(&'a [u8], SignatureType)> {
    let [dup, hash160, hash, equalverify, sig_type, alt] = tokens else {
        return None;
    };
    if dup.opcode != OP_DUP
        || hash160.opcode != OP_HASH160
        || hash.opcode != OP_DATA_20
        || equalverify.opcode != OP_EQUALVERIFY
        || alt.opcode != OP_CHECKSIGALT
        || !is_small_int(sig_type.opcode)
    {
        return None;
    }
    let sig_type = SignatureType::from_alt(as_small_int(sig_type.opcode))?;
    Some((hash.data, sig_type))
}

/// `HASH160 <20 byte hash> EQUAL`
fn extract_script_hash<'a>(tokens: &[Token<'a>]) -> Option<&'a [u8]> {
    if opcodes_match(tokens, &[OP_HASH160, OP_DATA_20, OP_EQUAL]) {
        return Some(tokens[1].data);
    }
    None
}

/// `<m> <pubkey>... <n> CHECKMULTISIG` with `1 <= m <= n <= 20`.
fn extract_multisig<'a>(tokens: &[Token<'a>]) -> Option<MultisigDetails<'a>> {
    let [first, keys @ .., num_keys, last] = tokens else {
        return None;
    };
    if last.opcode != OP_CHECKMULTISIG
        || !is_small_int(first.opcode)
        || !is_small_int(num_keys.opcode)
    {
        return None;
    }

    let required_sigs = as_small_int(first.opcode) as usize;
    let num_pubkeys = as_small_int(num_keys.opcode) as usize;
    if keys.len() != num_pubkeys
        || required_sigs == 0
        || required_sigs > num_pubkeys
        || num_pubkeys > MAX_PUB_KEYS_PER_MULTISIG
    {
        return None;
    }

    let mut pubkeys = Vec::with_capacity(keys.len());
    for key in keys {
        if key.opcode > OP_PUSHDATA4 || is_small_int(key.opcode) {
            return None;
        }
        if is_strict_pubkey_encoding(key.data) {
            pubkeys.push(key.data);
        }
    }

    Some(MultisigDetails {
        required_sigs,
        num_pubkeys,
        pubkeys,
    })
}

/// `RETURN` optionally followed by a single push of at most the data carrier size.
fn is_null_data(tokens: &[Token<'_>]) -> bool {
    match tokens {
        [ret] => ret.opcode == OP_RETURN,
        [ret, push] => {
            ret.opcode == OP_RETURN
                && (is_small_int(push.opcode) || push.opcode <= OP_PUSHDATA4)
                && push.data.len() <= MAX_DATA_CARRIER_SIZE
        }
        _ => false,
    }
}

/// Class of the tag opcode that starts a tagged output, if any.
fn tag_class(op: u8, treasury_enabled: bool) -> Option<ScriptClass> {
    match op {
        OP_SSTX => Some(ScriptClass::StakeSubmission),
        OP_SSGEN => Some(ScriptClass::StakeGen),
        OP_SSRTX => Some(ScriptClass::StakeRevocation),
        OP_SSTXCHANGE => Some(ScriptClass::StakeSubChange),
        OP_TGEN if treasury_enabled => Some(ScriptClass::TreasurySpend),
        _ => None,
    }
}

/// `<tag> <pay-to-pubkey-hash or pay-to-script-hash>`
fn extract_tagged<'a>(
    tokens: &[Token<'a>],
    treasury_enabled: bool,
) -> Option<(ScriptClass, TaggedHash<'a>)> {
    let (tag, rest) = tokens.split_first()?;
    let class = tag_class(tag.opcode, treasury_enabled)?;
    if let Some(hash) = extract_pubkey_hash(rest) {
        return Some((class, TaggedHash::PubKeyHash(hash)));
    }
    if let Some(hash) = extract_script_hash(rest) {
        return Some((class, TaggedHash::ScriptHash(hash)));
    }
    None
}

/// Match tokens against the standard templates in precedence order.
fn match_template<'a>(tokens: &[Token<'a>], treasury_enabled: bool) -> Template<'a> {
    if let Some(key) = extract_pubkey(tokens) {
        return Template::PubKey(key);
    }
    if let Some(hash) = extract_pubkey_hash(tokens) {
        return Template::PubKeyHash(hash);
    }
    if let Some((key, sig_type)) = extract_pubkey_alt(tokens) {
        return Template::PubKeyAlt(key, sig_type);
    }
    if let Some((hash, sig_type)) = extract_pubkey_hash_alt(tokens) {
        return Template::PubKeyHashAlt(hash, sig_type);
    }
    if let Some(hash) = extract_script_hash(tokens) {
        return Template::ScriptHash(hash);
    }
    if let Some(details) = extract_multisig(tokens) {
        return Template::MultiSig(details);
    }
    if is_null_data(tokens) {
        return Template::NullData;
    }
    if let Some((class, hash)) = extract_tagged(tokens, treasury_enabled) {
        return Template::Tagged(class, hash);
    }
    if treasury_enabled && opcodes_match(tokens, &[OP_TADD]) {
        return Template::TreasuryAdd;
    }
    Template::NonStandard
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a script, including the sub-class of tagged outputs.
///
/// Scripts that fail to tokenize, and scripts of any version other than 0,
/// are non-standard.
pub fn classify(version: u16, script: &[u8], treasury_enabled: bool) -> Classification {
    let tokens = match tokenize(version, script) {
        Ok(tokens) => tokens,
        Err(err) => {
            debug!(%err, "script does not parse, classifying as nonstandard");
            return Classification::plain(ScriptClass::NonStandard);
        }
    };
    let classification = match_template(&tokens, treasury_enabled).classification();
    trace!(class = %classification.class, tokens = tokens.len(), "classified script");
    classification
}

/// Return the class of a script.
///
/// # Arguments
/// * `version` - Script version; only version 0 scripts can be standard.
/// * `script` - The raw script bytes.
/// * `treasury_enabled` - Whether the treasury templates are recognized.
pub fn get_script_class(version: u16, script: &[u8], treasury_enabled: bool) -> ScriptClass {
    classify(version, script, treasury_enabled).class
}

/// Return the class of the script wrapped by a stake or treasury spend tag.
///
/// Returns `None` when the script is not a tagged output.
pub fn stake_sub_class(version: u16, script: &[u8], treasury_enabled: bool) -> Option<ScriptClass> {
    classify(version, script, treasury_enabled).sub_class
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Addresses and required signatures extracted from a public key script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkScriptAddrs {
    pub class: ScriptClass,
    pub addrs: Vec<Address>,
    pub req_sigs: usize,
}

impl PkScriptAddrs {
    fn none(class: ScriptClass) -> Self {
        PkScriptAddrs {
            class,
            addrs: Vec::new(),
            req_sigs: 0,
        }
    }

    fn single(class: ScriptClass, addr: Result<Address, ScriptError>) -> Self {
        let addrs = match addr {
            Ok(addr) => vec![addr],
            Err(err) => {
                debug!(%class, %err, "skipping undecodable address");
                Vec::new()
            }
        };
        PkScriptAddrs {
            class,
            addrs,
            req_sigs: 1,
        }
    }
}

fn alt_pubkey_address(key: &[u8], sig_type: SignatureType) -> Result<Address, ScriptError> {
    match sig_type {
        SignatureType::Ed25519 => Address::from_edwards_pubkey(key),
        SignatureType::SchnorrSecp256k1 => Address::from_schnorr_pubkey(key),
        SignatureType::EcdsaSecp256k1 => Address::from_secp_pubkey(key),
    }
}

/// Extract the class, addresses and number of required signatures of a
/// public key script.
///
/// Multisig keys that do not decode as curve points are skipped, so fewer
/// addresses than keys may be returned. Non-standard, null data and treasury
/// add scripts yield no addresses and zero required signatures.
///
/// # Returns
/// `Err(ScriptError::MalformedPush)` if the script does not tokenize.
pub fn extract_pk_script_addrs(
    version: u16,
    script: &[u8],
    treasury_enabled: bool,
) -> Result<PkScriptAddrs, ScriptError> {
    let tokens = tokenize(version, script)?;
    let template = match_template(&tokens, treasury_enabled);
    let class = template.classification().class;

    let extracted = match template {
        Template::PubKey(key) => PkScriptAddrs::single(class, Address::from_secp_pubkey(key)),
        Template::PubKeyAlt(key, sig_type) => {
            PkScriptAddrs::single(class, alt_pubkey_address(key, sig_type))
        }
        Template::PubKeyHash(hash) => PkScriptAddrs::single(
            class,
            Address::from_pubkey_hash(hash, SignatureType::EcdsaSecp256k1),
        ),
        Template::PubKeyHashAlt(hash, sig_type) => {
            PkScriptAddrs::single(class, Address::from_pubkey_hash(hash, sig_type))
        }
        Template::ScriptHash(hash) => PkScriptAddrs::single(class, Address::from_script_hash(hash)),
        Template::Tagged(_, TaggedHash::PubKeyHash(hash)) => PkScriptAddrs::single(
            class,
            Address::from_pubkey_hash(hash, SignatureType::EcdsaSecp256k1),
        ),
        Template::Tagged(_, TaggedHash::ScriptHash(hash)) => {
            PkScriptAddrs::single(class, Address::from_script_hash(hash))
        }
        Template::MultiSig(details) => {
            let mut addrs = Vec::with_capacity(details.pubkeys.len());
            for key in details.pubkeys {
                match Address::from_secp_pubkey(key) {
                    Ok(addr) => addrs.push(addr),
                    Err(err) => debug!(%err, "skipping undecodable multisig key"),
                }
            }
            PkScriptAddrs {
                class,
                addrs,
                req_sigs: details.required_sigs,
            }
        }
        Template::NullData | Template::TreasuryAdd | Template::NonStandard => {
            PkScriptAddrs::none(class)
        }
    };

    Ok(extracted)
}

/// Return the number of public keys and required signatures of a version 0
/// multisig script.
///
/// # Returns
/// `(num_pubkeys, num_sigs)`, or `Err(ScriptError::NotMultisigScript)` if
/// the script is not a multisig script.
pub fn calc_multisig_stats(script: &[u8]) -> Result<(usize, usize), ScriptError> {
    let tokens =
        tokenize(DEFAULT_SCRIPT_VERSION, script).map_err(|_| ScriptError::NotMultisigScript)?;
    let details = extract_multisig(&tokens).ok_or(ScriptError::NotMultisigScript)?;
    Ok((details.num_pubkeys, details.required_sigs))
}

/// Data pushes of an atomic swap contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomicSwapDataPushes {
    pub recipient_hash160: [u8; 20],
    pub refund_hash160: [u8; 20],
    pub secret_hash: [u8; 32],
    pub secret_size: i64,
    pub lock_time: i64,
}

/// Whether a push uses the smallest opcode able to produce its data.
fn is_canonical_push(op: u8, data: &[u8]) -> bool {
    let len = data.len();
    if op > OP_16 {
        return true;
    }
    if op > OP_0 && op < OP_PUSHDATA1 && len == 1 && data[0] <= 16 {
        return false;
    }
    match op {
        OP_PUSHDATA1 => len >= OP_PUSHDATA1 as usize,
        OP_PUSHDATA2 => len > 0xff,
        OP_PUSHDATA4 => len > 0xffff,
        _ => true,
    }
}

/// Decode a small integer opcode or a canonical, minimally encoded number push.
fn extract_canonical_int(token: &Token<'_>, max_len: usize) -> Option<i64> {
    if is_small_int(token.opcode) {
        return Some(as_small_int(token.opcode) as i64);
    }
    if token.opcode > OP_PUSHDATA4 {
        return None;
    }
    if !is_canonical_push(token.opcode, token.data) {
        return None;
    }
    make_script_num(token.data, max_len).ok().map(|n| n.0)
}

/// Extract the data pushes of an atomic swap contract:
///
/// ```text
/// IF
///     SIZE <32> EQUALVERIFY SHA256 <32 byte secret hash> EQUALVERIFY
///     DUP HASH160 <20 byte recipient hash>
/// ELSE
///     <locktime> CHECKLOCKTIMEVERIFY DROP
///     DUP HASH160 <20 byte refund hash>
/// ENDIF
/// EQUALVERIFY CHECKSIG
/// ```
///
/// # Returns
/// `Ok(None)` when the script does not match the contract, including when
/// it does not tokenize, and `Err(ScriptError::UnsupportedScriptVersion)`
/// for any version other than 0.
pub fn extract_atomic_swap_data_pushes(
    version: u16,
    script: &[u8],
) -> Result<Option<AtomicSwapDataPushes>, ScriptError> {
    if version != DEFAULT_SCRIPT_VERSION {
        return Err(ScriptError::UnsupportedScriptVersion(version));
    }

    let tokens = match tokenize(version, script) {
        Ok(tokens) => tokens,
        Err(err) => {
            trace!(%err, "script does not parse, not an atomic swap");
            return Ok(None);
        }
    };

    let [if_, size, secret_size, ev1, sha256, secret_hash, ev2, dup1, hash1, recipient, else_, lock_time, cltv, drop, dup2, hash2, refund, endif, ev3, checksig] =
        tokens.as_slice()
    else {
        return Ok(None);
    };

    let fixed = [
        (if_, OP_IF),
        (size, OP_SIZE),
        (ev1, OP_EQUALVERIFY),
        (sha256, OP_SHA256),
        (secret_hash, OP_DATA_32),
        (ev2, OP_EQUALVERIFY),
        (dup1, OP_DUP),
        (hash1, OP_HASH160),
        (recipient, OP_DATA_20),
        (else_, OP_ELSE),
        (cltv, OP_CHECKLOCKTIMEVERIFY),
        (drop, OP_DROP),
        (dup2, OP_DUP),
        (hash2, OP_HASH160),
        (refund, OP_DATA_20),
        (endif, OP_ENDIF),
        (ev3, OP_EQUALVERIFY),
        (checksig, OP_CHECKSIG),
    ];
    if fixed.iter().any(|(token, op)| token.opcode != *op) {
        return Ok(None);
    }

    let Some(secret_size) = extract_canonical_int(secret_size, MATH_OPCODE_MAX_SCRIPT_NUM_LEN)
    else {
        return Ok(None);
    };
    if secret_size != ATOMIC_SWAP_SECRET_SIZE {
        return Ok(None);
    }
    let Some(lock_time) = extract_canonical_int(lock_time, CLTV_MAX_SCRIPT_NUM_LEN) else {
        return Ok(None);
    };

    let (Ok(recipient_hash160), Ok(refund_hash160), Ok(secret_hash)) = (
        <[u8; 20]>::try_from(recipient.data),
        <[u8; 20]>::try_from(refund.data),
        <[u8; 32]>::try_from(secret_hash.data),
    ) else {
        return Ok(None);
    };

    Ok(Some(AtomicSwapDataPushes {
        recipient_hash160,
        refund_hash160,
        secret_hash,
        secret_size,
        lock_time,
    }))
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn pay_to_pubkey_hash(hash: &[u8], sig_type: SignatureType) -> Result<Script, ScriptError> {
    let mut script = Script::new();
    script.append_opcode(OP_DUP)?;
    script.append_opcode(OP_HASH160)?;
    script.append_push_data(hash)?;
    script.append_opcode(OP_EQUALVERIFY)?;
    match sig_type {
        SignatureType::EcdsaSecp256k1 => script.append_opcode(OP_CHECKSIG)?,
        alt => {
            script.append_int(alt as i64)?;
            script.append_opcode(OP_CHECKSIGALT)?;
        }
    }
    Ok(script)
}

fn pay_to_script_hash(hash: &[u8]) -> Result<Script, ScriptError> {
    let mut script = Script::new();
    script.append_opcode(OP_HASH160)?;
    script.append_push_data(hash)?;
    script.append_opcode(OP_EQUAL)?;
    Ok(script)
}

fn pay_to_alt_pubkey(key: &[u8], sig_type: SignatureType) -> Result<Script, ScriptError> {
    let mut script = Script::new();
    script.append_push_data(key)?;
    script.append_int(sig_type as i64)?;
    script.append_opcode(OP_CHECKSIGALT)?;
    Ok(script)
}

/// Build a script that pays to the given address.
///
/// Public key hashes for alternative signature schemes and Edwards or
/// Schnorr keys produce the `CHECKSIGALT` forms.
///
/// # Returns
/// `Err(ScriptError::UnsupportedAddress)` when no address is given.
pub fn pay_to_addr_script(addr: Option<&Address>) -> Result<Script, ScriptError> {
    let addr = addr.ok_or_else(|| ScriptError::UnsupportedAddress("no address".to_string()))?;
    match addr {
        Address::PubKeyHash { hash, sig_type } => pay_to_pubkey_hash(hash, *sig_type),
        Address::ScriptHash { hash } => pay_to_script_hash(hash),
        Address::SecpPubKey(key) => {
            let mut script = Script::new();
            script.append_push_data(key)?;
            script.append_opcode(OP_CHECKSIG)?;
            Ok(script)
        }
        Address::EdwardsPubKey(key) => pay_to_alt_pubkey(key, SignatureType::Ed25519),
        Address::SchnorrPubKey(key) => pay_to_alt_pubkey(key, SignatureType::SchnorrSecp256k1),
    }
}

/// Build an `n_required`-of-`pubkeys.len()` multisig script.
///
/// Keys are always serialized compressed.
///
/// # Arguments
/// * `pubkeys` - secp256k1 public key addresses.
/// * `n_required` - Number of signatures required to spend.
///
/// # Returns
/// `Err(ScriptError::TooManyRequiredSigs)` if more signatures are required
/// than keys supplied, or `Err(ScriptError::UnsupportedAddress)` if an
/// address is not a secp256k1 public key.
pub fn multisig_script(pubkeys: &[Address], n_required: usize) -> Result<Script, ScriptError> {
    if pubkeys.len() < n_required {
        return Err(ScriptError::TooManyRequiredSigs {
            required: n_required,
            keys: pubkeys.len(),
        });
    }

    let mut script = Script::new();
    script.append_int(n_required as i64)?;
    for addr in pubkeys {
        let Address::SecpPubKey(key) = addr else {
            return Err(ScriptError::UnsupportedAddress(format!(
                "multisig requires secp256k1 public keys, got {:?}",
                addr
            )));
        };
        script.append_push_data(key)?;
    }
    script.append_int(pubkeys.len() as i64)?;
    script.append_opcode(OP_CHECKMULTISIG)?;
    Ok(script)
}

/// Build a provably prunable `RETURN <data>` output.
///
/// # Returns
/// `Err(ScriptError::TooMuchNullData)` if the data exceeds the maximum data
/// carrier size.
pub fn generate_provably_pruneable_out(data: &[u8]) -> Result<Script, ScriptError> {
    if data.len() > MAX_DATA_CARRIER_SIZE {
        return Err(ScriptError::TooMuchNullData {
            len: data.len(),
            max: MAX_DATA_CARRIER_SIZE,
        });
    }

    let mut script = Script::new();
    script.append_opcode(OP_RETURN)?;
    script.append_push_data(data)?;
    Ok(script)
}

/// Build the ticket commitment output: `RETURN <hash || amount || limits>`.
///
/// The amount is 8 bytes little-endian with its high bit set for script
/// hash addresses, followed by the 2 byte little-endian fee limits.
pub fn generate_sstx_addr_push(
    addr: &Address,
    amount: i64,
    limits: u16,
) -> Result<Script, ScriptError> {
    let (hash, is_p2sh) = match addr {
        Address::PubKeyHash {
            hash,
            sig_type: SignatureType::EcdsaSecp256k1,
        } => (hash, false),
        Address::ScriptHash { hash } => (hash, true),
        other => {
            return Err(ScriptError::UnsupportedAddress(format!(
                "ticket commitments require a pubkey hash or script hash, got {:?}",
                other
            )))
        }
    };

    let mut data = Vec::with_capacity(30);
    data.extend_from_slice(hash);
    data.extend_from_slice(&amount.to_le_bytes());
    if is_p2sh {
        data[27] |= 0x80;
    }
    data.extend_from_slice(&limits.to_le_bytes());

    let mut script = Script::new();
    script.append_opcode(OP_RETURN)?;
    script.append_push_data(&data)?;
    Ok(script)
}

/// Build the vote block reference output: `RETURN <block hash || height>`.
///
/// `block_hash` is in internal byte order (reversed from its display form).
pub fn generate_ssgen_block_ref(block_hash: &[u8; 32], height: u32) -> Result<Script, ScriptError> {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(block_hash);
    data.extend_from_slice(&height.to_le_bytes());

    let mut script = Script::new();
    script.append_opcode(OP_RETURN)?;
    script.append_push_data(&data)?;
    Ok(script)
}

/// Build the vote bits output: `RETURN <2 byte vote bits>`.
pub fn generate_ssgen_votes(votebits: u16) -> Result<Script, ScriptError> {
    let mut script = Script::new();
    script.append_opcode(OP_RETURN)?;
    script.append_push_data(&votebits.to_le_bytes())?;
    Ok(script)
}

/// Build an atomic swap contract from its data pushes.
///
/// This is the inverse of [`extract_atomic_swap_data_pushes`].
pub fn atomic_swap_contract(pushes: &AtomicSwapDataPushes) -> Result<Script, ScriptError> {
    let mut script = Script::new();
    script.append_opcode(OP_IF)?;
    script.append_opcode(OP_SIZE)?;
    script.append_int(pushes.secret_size)?;
    script.append_opcode(OP_EQUALVERIFY)?;
    script.append_opcode(OP_SHA256)?;
    script.append_push_data(&pushes.secret_hash)?;
    script.append_opcode(OP_EQUALVERIFY)?;
    script.append_opcode(OP_DUP)?;
    script.append_opcode(OP_HASH160)?;
    script.append_push_data(&pushes.recipient_hash160)?;
    script.append_opcode(OP_ELSE)?;
    script.append_int(pushes.lock_time)?;
    script.append_opcode(OP_CHECKLOCKTIMEVERIFY)?;
    script.append_opcode(OP_DROP)?;
    script.append_opcode(OP_DUP)?;
    script.append_opcode(OP_HASH160)?;
    script.append_push_data(&pushes.refund_hash160)?;
    script.append_opcode(OP_ENDIF)?;
    script.append_opcode(OP_EQUALVERIFY)?;
    script.append_opcode(OP_CHECKSIG)?;
    Ok(script)
}
