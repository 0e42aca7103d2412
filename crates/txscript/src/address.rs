//! Address payloads consumed and produced by the standard templates.
//!
//! An [`Address`] carries only the hash or key a script commits to. Encoding
//! addresses for a particular network is left to callers.

use k256::ecdsa::VerifyingKey;

use crate::ScriptError;

/// Length of a compressed secp256k1 public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;
/// Length of an uncompressed secp256k1 public key.
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;
/// Length of an Ed25519 public key.
pub const EDWARDS_PUBKEY_LEN: usize = 32;

/// Signature algorithm bound to a key or key hash.
///
/// The discriminants are the small integers that select the algorithm in
/// `CHECKSIGALT` scripts. ECDSA never appears in a script; it is implied by
/// plain `CHECKSIG`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignatureType {
    /// ECDSA over secp256k1.
    EcdsaSecp256k1 = 0,
    /// Ed25519.
    Ed25519 = 1,
    /// Schnorr over secp256k1.
    SchnorrSecp256k1 = 2,
}

impl SignatureType {
    /// Map a script integer to an alternative signature type.
    ///
    /// Only `Ed25519` and `SchnorrSecp256k1` are valid in `CHECKSIGALT`
    /// scripts, so any other value yields `None`.
    pub fn from_alt(n: u8) -> Option<Self> {
        match n {
            1 => Some(SignatureType::Ed25519),
            2 => Some(SignatureType::SchnorrSecp256k1),
            _ => None,
        }
    }
}

/// The payload of an address, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Address {
    /// Hash160 of a public key, with the signature algorithm it expects.
    PubKeyHash {
        hash: [u8; 20],
        sig_type: SignatureType,
    },
    /// Hash160 of a redeem script.
    ScriptHash { hash: [u8; 20] },
    /// A secp256k1 public key for ECDSA, stored compressed.
    SecpPubKey([u8; COMPRESSED_PUBKEY_LEN]),
    /// An Ed25519 public key.
    EdwardsPubKey([u8; EDWARDS_PUBKEY_LEN]),
    /// A secp256k1 public key for Schnorr signatures, stored compressed.
    SchnorrPubKey([u8; COMPRESSED_PUBKEY_LEN]),
}

/// Check the SEC1 prefix and length without touching the curve.
pub fn is_strict_pubkey_encoding(key: &[u8]) -> bool {
    match key.len() {
        COMPRESSED_PUBKEY_LEN => key[0] == 0x02 || key[0] == 0x03,
        UNCOMPRESSED_PUBKEY_LEN => key[0] == 0x04,
        _ => false,
    }
}

/// Check that a key is a strictly encoded compressed secp256k1 key.
pub fn is_strict_compressed_pubkey(key: &[u8]) -> bool {
    key.len() == COMPRESSED_PUBKEY_LEN && (key[0] == 0x02 || key[0] == 0x03)
}

/// Decode a secp256k1 key and return its compressed form.
fn compress_secp_pubkey(key: &[u8]) -> Result<[u8; COMPRESSED_PUBKEY_LEN], ScriptError> {
    if !is_strict_pubkey_encoding(key) {
        return Err(ScriptError::InvalidPubKey(format!(
            "{} byte key is not a strictly encoded secp256k1 key",
            key.len()
        )));
    }
    let vk = VerifyingKey::from_sec1_bytes(key)
        .map_err(|e| ScriptError::InvalidPubKey(e.to_string()))?;
    let point = vk.to_encoded_point(true);
    let mut out = [0u8; COMPRESSED_PUBKEY_LEN];
    out.copy_from_slice(point.as_bytes());
    Ok(out)
}

fn hash20(hash: &[u8]) -> Result<[u8; 20], ScriptError> {
    hash.try_into().map_err(|_| {
        ScriptError::UnsupportedAddress(format!("hash must be 20 bytes, got {}", hash.len()))
    })
}

impl Address {
    /// Pay-to-pubkey-hash address for ECDSA keys.
    pub fn pubkey_hash(hash: [u8; 20]) -> Self {
        Address::PubKeyHash {
            hash,
            sig_type: SignatureType::EcdsaSecp256k1,
        }
    }

    /// Pay-to-pubkey-hash address from a slice, for the given signature type.
    pub fn from_pubkey_hash(hash: &[u8], sig_type: SignatureType) -> Result<Self, ScriptError> {
        Ok(Address::PubKeyHash {
            hash: hash20(hash)?,
            sig_type,
        })
    }

    /// Pay-to-script-hash address.
    pub fn script_hash(hash: [u8; 20]) -> Self {
        Address::ScriptHash { hash }
    }

    /// Pay-to-script-hash address from a slice.
    pub fn from_script_hash(hash: &[u8]) -> Result<Self, ScriptError> {
        Ok(Address::ScriptHash { hash: hash20(hash)? })
    }

    /// ECDSA public key address. Accepts compressed or uncompressed keys
    /// and rejects anything that is not a point on the curve.
    pub fn from_secp_pubkey(key: &[u8]) -> Result<Self, ScriptError> {
        Ok(Address::SecpPubKey(compress_secp_pubkey(key)?))
    }

    /// Ed25519 public key address.
    pub fn from_edwards_pubkey(key: &[u8]) -> Result<Self, ScriptError> {
        let key: [u8; EDWARDS_PUBKEY_LEN] = key.try_into().map_err(|_| {
            ScriptError::InvalidPubKey(format!("ed25519 key must be 32 bytes, got {}", key.len()))
        })?;
        Ok(Address::EdwardsPubKey(key))
    }

    /// Schnorr public key address. The key must be a compressed point.
    pub fn from_schnorr_pubkey(key: &[u8]) -> Result<Self, ScriptError> {
        if !is_strict_compressed_pubkey(key) {
            return Err(ScriptError::InvalidPubKey(format!(
                "schnorr key must be a 33 byte compressed key, got {} bytes",
                key.len()
            )));
        }
        Ok(Address::SchnorrPubKey(compress_secp_pubkey(key)?))
    }

    /// The hash or key bytes the address commits to.
    pub fn payload(&self) -> &[u8] {
        match self {
            Address::PubKeyHash { hash, .. } | Address::ScriptHash { hash } => &hash[..],
            Address::SecpPubKey(key) | Address::SchnorrPubKey(key) => &key[..],
            Address::EdwardsPubKey(key) => &key[..],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNCOMPRESSED: &str = "0411db93e1dcdb8a016b49840f8c53bc1eb68a382e97b1482ecad7b148a6909a5cb2e0eaddfb84ccf9744464f82e160bfa9b8b64f9d4c03f999b8643f656b412a3";
    const COMPRESSED: &str = "0311db93e1dcdb8a016b49840f8c53bc1eb68a382e97b1482ecad7b148a6909a5c";

    #[test]
    fn test_secp_pubkey_is_compressed() {
        let addr = Address::from_secp_pubkey(&hex::decode(UNCOMPRESSED).unwrap()).unwrap();
        assert_eq!(hex::encode(addr.payload()), COMPRESSED);
        let addr2 = Address::from_secp_pubkey(&hex::decode(COMPRESSED).unwrap()).unwrap();
        assert_eq!(addr, addr2);
    }

    #[test]
    fn test_secp_pubkey_rejects_off_curve() {
        let mut key = hex::decode(COMPRESSED).unwrap();
        key[0] = 0x05;
        assert!(matches!(
            Address::from_secp_pubkey(&key),
            Err(ScriptError::InvalidPubKey(_))
        ));
        // x is larger than the field modulus.
        let mut off_curve = vec![0x02];
        off_curve.extend_from_slice(&[0xffu8; 32]);
        assert!(Address::from_secp_pubkey(&off_curve).is_err());
    }

    #[test]
    fn test_schnorr_requires_compressed() {
        assert!(Address::from_schnorr_pubkey(&hex::decode(UNCOMPRESSED).unwrap()).is_err());
        let addr = Address::from_schnorr_pubkey(&hex::decode(COMPRESSED).unwrap()).unwrap();
        assert!(matches!(addr, Address::SchnorrPubKey(_)));
    }

    #[test]
    fn test_edwards_length() {
        assert!(Address::from_edwards_pubkey(&[0x01; 32]).is_ok());
        assert!(Address::from_edwards_pubkey(&[0x01; 33]).is_err());
    }

    #[test]
    fn test_hash_lengths() {
        assert!(Address::from_script_hash(&[0u8; 20]).is_ok());
        assert!(matches!(
            Address::from_pubkey_hash(&[0u8; 19], SignatureType::Ed25519),
            Err(ScriptError::UnsupportedAddress(_))
        ));
    }

    #[test]
    fn test_strict_encoding() {
        assert!(is_strict_pubkey_encoding(&hex::decode(COMPRESSED).unwrap()));
        assert!(is_strict_pubkey_encoding(&hex::decode(UNCOMPRESSED).unwrap()));
        let mut hybrid = hex::decode(UNCOMPRESSED).unwrap();
        hybrid[0] = 0x06;
        assert!(!is_strict_pubkey_encoding(&hybrid));
        assert!(!is_strict_pubkey_encoding(&[0x02; 32]));
    }

    #[test]
    fn test_signature_type_from_alt() {
        assert_eq!(SignatureType::from_alt(1), Some(SignatureType::Ed25519));
        assert_eq!(SignatureType::from_alt(2), Some(SignatureType::SchnorrSecp256k1));
        assert_eq!(SignatureType::from_alt(0), None);
        assert_eq!(SignatureType::from_alt(3), None);
    }
}
