// Rust Bech32 Address Library
// Written by
//   The Bech32 Address developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Addresses
//!
//! The generic checksummed address types built on the [`bech32`] codec.
//!
//! [`SegwitAddress`] follows the BIP-350 rules: the witness version selects
//! the checksum variant and constrains the program length. [`LegacyAddress`]
//! is the same shape for chains that kept the original checksum for every
//! version. [`Bech32Address`] carries a bare key hash with no version at
//! all, the form used by most Tendermint-family chains.
//!
//! A chain module is expected to be a thin adapter over these types: it
//! supplies a human-readable prefix, a hash rule for public keys and, for
//! witness chains, an [`AddressParams`] policy value. All validation runs
//! through the shared pipelines here.

use std::error;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use bitcoin_hashes::{hash160, sha256, Hash};
use secp256k1::PublicKey;
#[cfg(feature = "serde")]
use serde;

use crate::bech32::{self, u5, Variant};

/// Lowest witness version.
const WITNESS_V0: u8 = 0;
/// Highest witness version.
const MAX_WITNESS_VERSION: u8 = 16;
/// Witness program lengths valid for most versions; v0 is more constrained.
const WITNESS_PROGRAM_LENGTHS: RangeInclusive<usize> = 2..=40;
/// Witness program lengths valid for version 0.
const WITNESS_V0_PROGRAM_LENGTHS: [usize; 2] = [20, 32];

/// Encoding error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Bech32 encoding error
    Bech32(bech32::Error),
    /// Was unable to parse the address.
    InvalidAddress(String),
    /// The human-readable prefix does not belong to the expected chain.
    UnknownHrp(String),
    /// Script version must be 0 to 16 inclusive
    InvalidWitnessVersion(u8),
    /// The witness program must be between 2 and 40 bytes in length.
    InvalidWitnessProgramLength(usize),
    /// A v0 witness program must be either of length 20 or 32.
    InvalidSegwitV0ProgramLength(usize),
    /// A v1+ witness program must use bech32m not bech32
    InvalidWitnessEncoding,
    /// A v0 witness program must use bech32 not bech32m
    InvalidSegwitV0Encoding,
    /// The string is checksummed with a variant the chain does not use.
    WrongChecksumVariant,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AddressError::Bech32(ref e) => write!(f, "bech32 error: {}", e),
            AddressError::InvalidAddress(ref a) => {
                write!(f, "was unable to parse the address: {}", a)
            }
            AddressError::UnknownHrp(ref hrp) => {
                write!(f, "the human-readable prefix {} does not match the expected chain", hrp)
            }
            AddressError::InvalidWitnessVersion(ref wver) => {
                write!(f, "invalid witness script version: {}", wver)
            }
            AddressError::InvalidWitnessProgramLength(ref len) => {
                write!(f, "the witness program must be between 2 and 40 bytes in length, not {}", len)
            }
            AddressError::InvalidSegwitV0ProgramLength(ref len) => {
                write!(f, "a v0 witness program must be length 20 or 32, not {}", len)
            }
            AddressError::InvalidWitnessEncoding => {
                write!(f, "v1+ witness program must use bech32m not bech32")
            }
            AddressError::InvalidSegwitV0Encoding => {
                write!(f, "v0 witness program must use bech32 not bech32m")
            }
            AddressError::WrongChecksumVariant => {
                write!(f, "the checksum variant does not match the chain's encoding")
            }
        }
    }
}

impl error::Error for AddressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            AddressError::Bech32(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<bech32::Error> for AddressError {
    fn from(e: bech32::Error) -> AddressError {
        AddressError::Bech32(e)
    }
}

/// Which checksum rule a witness-style chain follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChecksumPolicy {
    /// BIP-350: version 0 uses bech32, versions 1 through 16 use bech32m.
    ByVersion,
    /// The original checksum for every version, for chains that adopted the
    /// format before bech32m existed.
    Bech32Only,
}

/// The parameters of a witness-address chain.
///
/// A chain adapter is one value of this type: the decode pipeline is shared
/// and only the policy differs between chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParams {
    /// The bech32 human-readable prefix.
    pub hrp: &'static str,
    /// The witness versions the chain accepts.
    pub versions: RangeInclusive<u8>,
    /// The witness program lengths the chain accepts.
    pub program_lengths: RangeInclusive<usize>,
}

impl AddressParams {
    /// The Bitcoin mainnet address parameters.
    pub const BITCOIN: AddressParams = AddressParams {
        hrp: "bc",
        versions: WITNESS_V0..=MAX_WITNESS_VERSION,
        program_lengths: WITNESS_PROGRAM_LENGTHS,
    };

    /// The Bitcoin testnet address parameters.
    pub const BITCOIN_TESTNET: AddressParams = AddressParams {
        hrp: "tb",
        versions: WITNESS_V0..=MAX_WITNESS_VERSION,
        program_lengths: WITNESS_PROGRAM_LENGTHS,
    };

    /// The Bitcoin regtest address parameters.
    pub const BITCOIN_REGTEST: AddressParams = AddressParams {
        hrp: "bcrt",
        versions: WITNESS_V0..=MAX_WITNESS_VERSION,
        program_lengths: WITNESS_PROGRAM_LENGTHS,
    };
}

/// How a chain turns a public key into the payload of a [`Bech32Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHasher {
    /// RIPEMD160 of SHA256 of the compressed key, the rule of most
    /// Tendermint-family chains.
    Sha256Ripemd,
    /// Plain SHA256 of the compressed key, keeping the trailing twenty bytes
    /// of the digest.
    Sha256,
}

// The encoded form must stay within the codec's 120 character ceiling.
fn check_encoded_length(hrp: &str, payload_bytes: usize, versioned: bool) -> Result<(), AddressError> {
    let data_len = (payload_bytes * 8 + 4) / 5 + usize::from(versioned);
    if hrp.len() + 1 + data_len + 6 > 120 {
        return Err(AddressError::Bech32(bech32::Error::InvalidLength));
    }
    Ok(())
}

/// The shared witness decode pipeline: codec decode, witness version
/// extraction, checksum policy, 5-to-8 bit conversion, length rules.
fn decode_witness(s: &str, policy: ChecksumPolicy) -> Result<(String, u5, Vec<u8>), AddressError> {
    let (hrp, payload, variant) = bech32::decode(s)?;

    if payload.is_empty() {
        return Err(AddressError::InvalidAddress(s.to_owned()));
    }

    // Get the script version and program (converted from 5-bit to 8-bit)
    let (version, program) = payload.split_at(1);
    let version = version[0];

    if version.to_u8() > MAX_WITNESS_VERSION {
        return Err(AddressError::InvalidWitnessVersion(version.to_u8()));
    }

    // BIP-350 retroactively makes the version/variant pairing part of
    // validity, so a mismatch fails even though the checksum itself passed.
    match policy {
        ChecksumPolicy::ByVersion => {
            if version.to_u8() == WITNESS_V0 && variant == Variant::Bech32m {
                return Err(AddressError::InvalidSegwitV0Encoding);
            }
            if version.to_u8() > WITNESS_V0 && variant == Variant::Bech32 {
                return Err(AddressError::InvalidWitnessEncoding);
            }
        }
        ChecksumPolicy::Bech32Only => {
            if variant != Variant::Bech32 {
                return Err(AddressError::WrongChecksumVariant);
            }
        }
    }

    let program = bech32::from_base32(program)?;
    if !WITNESS_PROGRAM_LENGTHS.contains(&program.len()) {
        return Err(AddressError::InvalidWitnessProgramLength(program.len()));
    }
    if policy == ChecksumPolicy::ByVersion
        && version.to_u8() == WITNESS_V0
        && !WITNESS_V0_PROGRAM_LENGTHS.contains(&program.len())
    {
        return Err(AddressError::InvalidSegwitV0ProgramLength(program.len()));
    }

    Ok((hrp, version, program))
}

/// A segwit-style checksummed address: a human-readable prefix, a witness
/// version and a witness program.
///
/// Follows the BIP-350 rules: version 0 pairs with the bech32 checksum and
/// programs of 20 or 32 bytes, versions 1 through 16 pair with bech32m and
/// programs of 2 through 40 bytes. Other combinations are not constructible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegwitAddress {
    hrp: String,
    version: u5,
    program: Vec<u8>,
}

impl SegwitAddress {
    /// Creates an address from its parts.
    ///
    /// The HRP is validated and normalized to lower case. Fails unless the
    /// version/length combination is valid, so every constructed value
    /// round-trips through its string form.
    pub fn new(hrp: &str, version: u8, program: Vec<u8>) -> Result<SegwitAddress, AddressError> {
        let hrp = bech32::check_hrp(hrp)?;
        if version > MAX_WITNESS_VERSION {
            return Err(AddressError::InvalidWitnessVersion(version));
        }
        if !WITNESS_PROGRAM_LENGTHS.contains(&program.len()) {
            return Err(AddressError::InvalidWitnessProgramLength(program.len()));
        }
        // Specific segwit v0 check. These addresses can never spend funds
        // sent to them.
        if version == WITNESS_V0 && !WITNESS_V0_PROGRAM_LENGTHS.contains(&program.len()) {
            return Err(AddressError::InvalidSegwitV0ProgramLength(program.len()));
        }
        check_encoded_length(&hrp, program.len(), true)?;

        Ok(SegwitAddress {
            hrp,
            version: u5::try_from_u8(version).expect("version checked above, <= 16"),
            program,
        })
    }

    /// Creates a pay-to-witness-public-key-hash address from a public key.
    ///
    /// The witness program is the HASH160 of the compressed key encoding and
    /// the witness version is 0.
    pub fn p2wpkh(pk: &PublicKey, hrp: &str) -> Result<SegwitAddress, AddressError> {
        let program = hash160::Hash::hash(&pk.serialize());
        SegwitAddress::new(hrp, WITNESS_V0, program.to_byte_array().to_vec())
    }

    /// Parses an address and checks it against the given chain parameters.
    pub fn from_str_with_params(
        s: &str,
        params: &AddressParams,
    ) -> Result<SegwitAddress, AddressError> {
        let addr = SegwitAddress::from_str(s)?;
        if addr.hrp != params.hrp {
            return Err(AddressError::UnknownHrp(addr.hrp));
        }
        if !params.versions.contains(&addr.version.to_u8()) {
            return Err(AddressError::InvalidWitnessVersion(addr.version.to_u8()));
        }
        if !params.program_lengths.contains(&addr.program.len()) {
            return Err(AddressError::InvalidWitnessProgramLength(addr.program.len()));
        }
        Ok(addr)
    }

    /// The human-readable prefix.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The witness version.
    pub fn version(&self) -> u8 {
        self.version.to_u8()
    }

    /// The witness program.
    pub fn program(&self) -> &[u8] {
        &self.program
    }
}

impl FromStr for SegwitAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<SegwitAddress, AddressError> {
        let (hrp, version, program) = decode_witness(s, ChecksumPolicy::ByVersion)?;
        Ok(SegwitAddress { hrp, version, program })
    }
}

impl fmt::Display for SegwitAddress {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let variant = match self.version.to_u8() {
            WITNESS_V0 => Variant::Bech32,
            _ => Variant::Bech32m,
        };
        let mut data = vec![self.version];
        data.extend(bech32::to_base32(&self.program));
        bech32::encode_to_fmt(fmt, &self.hrp, &data, variant)
    }
}

/// A witness-style address that always uses the original bech32 checksum.
///
/// Same shape and pipeline as [`SegwitAddress`], for chains that adopted the
/// text format before bech32m existed: every version is checksummed with
/// bech32 and version 0 has no special program-length rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyAddress {
    hrp: String,
    version: u5,
    program: Vec<u8>,
}

impl LegacyAddress {
    /// Creates an address from its parts.
    pub fn new(hrp: &str, version: u8, program: Vec<u8>) -> Result<LegacyAddress, AddressError> {
        let hrp = bech32::check_hrp(hrp)?;
        if version > MAX_WITNESS_VERSION {
            return Err(AddressError::InvalidWitnessVersion(version));
        }
        if !WITNESS_PROGRAM_LENGTHS.contains(&program.len()) {
            return Err(AddressError::InvalidWitnessProgramLength(program.len()));
        }
        check_encoded_length(&hrp, program.len(), true)?;

        Ok(LegacyAddress {
            hrp,
            version: u5::try_from_u8(version).expect("version checked above, <= 16"),
            program,
        })
    }

    /// The human-readable prefix.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The witness version.
    pub fn version(&self) -> u8 {
        self.version.to_u8()
    }

    /// The witness program.
    pub fn program(&self) -> &[u8] {
        &self.program
    }
}

impl FromStr for LegacyAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<LegacyAddress, AddressError> {
        let (hrp, version, program) = decode_witness(s, ChecksumPolicy::Bech32Only)?;
        Ok(LegacyAddress { hrp, version, program })
    }
}

impl fmt::Display for LegacyAddress {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut data = vec![self.version];
        data.extend(bech32::to_base32(&self.program));
        bech32::encode_to_fmt(fmt, &self.hrp, &data, Variant::Bech32)
    }
}

/// A bech32 key-hash address: a human-readable prefix and an opaque payload
/// with no witness version.
///
/// The form used by chains that adopted the text format for plain key
/// hashes (Tendermint-family chains among others). Always checksummed with
/// the original bech32 variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bech32Address {
    hrp: String,
    key_hash: Vec<u8>,
}

impl Bech32Address {
    /// Creates an address from a prefix and a raw key hash.
    pub fn new(hrp: &str, key_hash: Vec<u8>) -> Result<Bech32Address, AddressError> {
        let hrp = bech32::check_hrp(hrp)?;
        check_encoded_length(&hrp, key_hash.len(), false)?;
        Ok(Bech32Address { hrp, key_hash })
    }

    /// Derives the address of a public key under the given hash rule.
    ///
    /// The trailing twenty bytes of the digest become the payload, matching
    /// the key-hash rule of the chains this family serves.
    pub fn with_public_key(
        pk: &PublicKey,
        hrp: &str,
        hasher: KeyHasher,
    ) -> Result<Bech32Address, AddressError> {
        let digest = match hasher {
            KeyHasher::Sha256Ripemd => hash160::Hash::hash(&pk.serialize()).to_byte_array().to_vec(),
            KeyHasher::Sha256 => sha256::Hash::hash(&pk.serialize()).to_byte_array().to_vec(),
        };
        let key_hash = digest[digest.len() - 20..].to_vec();
        Bech32Address::new(hrp, key_hash)
    }

    /// Parses an address and checks its prefix against the chain's expected
    /// prefixes.
    ///
    /// Matching is by prefix so that one entry covers families like
    /// "cosmos"/"cosmosvaloper" that extend a base prefix. The full codec
    /// validation always runs first; no string is ever accepted without it.
    pub fn from_str_checked<'a, I>(s: &str, possible_hrps: I) -> Result<Bech32Address, AddressError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let addr = Bech32Address::from_str(s)?;
        if !possible_hrps.into_iter().any(|h| addr.hrp.starts_with(h)) {
            return Err(AddressError::UnknownHrp(addr.hrp));
        }
        Ok(addr)
    }

    /// The human-readable prefix.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The raw key hash payload.
    pub fn key_hash(&self) -> &[u8] {
        &self.key_hash
    }
}

impl FromStr for Bech32Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Bech32Address, AddressError> {
        let (hrp, payload, variant) = bech32::decode(s)?;
        if variant != Variant::Bech32 {
            return Err(AddressError::WrongChecksumVariant);
        }
        if payload.is_empty() {
            return Err(AddressError::InvalidAddress(s.to_owned()));
        }
        let key_hash = bech32::from_base32(&payload)?;
        Ok(Bech32Address { hrp, key_hash })
    }
}

impl fmt::Display for Bech32Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        bech32::encode_to_fmt(fmt, &self.hrp, bech32::to_base32(&self.key_hash), Variant::Bech32)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SegwitAddress {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = SegwitAddress;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a segwit address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                SegwitAddress::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SegwitAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bech32Address {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Bech32Address;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bech32 key-hash address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Bech32Address::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Bech32Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
