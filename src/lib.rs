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

//! # Rust Bech32 Address Library
//!
//! Support for encoding, decoding and validating the checksummed base32
//! address formats of [BIP-173] and [BIP-350]: the Bech32/Bech32m text
//! codec, the bit-width conversion between bytes and 5-bit groups, and the
//! generic witness and key-hash address types that chain-specific modules
//! are thin adapters over.
//!
//! Everything here is a pure value type: operations either return a value
//! or an explicit error, never panic on untrusted input, and hold no shared
//! state, so they are safe to call from any number of threads.
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub mod address;
pub mod bech32;

// export the main types at the top level so they can be used as
// `bech32_address::SegwitAddress` etc.
pub use crate::address::{
    AddressError, AddressParams, Bech32Address, KeyHasher, LegacyAddress, SegwitAddress,
};
pub use crate::bech32::{u5, Variant};
