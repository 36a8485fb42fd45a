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

// This file is an adaptation of the bech32 crate with the following
// license notice:
//
// Copyright (c) 2017 Clark Moody
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! # Bech32 and Bech32m
//!
//! The checksummed base32 text format defined by [BIP-173] and amended by
//! [BIP-350]. A string is `hrp || '1' || data || checksum`, where the
//! human-readable part names the chain and network, the data part carries
//! 5-bit groups in a 32-symbol alphabet, and the checksum is six further
//! groups of a BCH code over GF(32). The two checksum variants share the
//! whole pipeline and differ only in the constant the polynomial residue is
//! compared against.
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

use std::fmt;

/// Human-readable part and data part separator.
const SEP: char = '1';

/// Number of checksum characters at the end of every encoded string.
const CHECKSUM_LENGTH: usize = 6;

/// Longest encoded string accepted by [decode]. BIP-173 fixes 90 characters;
/// several chains encode payloads past that, so the ceiling is raised for
/// every consumer of this codec.
const MAX_LENGTH: usize = 120;

/// Longest allowed human-readable part.
const MAX_HRP_LENGTH: usize = 83;

/// Residue constant of the original Bech32 checksum.
const BECH32_CONST: u32 = 0x0000_0001;

/// Residue constant of the Bech32m checksum.
const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// Encoding character set. Maps data value -> char.
const CHARSET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', 'g', 'f', '2', 't', 'v', 'd', 'w', '0', 's', '3', 'j',
    'n', '5', '4', 'k', 'h', 'c', 'e', '6', 'm', 'u', 'a', '7', 'l',
];

// Reverse character set. Maps ASCII byte -> CHARSET index on [0,31].
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30, 7, 5, -1, -1, -1, -1, -1, -1, -1, 29, -1, 24, 13, 25, 9, 8, 23,
    -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1, -1, -1, -1, -1, -1, 29,
    -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1,
    -1, -1, -1, -1,
];

/// Generator coefficients of the checksum polynomial.
const GEN: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// A 5-bit value, the native alphabet unit of the encoding.
///
/// Constructible only through [`u5::try_from_u8`], so a value of this type is
/// always a valid alphabet index.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct u5(u8);

impl u5 {
    /// Converts a byte to a `u5` if the value is in range.
    pub fn try_from_u8(value: u8) -> Result<u5, Error> {
        if value > 31 {
            Err(Error::InvalidData(value))
        } else {
            Ok(u5(value))
        }
    }

    /// Returns the numeric value of this quintet.
    pub fn to_u8(self) -> u8 {
        self.0
    }
}

impl From<u5> for u8 {
    fn from(v: u5) -> u8 {
        v.0
    }
}

impl AsRef<u8> for u5 {
    fn as_ref(&self) -> &u8 {
        &self.0
    }
}

/// Which of the two checksum algorithms a string was encoded with.
///
/// A failed decode is reported through [`Error`], never through a variant
/// value, so holding a `Variant` always means the checksum matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// The original BIP-173 checksum.
    Bech32,
    /// The BIP-350 checksum.
    Bech32m,
}

impl Variant {
    fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => BECH32_CONST,
            Variant::Bech32m => BECH32M_CONST,
        }
    }
}

/// Error types for Bech32 encoding and decoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// String does not contain the separator character.
    MissingSeparator,
    /// The checksum does not match the rest of the data.
    InvalidChecksum,
    /// The data or human-readable part is too long or too short.
    InvalidLength,
    /// Some part of the string contains an invalid character.
    InvalidChar(char),
    /// Some part of the data has an invalid value.
    InvalidData(u8),
    /// The bit conversion failed due to a padding issue.
    InvalidPadding,
    /// The whole string must be of one case.
    MixedCase,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingSeparator => write!(f, "missing human-readable separator, \"{}\"", SEP),
            Error::InvalidChecksum => write!(f, "invalid checksum"),
            Error::InvalidLength => write!(f, "invalid length"),
            Error::InvalidChar(n) => write!(f, "invalid character (code={})", n),
            Error::InvalidData(n) => write!(f, "invalid data point ({})", n),
            Error::InvalidPadding => write!(f, "invalid padding"),
            Error::MixedCase => write!(f, "mixed-case strings not allowed"),
        }
    }
}

impl std::error::Error for Error {}

/// Checks that an HRP is 1 to 83 characters long, every byte in the ASCII
/// range [33, 126] and not mixed case. Returns the lower-cased form.
pub(crate) fn check_hrp(hrp: &str) -> Result<String, Error> {
    if hrp.is_empty() || hrp.len() > MAX_HRP_LENGTH {
        return Err(Error::InvalidLength);
    }
    let mut has_lower = false;
    let mut has_upper = false;
    for b in hrp.bytes() {
        // Valid subset of ASCII
        if b < 33 || b > 126 {
            return Err(Error::InvalidChar(b as char));
        }
        if b.is_ascii_lowercase() {
            has_lower = true;
        } else if b.is_ascii_uppercase() {
            has_upper = true;
        }
    }
    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }
    Ok(hrp.to_ascii_lowercase())
}

/// Encode a bech32 payload to string.
///
/// The HRP is validated and normalized to lower case; the encoded result is
/// always entirely lower case. Fails on a malformed HRP or when the encoded
/// form would exceed the 120 character ceiling enforced by [decode].
pub fn encode<T: AsRef<[u5]>>(hrp: &str, data: T, variant: Variant) -> Result<String, Error> {
    let hrp = check_hrp(hrp)?;
    let data = data.as_ref();
    if hrp.len() + 1 + data.len() + CHECKSUM_LENGTH > MAX_LENGTH {
        return Err(Error::InvalidLength);
    }

    let checksum = create_checksum(hrp.as_bytes(), data, variant);
    let mut ret = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    ret.push_str(&hrp);
    ret.push(SEP);
    for p in data.iter().chain(checksum.iter()) {
        ret.push(CHARSET[p.to_u8() as usize]);
    }
    Ok(ret)
}

/// Encode a bech32 payload to an [`fmt::Formatter`].
///
/// Performs no validation: the caller guarantees a well-formed, lower-case
/// HRP. Used by `Display` impls of address types whose constructors have
/// already validated their parts.
pub fn encode_to_fmt<T: AsRef<[u5]>>(
    fmt: &mut fmt::Formatter,
    hrp: &str,
    data: T,
    variant: Variant,
) -> fmt::Result {
    let checksum = create_checksum(hrp.as_bytes(), data.as_ref(), variant);
    let data_part = data.as_ref().iter().chain(checksum.iter());

    write!(
        fmt,
        "{}{}{}",
        hrp,
        SEP,
        data_part
            .map(|p| CHARSET[p.to_u8() as usize])
            .collect::<String>()
    )
}

/// Decode a bech32 string into the HRP, the data payload and the checksum
/// variant that matched.
///
/// The HRP is returned lower-cased and the six checksum quintets are
/// stripped from the payload. Every failure mode is an [`Error`]; no input
/// can panic this function.
pub fn decode(s: &str) -> Result<(String, Vec<u5>, Variant), Error> {
    // Ensure overall length is within bounds
    if s.len() < 2 || s.len() > MAX_LENGTH {
        return Err(Error::InvalidLength);
    }

    // Split at the last occurrence of the separator character
    let (raw_hrp, raw_data) = match s.rfind(SEP) {
        None => return Err(Error::MissingSeparator),
        Some(sep) => {
            let (hrp, data) = s.split_at(sep);
            (hrp, &data[1..])
        }
    };
    if raw_hrp.is_empty() || raw_hrp.len() > MAX_HRP_LENGTH || raw_data.len() < CHECKSUM_LENGTH {
        return Err(Error::InvalidLength);
    }

    let mut has_lower = false;
    let mut has_upper = false;
    let mut hrp_bytes = Vec::with_capacity(raw_hrp.len());
    for b in raw_hrp.bytes() {
        // Valid subset of ASCII
        if b < 33 || b > 126 {
            return Err(Error::InvalidChar(b as char));
        }
        let mut c = b;
        if b.is_ascii_lowercase() {
            has_lower = true;
        } else if b.is_ascii_uppercase() {
            has_upper = true;
            // Convert to lowercase
            c = b.to_ascii_lowercase();
        }
        hrp_bytes.push(c);
    }

    // Check data payload
    let mut data = raw_data
        .chars()
        .map(|c| {
            // Only check if c is in the ASCII range; all invalid ASCII
            // characters have the value -1 in CHARSET_REV (which covers the
            // whole ASCII range) and will be filtered out later.
            if !c.is_ascii() {
                return Err(Error::InvalidChar(c));
            }

            if c.is_ascii_lowercase() {
                has_lower = true;
            } else if c.is_ascii_uppercase() {
                has_upper = true;
            }

            // c is <128 since it is in the ASCII range, CHARSET_REV.len() == 128
            let num_value = CHARSET_REV[c as usize];
            if !(0..=31).contains(&num_value) {
                return Err(Error::InvalidChar(c));
            }

            Ok(u5(num_value as u8))
        })
        .collect::<Result<Vec<u5>, Error>>()?;

    // Ensure no mixed case
    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }

    // Ensure checksum
    let variant = match verify_checksum(&hrp_bytes, &data) {
        Some(variant) => variant,
        None => return Err(Error::InvalidChecksum),
    };

    // Remove checksum from data payload
    let dbl = data.len();
    data.truncate(dbl - CHECKSUM_LENGTH);

    let hrp = String::from_utf8(hrp_bytes).expect("hrp bytes are printable ASCII");
    Ok((hrp, data, variant))
}

fn create_checksum(hrp: &[u8], data: &[u5], variant: Variant) -> Vec<u5> {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    // Pad with six zeros
    values.extend_from_slice(&[u5(0); CHECKSUM_LENGTH]);
    let plm = polymod(&values) ^ variant.constant();
    let mut checksum = Vec::with_capacity(CHECKSUM_LENGTH);
    for p in 0..CHECKSUM_LENGTH {
        checksum.push(u5(((plm >> (5 * (5 - p))) & 0x1f) as u8));
    }
    checksum
}

fn verify_checksum(hrp: &[u8], data: &[u5]) -> Option<Variant> {
    let mut exp = hrp_expand(hrp);
    exp.extend_from_slice(data);
    match polymod(&exp) {
        BECH32_CONST => Some(Variant::Bech32),
        BECH32M_CONST => Some(Variant::Bech32m),
        _ => None,
    }
}

fn hrp_expand(hrp: &[u8]) -> Vec<u5> {
    let mut v = Vec::with_capacity(hrp.len() * 2 + 1);
    for b in hrp {
        v.push(u5(*b >> 5));
    }
    v.push(u5(0));
    for b in hrp {
        v.push(u5(*b & 0x1f));
    }
    v
}

fn polymod(values: &[u5]) -> u32 {
    let mut chk: u32 = 1;
    let mut b: u8;
    for v in values {
        b = (chk >> 25) as u8;
        chk = (chk & 0x1ff_ffff) << 5 ^ u32::from(v.to_u8());
        for i in 0..5 {
            if (b >> i) & 1 == 1 {
                chk ^= GEN[i];
            }
        }
    }
    chk
}

/// Convert between bit sizes.
///
/// Repacks a sequence of `from`-bit groups into `to`-bit groups. With `pad`
/// the final incomplete group is emitted left-shifted; without it, leftovers
/// of a full input group or with non-zero bits are rejected so that no
/// information can be dropped silently.
///
/// # Panics
///
/// Panics if `from` or `to` is 0 or larger than 8; both are fixed constants
/// at every call site, never data-dependent.
pub fn convert_bits<T>(data: &[T], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Error>
where
    T: Into<u8> + Copy,
{
    assert!(
        from > 0 && from <= 8 && to > 0 && to <= 8,
        "convert_bits `from` and `to` parameters must be in 1..=8"
    );
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret: Vec<u8> = Vec::new();
    let maxv: u32 = (1 << to) - 1;
    for value in data {
        let v = u32::from(Into::<u8>::into(*value));
        if (v >> from) != 0 {
            // Input value exceeds `from` bit size
            return Err(Error::InvalidData(v as u8));
        }
        acc = (acc << from) | v;
        bits += from;
        while bits >= to {
            bits -= to;
            ret.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            ret.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(Error::InvalidPadding);
    }
    Ok(ret)
}

/// Converts a byte slice to base32, padding the final quintet.
pub fn to_base32(data: &[u8]) -> Vec<u5> {
    convert_bits(data, 8, 5, true)
        .expect("8-to-5 conversion with padding cannot fail")
        .into_iter()
        .map(u5)
        .collect()
}

/// Converts a base32 slice back to bytes, rejecting non-zero padding bits.
pub fn from_base32(data: &[u5]) -> Result<Vec<u8>, Error> {
    convert_bits(data, 5, 8, false)
}

#[cfg(test)]
mod test {
    use super::*;

    fn u5s(values: &[u8]) -> Vec<u5> {
        values
            .iter()
            .map(|&v| u5::try_from_u8(v).expect("test values are in range"))
            .collect()
    }

    #[test]
    fn valid_bech32_strings() {
        let strings = [
            "A12UEL5L",
            "a12uel5l",
            "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
            "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
            "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
            "?1ezyfcl",
        ];
        for s in &strings {
            let (hrp, data, variant) = decode(s).unwrap_or_else(|e| panic!("{}: {}", s, e));
            assert_eq!(variant, Variant::Bech32, "{}", s);
            let encoded = encode(&hrp, &data, variant).unwrap();
            assert_eq!(encoded, s.to_ascii_lowercase(), "{}", s);
        }
    }

    #[test]
    fn valid_bech32m_strings() {
        let strings = [
            "A1LQFN3A",
            "a1lqfn3a",
            "an83characterlonghumanreadablepartthatcontainsthetheexcludedcharactersbionumber11sg7hg6",
            "abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx",
            "split1checkupstagehandshakeupstreamerranterredcaperredlc445v",
            "?1v759aa",
        ];
        for s in &strings {
            let (hrp, data, variant) = decode(s).unwrap_or_else(|e| panic!("{}: {}", s, e));
            assert_eq!(variant, Variant::Bech32m, "{}", s);
            let encoded = encode(&hrp, &data, variant).unwrap();
            assert_eq!(encoded, s.to_ascii_lowercase(), "{}", s);
        }
    }

    #[test]
    fn invalid_strings() {
        let pairs: &[(&str, Error)] = &[
            (" 1nwldj5", Error::InvalidChar(' ')),
            ("\u{7f}1axkwrx", Error::InvalidChar('\u{7f}')),
            (
                "an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx",
                Error::InvalidLength,
            ),
            ("pzry9x0s0muk", Error::MissingSeparator),
            ("1pzry9x0s0muk", Error::InvalidLength),
            ("x1b4n0q5v", Error::InvalidChar('b')),
            ("li1dgmt3", Error::InvalidLength),
            ("de1lg7wt\u{ff}", Error::InvalidChar('\u{ff}')),
            ("10a06t8", Error::InvalidLength),
            ("1qzzfhee", Error::InvalidLength),
            ("in1muywd", Error::InvalidLength),
            ("M1VUXWEZ", Error::InvalidChecksum),
            ("A12uel5l", Error::MixedCase),
        ];
        for (s, want) in pairs {
            assert_eq!(decode(s).unwrap_err(), *want, "{}", s);
        }
    }

    #[test]
    fn quintet_payload_vector() {
        // Data part enumerating the whole alphabet in order.
        let (hrp, data, variant) =
            decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
        assert_eq!(hrp, "abcdef");
        assert_eq!(variant, Variant::Bech32);
        let want: Vec<u5> = (0..32).map(|v| u5::try_from_u8(v).unwrap()).collect();
        assert_eq!(data, want);

        // The bech32m twin enumerates it in reverse.
        let (hrp, data, variant) =
            decode("abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx").unwrap();
        assert_eq!(hrp, "abcdef");
        assert_eq!(variant, Variant::Bech32m);
        let want: Vec<u5> = (0..32).rev().map(|v| u5::try_from_u8(v).unwrap()).collect();
        assert_eq!(data, want);
    }

    #[test]
    fn checksum_quintets() {
        // bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4 without its checksum
        let data = u5s(&[
            0, 14, 20, 15, 7, 13, 26, 0, 25, 18, 6, 11, 13, 8, 21, 4, 20, 3, 17, 2, 29, 3, 12, 29,
            3, 4, 15, 24, 20, 6, 14, 30, 22,
        ]);
        let checksum = create_checksum(b"bc", &data, Variant::Bech32);
        assert_eq!(checksum, u5s(&[12, 7, 9, 17, 11, 21]));
    }

    #[test]
    fn random_payload_checksum() {
        let raw: [u8; 20] = rand::random();
        let data = to_base32(&raw);
        for &variant in &[Variant::Bech32, Variant::Bech32m] {
            let mut with_checksum = data.clone();
            with_checksum.extend(create_checksum(b"tb", &data, variant));
            assert_eq!(verify_checksum(b"tb", &with_checksum), Some(variant));
        }
    }

    #[test]
    fn roundtrip_both_variants() {
        for &variant in &[Variant::Bech32, Variant::Bech32m] {
            for &data_len in &[0usize, 1, 20, 32, 50] {
                let data: Vec<u5> = (0..data_len)
                    .map(|i| u5::try_from_u8((i % 32) as u8).unwrap())
                    .collect();
                let s = encode("bc", &data, variant).unwrap();
                assert_eq!(s, s.to_ascii_lowercase());
                let (hrp, decoded, var) = decode(&s).unwrap();
                assert_eq!(hrp, "bc");
                assert_eq!(decoded, data);
                assert_eq!(var, variant);

                // An upper-case HRP encodes to the same lower-case string.
                assert_eq!(encode("BC", &data, variant).unwrap(), s);
            }
        }
    }

    #[test]
    fn case_insensitive_decoding() {
        let lower = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        let upper = lower.to_ascii_uppercase();
        assert_eq!(decode(lower).unwrap(), decode(&upper).unwrap());

        let mixed = "bc1QW508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        assert_eq!(decode(mixed).unwrap_err(), Error::MixedCase);
    }

    #[test]
    fn single_char_corruption_detected() {
        let valid = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        let sep = valid.rfind('1').unwrap();
        for i in (sep + 1)..valid.len() {
            for &c in CHARSET.iter() {
                if valid.as_bytes()[i] == c as u8 {
                    continue;
                }
                let mut s = valid.to_owned();
                s.replace_range(i..i + 1, &c.to_string());
                assert!(decode(&s).is_err(), "corrupted string decoded: {}", s);
            }
        }
    }

    #[test]
    fn length_ceiling() {
        struct Unchecked<'a>(&'a str, &'a [u5]);
        impl fmt::Display for Unchecked<'_> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                encode_to_fmt(f, self.0, self.1, Variant::Bech32)
            }
        }

        let hrp = "a".repeat(83);
        let data = vec![u5::try_from_u8(0).unwrap(); 31];

        // 83 + 1 + 31 + 6 = 121 characters: one past the ceiling.
        assert_eq!(encode(&hrp, &data, Variant::Bech32), Err(Error::InvalidLength));

        // The unchecked writer still produces it; decoding must refuse.
        let s = Unchecked(&hrp, &data).to_string();
        assert_eq!(s.len(), 121);
        assert_eq!(decode(&s), Err(Error::InvalidLength));

        // One quintet less fits exactly.
        let s = encode(&hrp, &data[..30], Variant::Bech32).unwrap();
        assert_eq!(s.len(), 120);
        assert!(decode(&s).is_ok());
    }

    #[test]
    fn convert_bits_padding() {
        // 8 -> 5 with padding emits a final left-shifted partial group.
        assert_eq!(convert_bits(&[0xffu8], 8, 5, true).unwrap(), vec![31, 28]);
        // Without padding the non-zero leftover is rejected.
        assert_eq!(convert_bits(&[0xffu8], 8, 5, false), Err(Error::InvalidPadding));
        // 5 -> 8 with non-zero leftover bits fails.
        assert_eq!(convert_bits(&[0x1fu8, 0x1f], 5, 8, false), Err(Error::InvalidPadding));
        // A complete byte plus zero padding bits is accepted.
        assert_eq!(convert_bits(&[0x1fu8, 0x1c], 5, 8, false).unwrap(), vec![0xff]);
        // Out-of-range input value.
        assert_eq!(convert_bits(&[0x20u8], 5, 8, false), Err(Error::InvalidData(0x20)));
    }

    #[test]
    fn base32_roundtrip() {
        let bytes = [0x75u8, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96, 0xd4];
        let quintets = to_base32(&bytes);
        assert_eq!(from_base32(&quintets).unwrap(), bytes.to_vec());
    }

    #[test]
    fn u5_range() {
        assert_eq!(u5::try_from_u8(31).unwrap().to_u8(), 31);
        assert_eq!(u5::try_from_u8(32).unwrap_err(), Error::InvalidData(32));
    }
}
