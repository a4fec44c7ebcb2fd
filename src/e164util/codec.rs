// Copyright (C) 2026 The re164 Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The packed 64-bit number representation.
//!
//! A validated number is a single word: the full digit value (country code
//! concatenated with the subscriber number) in the low 50 bits, and the
//! country code repeated in the ten bits above it so that comparison and
//! formatting never have to re-derive it. The four top bits stay zero.
//!
//! Ordering over the masked word is a total order consistent with the
//! numeric magnitude of the digit string: the fixed-width cached country
//! code disambiguates prefix relationships between numbers of different
//! lengths.

use std::cmp::Ordering;

use crate::e164util::classification::type_for_country_code;
use crate::e164util::errors::CorruptValueError;
use crate::e164util::helper_constants::{
    MAX_COUNTRY_CODE_LENGTH, MAX_COUNTRY_CODE_VALUE, MAX_NUMBER_VALUE, POWERS_OF_TEN,
};
use crate::e164util::helper_functions::decimal_length;

/// An E.164 country code, in `0..=999`. Always evaluated against the
/// classification table; never meaningful on its own.
pub type CountryCode = u16;

pub(crate) const NUMBER_MASK: u64 = 0x0003_FFFF_FFFF_FFFF;
pub(crate) const CC_SHIFT: u32 = 50;
pub(crate) const CACHED_CC_MASK: u64 = 0x3FF << CC_SHIFT;
pub(crate) const COMPARISON_MASK: u64 = NUMBER_MASK | CACHED_CC_MASK;

// Used in sanity checks. Update to reflect any changes in the masks above.
const USED_BITS_MASK: u64 = COMPARISON_MASK;

/// A validated E.164 telephone number.
///
/// Constructed only by [`parse`](crate::parse) or by
/// [`from_be_bytes`](E164Number::from_be_bytes); immutable once built.
/// Equality, ordering and hashing all operate on the packed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct E164Number(u64);

impl E164Number {
    /// Packs an already-validated country code and digit value. Callers
    /// must have run the full parse-time validation; this only asserts.
    pub(crate) fn encode(country_code: CountryCode, value: u64) -> Self {
        debug_assert!(value <= MAX_NUMBER_VALUE);
        debug_assert!(country_code <= MAX_COUNTRY_CODE_VALUE);
        let number = Self((value & NUMBER_MASK) | (u64::from(country_code) << CC_SHIFT));
        number.sanity_check();
        number
    }

    /// The country code, read from the cached high bits.
    pub fn country_code(&self) -> CountryCode {
        self.sanity_check();
        ((self.0 & CACHED_CC_MASK) >> CC_SHIFT) as CountryCode
    }

    /// The full digit value, country code included.
    pub(crate) fn digit_value(&self) -> u64 {
        self.0 & NUMBER_MASK
    }

    /// The fixed-width 8-byte network-byte-order wire form.
    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.sanity_check();
        self.0.to_be_bytes()
    }

    /// Decodes a value received over a wire or read back from storage,
    /// re-checking every structural invariant before accepting it.
    pub fn from_be_bytes(bytes: [u8; 8]) -> Result<Self, CorruptValueError> {
        let word = u64::from_be_bytes(bytes);
        validate_word(word)?;
        Ok(Self(word))
    }

    /// Values built by this crate always satisfy the structural invariants;
    /// a failure here is a programming defect, not an input error.
    #[inline]
    fn sanity_check(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = validate_word(self.0) {
            panic!("corrupt E164 value {:#018x}: {}", self.0, err);
        }
    }
}

impl Ord for E164Number {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0 & COMPARISON_MASK).cmp(&(other.0 & COMPARISON_MASK))
    }
}

impl PartialOrd for E164Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Three-way comparison over the masked representation; the single
/// definition behind all comparison operators. Exposed for embedding layers
/// that want an explicit compare entry point.
pub fn compare(first: &E164Number, second: &E164Number) -> Ordering {
    first.cmp(second)
}

/// Checks every invariant of the packed representation: no tainted high
/// bits, digit value within the 15-digit ceiling, and a cached country code
/// that matches what re-deriving it from the leading digits yields,
/// including the assignment and subscriber-length rules applied at parse
/// time.
pub(crate) fn validate_word(word: u64) -> Result<(), CorruptValueError> {
    if word & !USED_BITS_MASK != 0 {
        return Err(CorruptValueError::TaintedHighBits);
    }
    let value = word & NUMBER_MASK;
    if value > MAX_NUMBER_VALUE {
        return Err(CorruptValueError::ValueOutOfRange);
    }
    let cached = ((word & CACHED_CC_MASK) >> CC_SHIFT) as CountryCode;

    // Re-derive the country code the way the parser finds it: the shortest
    // leading prefix with a known classification.
    let total_digits = decimal_length(value);
    let mut derived = None;
    for length in 1..=MAX_COUNTRY_CODE_LENGTH.min(total_digits) {
        let prefix = (value / POWERS_OF_TEN[total_digits - length]) as CountryCode;
        let number_type = type_for_country_code(prefix);
        if !number_type.is_invalid() {
            derived = Some((prefix, length, number_type));
            break;
        }
    }
    let Some((country_code, code_length, number_type)) = derived else {
        return Err(CorruptValueError::InvalidCountryCode(cached));
    };
    if country_code != cached {
        return Err(CorruptValueError::CountryCodeMismatch);
    }
    if number_type.is_unassigned() {
        return Err(CorruptValueError::UnassignedCountryCode(country_code));
    }
    let subscriber_digits = total_digits - code_length;
    match number_type.min_subscriber_digits() {
        Some(min) if subscriber_digits >= min => Ok(()),
        _ => Err(CorruptValueError::BadSubscriberLength(country_code)),
    }
}
