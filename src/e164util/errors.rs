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

use thiserror::Error;

use crate::e164util::codec::CountryCode;

/// Reasons [`parse`](crate::parse) rejects an input string.
///
/// Every rejection is reported to the caller as a distinct kind; nothing is
/// silently truncated or coerced. Translating these into user-facing
/// messages is the embedding layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Misplaced or unbalanced formatting characters, a trailing non-digit,
    /// or a character that may not appear in a number at all.
    #[error("invalid E.164 number format")]
    BadFormat,
    #[error("an E.164 number must begin with \"+\"")]
    InvalidPrefix,
    /// The input has more than the maximum 15 digits, or is longer than any
    /// permissible formatted number.
    #[error("string too long: an E.164 number has at most 15 digits")]
    StringTooLong,
    #[error("string too short: an E.164 number has at least 2 digits")]
    StringTooShort,
    /// No 1-, 2- or 3-digit prefix of the number is a known country code.
    /// Carries the longest prefix that was tried.
    #[error("invalid E.164 country code: {0}")]
    InvalidCountryCode(CountryCode),
    /// The country code is reserved or spare in the ITU assignment list.
    #[error("unassigned E.164 country code: {0}")]
    UnassignedCountryCode(CountryCode),
    /// Nothing follows the country code.
    #[error("no subscriber number digits")]
    NoSubscriberDigits,
    /// The subscriber number is shorter than the minimum for the country
    /// code's category.
    #[error("subscriber number too short for country code {0}")]
    TypeLengthMismatch(CountryCode),
}

/// Reasons [`parse_area_code_format`](crate::parse_area_code_format) rejects
/// a configuration string. Every variant carries the 1-based offset of the
/// offending character in the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("\"+\" expected at character {position}")]
    BadPrefix { position: usize },
    #[error("bad country code number at character {position}")]
    CountryCodeOutOfRange { position: usize },
    #[error("country code {country_code} does not support area codes (at character {position})")]
    CountryCodeDoesNotSupportAreaCode {
        country_code: CountryCode,
        position: usize,
    },
    #[error("duplicate country code {country_code} at character {position}")]
    DuplicateCountryCode {
        country_code: CountryCode,
        position: usize,
    },
    /// The default-length pattern after the colon is missing, empty, or
    /// contains something other than `x`.
    #[error("bad area code length pattern at character {position}")]
    BadLengthPattern { position: usize },
    /// Empty exception token (trailing or doubled comma), a non-numeric or
    /// oversized token, or a duplicate exception within one entry.
    #[error("bad area code exception list at character {position}")]
    BadExceptionList { position: usize },
}

/// Structural failures detected while decoding an untrusted 8-byte wire
/// value. Transport input is never trusted blindly: a word that fails any
/// invariant of the packed representation is rejected with the specific
/// breach, never coerced into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CorruptValueError {
    #[error("unused high bits tainted in an E.164 value")]
    TaintedHighBits,
    #[error("the E.164 digit value exceeds the maximum possible value")]
    ValueOutOfRange,
    #[error("cached country code disagrees with the leading digits")]
    CountryCodeMismatch,
    #[error("the country code in an E.164 value is invalid: {0}")]
    InvalidCountryCode(CountryCode),
    #[error("the country code in an E.164 value is unassigned: {0}")]
    UnassignedCountryCode(CountryCode),
    #[error("subscriber number length inconsistent with country code {0}")]
    BadSubscriberLength(CountryCode),
}
