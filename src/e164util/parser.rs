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

use log::trace;

use crate::e164util::classification::type_for_country_code;
use crate::e164util::codec::{CountryCode, E164Number};
use crate::e164util::enums::NumberType;
use crate::e164util::errors::ParseError;
use crate::e164util::helper_constants::{
    MAX_COUNTRY_CODE_LENGTH, MAX_NUMBER_OF_DIGITS, MAX_STRING_LENGTH, MIN_STRING_LENGTH, PLUS_SIGN,
};

/// Parses a raw or human-formatted E.164 string into a validated number.
///
/// The input may contain optional spaces and/or parens of the following
/// general format:
///
/// ```text
/// +1 (234) 567 8901
/// ```
///
/// The string is treated as if there were no non-digit symbols, with a few
/// placement rules enforced on them: parens must be balanced, appear at
/// most once, hold at least one digit, and may not lead or trail the
/// number. The country code is the shortest leading digit prefix with a
/// known classification; since no country code is a prefix of a longer
/// one, the first hit is unambiguous and needs no backtracking.
pub fn parse(input: &str) -> Result<E164Number, ParseError> {
    if input.len() < MIN_STRING_LENGTH {
        return Err(ParseError::StringTooShort);
    }
    if input.len() > MAX_STRING_LENGTH {
        return Err(ParseError::StringTooLong);
    }
    let Some(rest) = input.strip_prefix(PLUS_SIGN) else {
        return Err(ParseError::InvalidPrefix);
    };

    let mut value: u64 = 0;
    let mut total_digits = 0usize;
    let mut country_code: CountryCode = 0;
    let mut country_code_digits = 0usize;
    let mut number_type = NumberType::Invalid;
    let mut left_paren = false;
    let mut right_paren = false;
    let mut prev: Option<char> = None;

    for current in rest.chars() {
        match current {
            '0'..='9' => {
                total_digits += 1;
                if total_digits > MAX_NUMBER_OF_DIGITS {
                    return Err(ParseError::StringTooLong);
                }
                value = value * 10 + u64::from(current as u8 - b'0');
                if number_type.is_invalid() && total_digits <= MAX_COUNTRY_CODE_LENGTH {
                    country_code = value as CountryCode;
                    let candidate = type_for_country_code(country_code);
                    if !candidate.is_invalid() {
                        number_type = candidate;
                        country_code_digits = total_digits;
                    }
                }
            }
            '(' => {
                // Forbid a second left paren and a paren right after the prefix.
                if left_paren || prev.is_none() {
                    return Err(ParseError::BadFormat);
                }
                left_paren = true;
            }
            ')' => {
                // Check parens balance, forbid empty parens.
                if !left_paren || right_paren || prev == Some('(') {
                    return Err(ParseError::BadFormat);
                }
                right_paren = true;
            }
            ' ' => {}
            _ => return Err(ParseError::BadFormat),
        }
        prev = Some(current);
    }

    // Forbid trailing space or paren, and an unclosed paren pair.
    if !prev.is_some_and(|c| c.is_ascii_digit()) || left_paren != right_paren {
        return Err(ParseError::BadFormat);
    }

    // If the country code is invalid, report the prefix that was tried.
    if number_type.is_invalid() {
        return Err(ParseError::InvalidCountryCode(country_code));
    }
    if number_type.is_unassigned() {
        return Err(ParseError::UnassignedCountryCode(country_code));
    }

    // Need some digits for the subscriber number.
    if total_digits <= country_code_digits {
        return Err(ParseError::NoSubscriberDigits);
    }

    let subscriber_digits = total_digits - country_code_digits;
    match number_type.min_subscriber_digits() {
        Some(min) if subscriber_digits >= min => {}
        _ => return Err(ParseError::TypeLengthMismatch(country_code)),
    }

    trace!(
        "parsed '{input}': country code {country_code} ({number_type:?}), \
         {subscriber_digits} subscriber digits"
    );
    Ok(E164Number::encode(country_code, value))
}
