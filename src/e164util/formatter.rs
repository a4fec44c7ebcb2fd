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

use crate::e164util::area_codes;
use crate::e164util::codec::E164Number;
use crate::e164util::helper_constants::{MAX_STRING_LENGTH, PLUS_SIGN};
use crate::e164util::helper_functions::country_code_length;

// Spacing patterns for the tail of a pretty-formatted number, indexed by
// the count of digits remaining after the country and area codes. Digits
// are grouped in packs of 4 from the tail wherever possible, otherwise in
// packs of 3. The resulting string looks like this in the most general
// case:
//
// +CC (AC) 12 345 6789
#[rustfmt::skip]
static FORMAT_PATTERNS: [&str; 15] = [
    "", /* padding, never used */
    "x",
    "xx",
    "xxx",
    "xxxx",
    "xx xxx",
    "xxx xxx",
    "xxx xxxx",
    "xxxx xxxx",
    "xx xxx xxxx",
    "xxx xxx xxxx",
    "xxx xxxx xxxx",
    "xxxx xxxx xxxx",
    "xx xxx xxxx xxxx",
    "xxx xxx xxxx xxxx",
];

/// Canonical raw form: the prefix followed by the undecorated digit string.
/// `parse(format_raw(n))` returns `n` for every valid number.
pub fn format_raw(number: &E164Number) -> String {
    let mut buffer = itoa::Buffer::new();
    fast_cat::concat_str!(PLUS_SIGN, buffer.format(number.digit_value()))
}

/// The number's country code rendered in decimal, for textual casts.
pub fn format_country_code(number: &E164Number) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(number.country_code()).to_owned()
}

/// Human-readable form: country code, then the area code in parens when the
/// installed area-code table resolves a non-zero length for this country,
/// then the remaining digits grouped for display:
///
/// ```text
/// +1 (234) 567 8901
/// ```
///
/// The output parses back to the same number.
pub fn format_pretty(number: &E164Number) -> String {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(number.digit_value());
    let country_code = number.country_code();
    let code_length = country_code_length(country_code);
    let area_code_length =
        area_codes::area_code_length_of(number.digit_value(), country_code, digits.len());

    // A valid number keeps at least one digit after the area code; running
    // out of digits here means the packed value and the installed
    // configuration disagree in a way parsing can never produce.
    let remaining = digits
        .len()
        .checked_sub(code_length + area_code_length)
        .unwrap_or_else(|| {
            panic!("not enough digits for the area code in an E164 number: {digits}; area code length {area_code_length}")
        });
    if remaining == 0 {
        panic!("no digits follow the area code in an E164 number: {digits}; area code length {area_code_length}");
    }

    let mut formatted = String::with_capacity(MAX_STRING_LENGTH);
    formatted.push_str(PLUS_SIGN);
    formatted.push_str(&digits[..code_length]);
    formatted.push(' ');

    let mut position = code_length;
    if area_code_length > 0 {
        formatted.push('(');
        formatted.push_str(&digits[position..position + area_code_length]);
        formatted.push(')');
        formatted.push(' ');
        position += area_code_length;
    }

    // `remaining` is at most 14: the country code takes at least one of the
    // fifteen digits.
    for pattern_byte in FORMAT_PATTERNS[remaining].bytes() {
        if pattern_byte == b'x' {
            formatted.push_str(&digits[position..position + 1]);
            position += 1;
        } else {
            formatted.push(' ');
        }
    }
    formatted
}
