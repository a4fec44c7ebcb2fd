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

//! Per-country area code display configuration.
//!
//! Area codes are not part of E.164 itself; they only control where
//! pretty-formatting puts its parens. The configuration comes in as a
//! compact format string:
//!
//! ```text
//! +1:xxx;+61:x,11,12,13;+380:xx
//! ```
//!
//! Each semicolon-separated entry names a country code, a default area
//! code pattern (one or more `x` symbols, whose count is the default area
//! code length), and an optional comma-separated list of area code
//! exceptions whose own digit count overrides the default. E.g. for
//! Australia (`+61`) area codes are one digit long by default, with the
//! two-digit exceptions `11`, `12` and `13`. The trailing semicolon is
//! optional.
//!
//! The parsed table is installed process-wide as a unit; formatting calls
//! clone the current snapshot reference up front and are never exposed to a
//! half-replaced table.

use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;

use crate::e164util::classification::type_for_country_code;
use crate::e164util::codec::CountryCode;
use crate::e164util::errors::ConfigError;
use crate::e164util::helper_constants::{MAX_COUNTRY_CODE_LENGTH, POWERS_OF_TEN};
use crate::e164util::helper_functions::{country_code_length, decimal_length};

/// A specific area code whose digit count differs from its country's
/// default length.
pub type AreaCode = u32;

// Far above any real area code; keeps token accumulation within u32.
const MAX_EXCEPTION_DIGITS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
struct AreaCodeFormat {
    country_code: CountryCode,
    default_length: usize,
    exceptions: Vec<AreaCode>,
}

/// The complete per-country area code configuration. Rebuilt wholesale by
/// [`parse_area_code_format`] and replaced as a unit by
/// [`install_area_code_format`]; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaCodeFormatTable {
    // Sorted by country code.
    formats: Vec<AreaCodeFormat>,
}

static CURRENT_FORMAT_TABLE: RwLock<Option<Arc<AreaCodeFormatTable>>> = RwLock::new(None);

/// Installs `table` as the process-wide area code configuration, replacing
/// whatever was installed before; `None` clears it. Formatting calls
/// already running keep the snapshot they took at their start.
pub fn install_area_code_format(table: Option<AreaCodeFormatTable>) {
    match &table {
        Some(table) => trace!(
            "installing area code formats for {} country codes",
            table.formats.len()
        ),
        None => trace!("clearing installed area code formats"),
    }
    *CURRENT_FORMAT_TABLE.write() = table.map(Arc::new);
}

fn snapshot() -> Option<Arc<AreaCodeFormatTable>> {
    CURRENT_FORMAT_TABLE.read().clone()
}

/// Resolves the area code length for a number with digit value `value`,
/// country code `country_code` and `total_digits` digits overall. Returns 0
/// when the country's category carries no area code, no table is installed,
/// or the country has no entry; otherwise the first matching exception's
/// digit count, falling back to the country's default length.
pub(crate) fn area_code_length_of(
    value: u64,
    country_code: CountryCode,
    total_digits: usize,
) -> usize {
    if !type_for_country_code(country_code).supports_area_code() {
        return 0;
    }
    let Some(table) = snapshot() else {
        return 0;
    };
    let Ok(index) = table
        .formats
        .binary_search_by_key(&country_code, |format| format.country_code)
    else {
        return 0;
    };
    let format = &table.formats[index];

    let subscriber_digits = total_digits - country_code_length(country_code);
    let subscriber = value % POWERS_OF_TEN[subscriber_digits];
    for &exception in &format.exceptions {
        let exception_length = decimal_length(u64::from(exception));
        if exception_length <= subscriber_digits
            && subscriber / POWERS_OF_TEN[subscriber_digits - exception_length]
                == u64::from(exception)
        {
            return exception_length;
        }
    }
    format.default_length
}

/// Parses an area codes format string into a table.
///
/// Empty input yields `Ok(None)`: a deliberately empty configuration that,
/// once installed, overrides any previously installed table. Each entry is
/// validated in order — prefix, country code range, area code support for
/// the code's category, uniqueness, length pattern, exception list — and
/// the first violation is returned with the 1-based offset of the
/// offending character.
pub fn parse_area_code_format(input: &str) -> Result<Option<AreaCodeFormatTable>, ConfigError> {
    let bytes = input.as_bytes();
    let mut pos = 0usize;
    let mut formats: Vec<AreaCodeFormat> = Vec::new();

    while pos < bytes.len() {
        if bytes[pos] != b'+' {
            return Err(ConfigError::BadPrefix { position: pos + 1 });
        }
        pos += 1;

        let code_start = pos;
        let mut code: u32 = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            if pos - code_start >= MAX_COUNTRY_CODE_LENGTH {
                return Err(ConfigError::CountryCodeOutOfRange {
                    position: code_start + 1,
                });
            }
            code = code * 10 + u32::from(bytes[pos] - b'0');
            pos += 1;
        }
        if pos == code_start {
            return Err(ConfigError::CountryCodeOutOfRange { position: pos + 1 });
        }
        // At most three digits, so the code is within 0..=999 already.
        let country_code = code as CountryCode;

        if !type_for_country_code(country_code).supports_area_code() {
            return Err(ConfigError::CountryCodeDoesNotSupportAreaCode {
                country_code,
                position: code_start + 1,
            });
        }
        if formats
            .iter()
            .any(|format| format.country_code == country_code)
        {
            return Err(ConfigError::DuplicateCountryCode {
                country_code,
                position: code_start + 1,
            });
        }

        if pos >= bytes.len() || bytes[pos] != b':' {
            return Err(ConfigError::BadLengthPattern { position: pos + 1 });
        }
        pos += 1;

        // The default area code length is the count of 'x' symbols.
        let pattern_start = pos;
        while pos < bytes.len() && bytes[pos] == b'x' {
            pos += 1;
        }
        let default_length = pos - pattern_start;
        if default_length == 0 {
            return Err(ConfigError::BadLengthPattern { position: pos + 1 });
        }
        // Either ',' or ';' or end of string must follow the pattern.
        if pos < bytes.len() && bytes[pos] != b',' && bytes[pos] != b';' {
            return Err(ConfigError::BadLengthPattern { position: pos + 1 });
        }

        let mut exceptions: Vec<AreaCode> = Vec::new();
        if pos < bytes.len() && bytes[pos] == b',' {
            loop {
                pos += 1; /* consume the comma */
                let token_start = pos;
                let mut exception: AreaCode = 0;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    if pos - token_start >= MAX_EXCEPTION_DIGITS {
                        return Err(ConfigError::BadExceptionList {
                            position: token_start + 1,
                        });
                    }
                    exception = exception * 10 + AreaCode::from(bytes[pos] - b'0');
                    pos += 1;
                }
                if pos == token_start {
                    // Empty token: a doubled or trailing comma.
                    return Err(ConfigError::BadExceptionList { position: pos + 1 });
                }
                if exceptions.contains(&exception) {
                    return Err(ConfigError::BadExceptionList {
                        position: token_start + 1,
                    });
                }
                exceptions.push(exception);
                if pos < bytes.len() && bytes[pos] == b',' {
                    continue;
                }
                break;
            }
            if pos < bytes.len() && bytes[pos] != b';' {
                return Err(ConfigError::BadExceptionList { position: pos + 1 });
            }
        }

        if pos < bytes.len() {
            pos += 1; /* consume the ';' */
        }

        formats.push(AreaCodeFormat {
            country_code,
            default_length,
            exceptions,
        });
    }

    if formats.is_empty() {
        return Ok(None);
    }
    formats.sort_by_key(|format| format.country_code);
    Ok(Some(AreaCodeFormatTable { formats }))
}
