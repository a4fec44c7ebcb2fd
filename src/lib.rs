//! E.164 international telephone numbers as a compact value type.
//!
//! A valid number lives in a single 64-bit word ([`E164Number`]) that packs
//! the digit value together with its country code, so comparison and
//! formatting never re-parse. [`parse`] is the only way to build one from
//! text; [`format_raw`] and [`format_pretty`] render it back, the latter
//! honoring the process-wide area code configuration installed through
//! [`parse_area_code_format`] and [`install_area_code_format`].

mod e164util;
#[cfg(test)]
mod tests;

pub use e164util::area_codes::{
    install_area_code_format, parse_area_code_format, AreaCode, AreaCodeFormatTable,
};
pub use e164util::codec::{compare, CountryCode, E164Number};
pub use e164util::enums::NumberType;
pub use e164util::errors::{ConfigError, CorruptValueError, ParseError};
pub use e164util::formatter::{format_country_code, format_pretty, format_raw};
pub use e164util::parser::parse;
