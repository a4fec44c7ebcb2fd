/// The prefix every E.164 number string begins with.
pub const PLUS_SIGN: &'static str = "+";

// The ITU limit: an international number carries at most 15 digits.
pub const MAX_NUMBER_OF_DIGITS: usize = 15;

/// The maximum length of a country code.
pub const MAX_COUNTRY_CODE_LENGTH: usize = 3;
pub const MAX_COUNTRY_CODE_VALUE: u16 = 999;

// Raw form: the prefix followed by up to 15 digits.
pub const MAX_RAW_STRING_LENGTH: usize = MAX_NUMBER_OF_DIGITS + PLUS_SIGN.len();

// There may be two paren symbols around the area code, plus up to 5 space
// symbols in a formatted number (one after the country code, one after the
// area code, and up to three inside the digit grouping), thus +7 to the
// raw string length. The worst case is a 15-digit number with a one-digit
// country code and a one-digit area code: "+1 (2) 34 567 8901 2345".
pub const MAX_STRING_LENGTH: usize = MAX_RAW_STRING_LENGTH + 7;

// Pretty conservative: prefix (1) + country code (1) + subscriber number (1).
pub const MIN_STRING_LENGTH: usize = 3;

// The largest possible digit value is 999_999_999_999_999, which is equal
// to 0x3_8D7E_A4C6_7FFF; that is where the 50-bit number mask in the codec
// comes from. The largest currently assigned value is 998_999_999_999_999.
pub const MAX_NUMBER_VALUE: u64 = 999_999_999_999_999;

pub const POWERS_OF_TEN: [u64; 16] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
];
