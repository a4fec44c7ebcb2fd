use super::codec::CountryCode;

/// Number of digits in the decimal representation of `value` (1 for zero).
pub fn decimal_length(value: u64) -> usize {
    let mut length = 1;
    let mut rest = value / 10;
    while rest > 0 {
        length += 1;
        rest /= 10;
    }
    length
}

/// Number of digits a country code occupies at the front of a number.
pub fn country_code_length(country_code: CountryCode) -> usize {
    if country_code < 10 {
        1
    } else if country_code < 100 {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::{country_code_length, decimal_length};

    #[test]
    fn decimal_length_counts_digits() {
        assert_eq!(decimal_length(0), 1);
        assert_eq!(decimal_length(9), 1);
        assert_eq!(decimal_length(10), 2);
        assert_eq!(decimal_length(999), 3);
        assert_eq!(decimal_length(999_999_999_999_999), 15);
    }

    #[test]
    fn country_code_length_by_magnitude() {
        assert_eq!(country_code_length(1), 1);
        assert_eq!(country_code_length(61), 2);
        assert_eq!(country_code_length(380), 3);
        assert_eq!(country_code_length(999), 3);
    }
}
