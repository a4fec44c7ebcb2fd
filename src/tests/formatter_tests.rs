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

use crate::tests::{config_lock, init_logging};
use crate::{
    format_country_code, format_pretty, format_raw, install_area_code_format, parse,
    parse_area_code_format,
};

#[test]
fn raw_output_round_trips() {
    init_logging();
    for input in [
        "+12",
        "+123456",
        "+61412345678",
        "+380441234567",
        "+80012345678",
        "+998999999999999",
    ] {
        let number = parse(input).unwrap();
        let raw = format_raw(&number);
        assert_eq!(raw, *input);
        assert_eq!(parse(&raw).unwrap(), number);
    }
}

#[test]
fn renders_the_country_code() {
    assert_eq!(format_country_code(&parse("+12345678901").unwrap()), "1");
    assert_eq!(format_country_code(&parse("+61412345678").unwrap()), "61");
    assert_eq!(
        format_country_code(&parse("+380441234567").unwrap()),
        "380"
    );
}

#[test]
fn pretty_without_a_table_groups_from_the_tail() {
    let _guard = config_lock();
    install_area_code_format(None);

    assert_eq!(
        format_pretty(&parse("+12345678901").unwrap()),
        "+1 234 567 8901"
    );
    assert_eq!(
        format_pretty(&parse("+61412345678").unwrap()),
        "+61 41 234 5678"
    );
    assert_eq!(format_pretty(&parse("+123456").unwrap()), "+1 23 456");
    assert_eq!(format_pretty(&parse("+12").unwrap()), "+1 2");
    assert_eq!(
        format_pretty(&parse("+998999999999999").unwrap()),
        "+998 9999 9999 9999"
    );
    // Global service numbers never have an area code.
    assert_eq!(
        format_pretty(&parse("+80012345678").unwrap()),
        "+800 1234 5678"
    );
}

#[test]
fn pretty_with_a_table_parenthesizes_the_area_code() {
    init_logging();
    let _guard = config_lock();
    install_area_code_format(
        parse_area_code_format("+1:xxx;+61:x,11,12,13;+380:xx").unwrap(),
    );

    assert_eq!(
        format_pretty(&parse("+12345678901").unwrap()),
        "+1 (234) 567 8901"
    );
    // Exception area codes are longer than the Australian default.
    assert_eq!(
        format_pretty(&parse("+61118765432").unwrap()),
        "+61 (11) 876 5432"
    );
    assert_eq!(
        format_pretty(&parse("+61412345678").unwrap()),
        "+61 (4) 1234 5678"
    );
    assert_eq!(
        format_pretty(&parse("+380441234567").unwrap()),
        "+380 (44) 123 4567"
    );
    // Countries absent from the table fall back to plain grouping.
    assert_eq!(
        format_pretty(&parse("+442087654321").unwrap()),
        "+44 208 765 4321"
    );

    install_area_code_format(None);
}

#[test]
fn pretty_round_trips_at_the_digit_ceiling() {
    let _guard = config_lock();
    install_area_code_format(parse_area_code_format("+1:x;+61:xx;+380:xxx").unwrap());

    // Fifteen-digit numbers across country code and area code lengths; the
    // first case is the longest output pretty-formatting can produce.
    for (input, pretty) in [
        ("+123456789012345", "+1 (2) 34 567 8901 2345"),
        ("+614567890123456", "+61 (45) 678 9012 3456"),
        ("+380456789012345", "+380 (456) 78 901 2345"),
        ("+998999999999999", "+998 9999 9999 9999"),
    ] {
        let number = parse(input).unwrap();
        assert_eq!(format_pretty(&number), pretty);
        assert_eq!(parse(pretty).unwrap(), number);
    }

    install_area_code_format(None);
}

#[test]
fn pretty_output_parses_back() {
    let _guard = config_lock();
    install_area_code_format(
        parse_area_code_format("+1:xxx;+61:x,11,12,13;+380:xx").unwrap(),
    );

    for input in [
        "+12345678901",
        "+61118765432",
        "+61412345678",
        "+380441234567",
        "+442087654321",
        "+80012345678",
    ] {
        let number = parse(input).unwrap();
        assert_eq!(parse(&format_pretty(&number)).unwrap(), number);
    }

    install_area_code_format(None);
}
