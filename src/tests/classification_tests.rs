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

use strum::IntoEnumIterator;

use crate::e164util::classification::type_for_country_code;
use crate::NumberType;

#[test]
fn spot_checks_against_the_itu_list() {
    assert_eq!(type_for_country_code(0), NumberType::Reserved);
    assert_eq!(type_for_country_code(1), NumberType::GeographicArea);
    assert_eq!(type_for_country_code(2), NumberType::Invalid);
    assert_eq!(type_for_country_code(7), NumberType::GeographicArea);
    assert_eq!(type_for_country_code(44), NumberType::GeographicArea);
    assert_eq!(type_for_country_code(280), NumberType::SpareWithNote);
    assert_eq!(type_for_country_code(295), NumberType::SpareWithoutNote);
    assert_eq!(type_for_country_code(388), NumberType::GroupOfCountries);
    assert_eq!(type_for_country_code(800), NumberType::GlobalService);
    assert_eq!(type_for_country_code(870), NumberType::Network);
    assert_eq!(type_for_country_code(979), NumberType::GlobalService);
    assert_eq!(type_for_country_code(999), NumberType::Reserved);
    // Out of the table domain entirely.
    assert_eq!(type_for_country_code(1000), NumberType::Invalid);
}

#[test]
fn no_valid_code_is_a_prefix_of_a_longer_one() {
    // The parser fixes the country code at the first prefix with a known
    // classification; that is only sound if extending a known code by a
    // digit always lands in a table gap.
    for code in 1u16..10 {
        if type_for_country_code(code).is_valid() {
            for digit in 0u16..10 {
                assert!(
                    type_for_country_code(code * 10 + digit).is_invalid(),
                    "code {} shadows {}",
                    code,
                    code * 10 + digit
                );
            }
            for tail in 0u16..100 {
                assert!(
                    type_for_country_code(code * 100 + tail).is_invalid(),
                    "code {} shadows {}",
                    code,
                    code * 100 + tail
                );
            }
        }
    }
    for code in 10u16..100 {
        if type_for_country_code(code).is_valid() {
            for digit in 0u16..10 {
                assert!(
                    type_for_country_code(code * 10 + digit).is_invalid(),
                    "code {} shadows {}",
                    code,
                    code * 10 + digit
                );
            }
        }
    }
}

#[test]
fn category_helpers() {
    for number_type in NumberType::iter() {
        assert_eq!(
            number_type.supports_area_code(),
            matches!(
                number_type,
                NumberType::GeographicArea | NumberType::GroupOfCountries
            )
        );
        assert_eq!(
            number_type.is_unassigned(),
            matches!(
                number_type,
                NumberType::Reserved | NumberType::SpareWithNote | NumberType::SpareWithoutNote
            )
        );
        assert_eq!(number_type.is_invalid(), number_type == NumberType::Invalid);
        assert_eq!(number_type.is_valid(), !number_type.is_invalid());
    }

    assert_eq!(NumberType::GeographicArea.min_subscriber_digits(), Some(1));
    assert_eq!(NumberType::GlobalService.min_subscriber_digits(), Some(1));
    assert_eq!(NumberType::Network.min_subscriber_digits(), Some(2));
    assert_eq!(NumberType::GroupOfCountries.min_subscriber_digits(), Some(2));
    assert_eq!(NumberType::Reserved.min_subscriber_digits(), None);
    assert_eq!(NumberType::Invalid.min_subscriber_digits(), None);
}
