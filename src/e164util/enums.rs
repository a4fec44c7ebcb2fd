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

use strum::EnumIter;

/// The assignment category of an E.164 country code.
///
/// There are four categories of assigned country codes, each with a
/// well-defined number format, and three categories of unassigned codes.
/// Unassigned codes are rejected when a number is parsed: without an
/// assignment one cannot tell whether the number matches the format of its
/// category.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// **Geographic area numbers.**
    /// Ordinary country codes tied to a country or territory, one to three
    /// digits long (e.g. `1`, `61`, `380`).
    GeographicArea,
    /// **Global service numbers.**
    /// Codes for worldwide services such as International Freephone (`800`).
    GlobalService,
    /// **Network numbers.**
    /// Codes assigned to international networks, e.g. Inmarsat (`870`).
    Network,
    /// **Group-of-countries numbers.**
    /// Codes shared by a group of countries (e.g. `388`, used by the
    /// European Telephony Numbering Space).
    GroupOfCountries,
    /// Reserved by the ITU for future assignment.
    Reserved,
    /// Spare code accompanied by a note in the ITU assignment list.
    SpareWithNote,
    /// Spare code with no note.
    SpareWithoutNote,
    /// **No entry at all.**
    /// A gap in the assignment table; such a code can never begin a number.
    Invalid,
}

impl NumberType {
    /// True for the reserved and spare categories. Unassigned codes are
    /// reported separately from invalid ones so error messages can tell the
    /// two apart.
    pub fn is_unassigned(self) -> bool {
        matches!(
            self,
            NumberType::Reserved | NumberType::SpareWithNote | NumberType::SpareWithoutNote
        )
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, NumberType::Invalid)
    }

    pub fn is_valid(self) -> bool {
        !self.is_invalid()
    }

    /// Only geographic-area and group-of-countries numbers carry an area
    /// code that pretty-formatting may set off in parentheses.
    pub fn supports_area_code(self) -> bool {
        matches!(
            self,
            NumberType::GeographicArea | NumberType::GroupOfCountries
        )
    }

    /// Minimum subscriber number length for an assigned category, or `None`
    /// for categories that never begin a valid number.
    ///
    /// These are absolute (and unrealistic) minimums. True minimums are
    /// country specific, and until this implementation is country-code
    /// specific, this should do.
    pub fn min_subscriber_digits(self) -> Option<usize> {
        match self {
            NumberType::GeographicArea | NumberType::GlobalService => Some(1),
            NumberType::Network | NumberType::GroupOfCountries => Some(2),
            _ => None,
        }
    }
}
