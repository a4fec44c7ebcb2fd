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

//! Static country code classification.
//!
//! An E.164 number's type is determined by its country code, at most the
//! first three digits of the number. The table below assigns a category to
//! every value in 0..=999, following the ITU-T List of Recommendation E.164
//! Assigned Country Codes (position on 1 November 2009):
//!
//! <http://www.itu.int/dms_pub/itu-t/opb/sp/T-SP-E.164D-2009-PDF-E.pdf>
//!
//! Reserved and spare codes are kept distinct from table gaps so callers can
//! report "unassigned" separately from "invalid". No valid country code is a
//! prefix of a longer valid country code; the parser relies on that to fix
//! the country code greedily, without backtracking.

use super::codec::CountryCode;
use super::enums::NumberType;
use super::enums::NumberType::{
    GeographicArea, GlobalService, GroupOfCountries, Invalid, Network, Reserved, SpareWithNote,
    SpareWithoutNote,
};

/// Classifies a country code. Values outside the table domain are `Invalid`.
pub fn type_for_country_code(country_code: CountryCode) -> NumberType {
    TYPE_FOR_COUNTRY_CODE
        .get(country_code as usize)
        .copied()
        .unwrap_or(Invalid)
}

#[rustfmt::skip]
static TYPE_FOR_COUNTRY_CODE: [NumberType; 1000] = [
    /* 0..9 */
    Reserved, GeographicArea, Invalid, Invalid, Invalid,
    Invalid, Invalid, GeographicArea, Invalid, Invalid,
    /* 10..19 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 20..29 */
    GeographicArea, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, GeographicArea, Invalid, Invalid,
    /* 30..39 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    Invalid, GeographicArea, Invalid, Invalid, GeographicArea,
    /* 40..49 */
    GeographicArea, GeographicArea, Invalid, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 50..59 */
    Invalid, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, Invalid,
    /* 60..69 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, Invalid, Invalid, Invalid,
    /* 70..79 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 80..89 */
    Invalid, GeographicArea, GeographicArea, Invalid, GeographicArea,
    Invalid, GeographicArea, Invalid, Invalid, Invalid,
    /* 90..99 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, Invalid, Invalid, GeographicArea, Invalid,
    /* 100..109 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 110..119 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 120..129 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 130..139 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 140..149 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 150..159 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 160..169 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 170..179 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 180..189 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 190..199 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,

    /* 200..209 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 210..219 */
    SpareWithoutNote, SpareWithoutNote, GeographicArea, GeographicArea, SpareWithoutNote,
    SpareWithoutNote, GeographicArea, SpareWithoutNote, GeographicArea, SpareWithoutNote,
    /* 220..229 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 230..239 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 240..249 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 250..259 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, SpareWithoutNote,
    /* 260..269 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 270..279 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 280..289 */
    SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote,
    SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote,
    /* 290..299 */
    GeographicArea, GeographicArea, SpareWithoutNote, SpareWithoutNote, SpareWithoutNote,
    SpareWithoutNote, SpareWithoutNote, GeographicArea, GeographicArea, GeographicArea,

    /* 300..309 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 310..319 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 320..329 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 330..339 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 340..349 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 350..359 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 360..369 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 370..379 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 380..389 */
    GeographicArea, GeographicArea, GeographicArea, SpareWithoutNote, SpareWithoutNote,
    GeographicArea, GeographicArea, GeographicArea, GroupOfCountries, GeographicArea,
    /* 390..399 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,

    /* 400..409 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 410..419 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 420..429 */
    GeographicArea, GeographicArea, SpareWithoutNote, GeographicArea, SpareWithoutNote,
    SpareWithoutNote, SpareWithoutNote, SpareWithoutNote, SpareWithoutNote, SpareWithoutNote,
    /* 430..439 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 440..449 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 450..459 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 460..469 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 470..479 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 480..489 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 490..499 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,

    /* 500..509 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 510..519 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 520..529 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 530..539 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 540..549 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 550..559 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 560..569 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 570..579 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 580..589 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 590..599 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,

    /* 600..609 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 610..619 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 620..629 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 630..639 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 640..649 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 650..659 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 660..669 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 670..679 */
    GeographicArea, SpareWithoutNote, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 680..689 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, SpareWithoutNote,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    /* 690..699 */
    GeographicArea, GeographicArea, GeographicArea, SpareWithoutNote, SpareWithoutNote,
    SpareWithoutNote, SpareWithoutNote, SpareWithoutNote, SpareWithoutNote, SpareWithoutNote,

    /* 700..709 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 710..719 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 720..729 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 730..739 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 740..749 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 750..759 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 760..769 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 770..779 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 780..789 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 790..799 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,

    /* 800..809 */
    GlobalService, SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote,
    SpareWithNote, SpareWithNote, SpareWithNote, GlobalService, SpareWithNote,
    /* 810..819 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 820..829 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 830..839 */
    SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote,
    SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote,
    /* 840..849 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 850..859 */
    GeographicArea, SpareWithoutNote, GeographicArea, GeographicArea, SpareWithoutNote,
    GeographicArea, GeographicArea, SpareWithoutNote, SpareWithoutNote, SpareWithoutNote,
    /* 860..869 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 870..879 */
    Network, Network, Network, Network, Reserved,
    Reserved, Reserved, Reserved, GlobalService, Reserved,
    /* 880..889 */
    GeographicArea, Network, Network, SpareWithNote, SpareWithoutNote,
    SpareWithoutNote, GeographicArea, SpareWithoutNote, GlobalService, SpareWithoutNote,
    /* 890..899 */
    SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote,
    SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote, SpareWithNote,

    /* 900..909 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 910..919 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 920..929 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 930..939 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 940..949 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 950..959 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 960..969 */
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, GeographicArea, Reserved,
    /* 970..979 */
    Reserved, GeographicArea, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, GeographicArea, SpareWithoutNote, GlobalService,
    /* 980..989 */
    Invalid, Invalid, Invalid, Invalid, Invalid,
    Invalid, Invalid, Invalid, Invalid, Invalid,
    /* 990..999 */
    SpareWithoutNote, GlobalService, GeographicArea, GeographicArea, GeographicArea,
    GeographicArea, GeographicArea, SpareWithoutNote, GeographicArea, Reserved
];
