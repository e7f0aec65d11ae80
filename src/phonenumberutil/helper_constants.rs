// Copyright (C) 2025 Kashin Vladislav
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

/// Area codes of South African geographic (fixed-line) numbers.
///
/// The class `[1-4-7-8]` carries a literal hyphen; it never matches
/// sanitized input but is kept so the accepted set is unchanged.
pub const LANDLINE_SUB_EXPR: &'static str = r"1[0-8]|2[1-4\-7-8]|3[1-69]|4[\d]|5[1346-8]";

/// Network codes of South African mobile numbers. `6[1-3]` is shadowed
/// by `6[0-6]`.
pub const MOBILE_SUB_EXPR: &'static str = r"6[0-6]|7[1-46-9]|6[1-3]|8[1-4]";

/// Both trunk forms accepted in front of the national significant number:
/// the country calling code or the national prefix.
pub const COUNTRY_MARKER_EXPR: &'static str = "27|0";

pub const COUNTRY_CALLING_CODE: &'static str = "27";
pub const NATIONAL_PREFIX: &'static str = "0";
pub const PLUS_SIGN: &'static str = "+";

pub const PREFIX_LENGTH: usize = 2;
pub const EXCHANGE_LENGTH: usize = 3;
pub const LINE_LENGTH: usize = 4;

/// Exit code table shipped with the crate.
pub const BUNDLED_EXIT_CODES: &'static str = include_str!("../../resources/exit-codes.ini");
