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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Output formats of a South African phone number.
///
/// For the Johannesburg number `011 500 9000`:
/// - **National**: `011 500 9000`
/// - **E164**: `+27115009000`
/// - **Intl**: `+27 11 500 9000`
/// - **RFC3966**: `+27-11-500-9000`
///
/// The string forms are case-sensitive and match the names accepted by
/// the validation rule.
#[derive(Debug, EnumIter, EnumString, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// Trunk prefix `0` followed by space separated groups.
    #[strum(serialize = "national")]
    National,
    /// `+27` followed by the national significant number, no separators.
    #[strum(serialize = "E164")]
    E164,
    /// `+27` followed by space separated groups.
    #[strum(serialize = "intl")]
    Intl,
    /// `+27` followed by hyphen separated groups.
    #[strum(serialize = "RFC3966")]
    RFC3966,
}

/// Kind of service a number belongs to, derived from its prefix.
#[derive(Debug, EnumIter, EnumString, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum NumberKind {
    /// Geographic number, the prefix is an area code.
    Landline,
    /// The prefix is a mobile network code.
    Mobile,
}

/// Named parts of a parsed number.
#[derive(Debug, EnumIter, EnumString, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberPart {
    /// All nine digits following the country marker.
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "prefix")]
    Prefix,
    #[strum(to_string = "exchange", serialize = "three")]
    Exchange,
    #[strum(to_string = "line", serialize = "four")]
    Line,
}
