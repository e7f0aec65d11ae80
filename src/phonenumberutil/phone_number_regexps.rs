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

use regex::Regex;

use super::{
    NumberKind,
    helper_constants::{
        COUNTRY_MARKER_EXPR, EXCHANGE_LENGTH, LANDLINE_SUB_EXPR, LINE_LENGTH, MOBILE_SUB_EXPR,
    },
};

pub(super) struct PhoneNumberRegExps {
    /// Regular expression of a complete, sanitized South African number.
    ///
    /// Corresponds to the following:
    /// `^(?:27|0)(([landline]|[mobile])(\d{3})(\d{4}))$`
    ///
    /// Group 1 is the national significant number, groups 2 to 4 are its
    /// prefix, exchange and line blocks.
    pub valid_phone_number: Regex,

    /// Prefix classifiers. These are built from the same fragments as
    /// `valid_phone_number` and are meant to be used with `full_match`.
    pub landline_prefix: Regex,
    pub mobile_prefix: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        let valid_phone_number = format!(
            r"^(?:{})(({}|{})(\d{{{}}})(\d{{{}}}))$",
            COUNTRY_MARKER_EXPR, LANDLINE_SUB_EXPR, MOBILE_SUB_EXPR, EXCHANGE_LENGTH, LINE_LENGTH,
        );

        Self {
            valid_phone_number: Regex::new(&valid_phone_number).expect("Invalid constant pattern!"),
            landline_prefix: Regex::new(LANDLINE_SUB_EXPR).expect("Invalid constant pattern!"),
            mobile_prefix: Regex::new(MOBILE_SUB_EXPR).expect("Invalid constant pattern!"),
        }
    }

    pub fn prefix_pattern(&self, kind: NumberKind) -> &Regex {
        match kind {
            NumberKind::Landline => &self.landline_prefix,
            NumberKind::Mobile => &self.mobile_prefix,
        }
    }
}
