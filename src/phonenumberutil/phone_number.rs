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

use std::fmt;

use log::warn;

use super::{
    NumberKind, PhoneNumberFormat, PhoneNumberPart, REG_EXPS,
    errors::DialInError,
    exit_codes::ExitCodeTable,
    helper_constants::{
        COUNTRY_CALLING_CODE, EXCHANGE_LENGTH, LINE_LENGTH, NATIONAL_PREFIX, PLUS_SIGN,
        PREFIX_LENGTH,
    },
};
use crate::regex_util::RegexFullMatch;

/// A successfully parsed South African phone number.
///
/// Only [`PhoneNumberUtil::check`](super::phonenumberutil::PhoneNumberUtil::check)
/// creates values of this type, so every instance holds a two digit prefix
/// from one of the known ranges, a three digit exchange and a four digit line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    number: String,
    prefix: String,
    exchange: String,
    line: String,
}

impl PhoneNumber {
    pub(super) fn new(number: &str, prefix: &str, exchange: &str, line: &str) -> Self {
        debug_assert_eq!(prefix.len(), PREFIX_LENGTH);
        debug_assert_eq!(exchange.len(), EXCHANGE_LENGTH);
        debug_assert_eq!(line.len(), LINE_LENGTH);

        Self {
            number: number.to_owned(),
            prefix: prefix.to_owned(),
            exchange: exchange.to_owned(),
            line: line.to_owned(),
        }
    }

    /// The national significant number: every digit after `27` or `0`.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Area code of a landline or network code of a mobile number.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn part(&self, part: PhoneNumberPart) -> &str {
        match part {
            PhoneNumberPart::Number => &self.number,
            PhoneNumberPart::Prefix => &self.prefix,
            PhoneNumberPart::Exchange => &self.exchange,
            PhoneNumberPart::Line => &self.line,
        }
    }

    /// Looks a part up by name. Unknown names yield `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        name.parse::<PhoneNumberPart>()
            .ok()
            .map(|part| self.part(part))
    }

    /// Returns true if the prefix belongs to the range of the given kind.
    pub fn is(&self, kind: NumberKind) -> bool {
        REG_EXPS.prefix_pattern(kind).full_match(&self.prefix)
    }

    pub fn kind(&self) -> NumberKind {
        // The parser only accepts prefixes of the two disjoint ranges.
        if self.is(NumberKind::Landline) {
            NumberKind::Landline
        } else {
            NumberKind::Mobile
        }
    }

    pub fn format(&self, number_format: PhoneNumberFormat) -> String {
        match number_format {
            PhoneNumberFormat::National => self.format_national(false, false),
            PhoneNumberFormat::E164 => self.format_e164(),
            PhoneNumberFormat::Intl => self.format_intl(),
            PhoneNumberFormat::RFC3966 => self.format_rfc3966(),
        }
    }

    /// Formats the number for dialling within South Africa, e.g. `011 500 9000`.
    ///
    /// With `hyphens` the groups are joined by `-` instead of a space. With
    /// `parentheses_for_landline` the trunk prefix and area code of a landline
    /// are wrapped in parentheses and always followed by a space, as in
    /// `(011) 500-9000`; mobile numbers ignore this flag.
    pub fn format_national(&self, parentheses_for_landline: bool, hyphens: bool) -> String {
        let separator = if hyphens { "-" } else { " " };

        if parentheses_for_landline && self.is(NumberKind::Landline) {
            return fast_cat::concat_str!(
                "(",
                NATIONAL_PREFIX,
                &self.prefix,
                ") ",
                &self.exchange,
                separator,
                &self.line
            );
        }

        fast_cat::concat_str!(
            NATIONAL_PREFIX,
            &self.prefix,
            separator,
            &self.exchange,
            separator,
            &self.line
        )
    }

    /// `+27 11 500 9000`
    pub fn format_intl(&self) -> String {
        self.format_international(" ")
    }

    /// `+27115009000`
    pub fn format_e164(&self) -> String {
        self.format_international("")
    }

    /// `+27-11-500-9000`
    pub fn format_rfc3966(&self) -> String {
        self.format_international("-")
    }

    /// Formats the number as dialled from abroad: the exit code of
    /// `from_country`, the country calling code and the national significant
    /// number, e.g. `011 27 115009000` from the USA.
    pub fn format_dial_in(
        &self,
        exit_codes: &ExitCodeTable,
        from_country: &str,
    ) -> Result<String, DialInError> {
        if from_country.is_empty() {
            return Err(DialInError::InvalidArgument);
        }
        let Some(exit_code) = exit_codes.get(from_country) else {
            warn!("Unknown country code ({}) provided for dial-in format.", from_country);
            return Err(DialInError::InvalidOption(from_country.to_owned()));
        };

        Ok(fast_cat::concat_str!(
            exit_code,
            " ",
            COUNTRY_CALLING_CODE,
            " ",
            &self.number
        ))
    }

    fn format_international(&self, separator: &str) -> String {
        fast_cat::concat_str!(
            PLUS_SIGN,
            COUNTRY_CALLING_CODE,
            separator,
            &self.prefix,
            separator,
            &self.exchange,
            separator,
            &self.line
        )
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_national(false, false))
    }
}
