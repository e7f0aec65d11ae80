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

use std::path::PathBuf;

use log::{debug, trace};
use once_cell::sync::OnceCell;

use super::{
    REG_EXPS,
    errors::{DialInError, ExitCodesError, RuleError},
    exit_codes::ExitCodeTable,
    phone_number::PhoneNumber,
};
use crate::{i18n::CountryCode, rule::Requirement, string_util::strip_non_digits};

/// Where the exit code table of a [`PhoneNumberUtil`] comes from.
#[derive(Debug, Clone)]
enum ExitCodesSource {
    Bundled,
    Provided,
    Path(PathBuf),
}

/// Entry point for parsing South African numbers.
///
/// Parsing needs no state; the util only owns the exit code table used by
/// [`format_dial_in`](Self::format_dial_in). The table is read on the first
/// dial-in request and kept afterwards. A failed read is not cached and is
/// reported by that request only.
#[derive(Debug)]
pub struct PhoneNumberUtil {
    exit_codes_source: ExitCodesSource,
    exit_codes: OnceCell<ExitCodeTable>,
}

impl PhoneNumberUtil {
    /// Creates a util that uses the exit code table shipped with the crate.
    pub fn new() -> Self {
        Self {
            exit_codes_source: ExitCodesSource::Bundled,
            exit_codes: OnceCell::new(),
        }
    }

    pub fn with_exit_codes(exit_codes: ExitCodeTable) -> Self {
        Self {
            exit_codes_source: ExitCodesSource::Provided,
            exit_codes: OnceCell::with_value(exit_codes),
        }
    }

    /// Creates a util that reads its exit code table from an ini file at
    /// `path` when it is first needed.
    pub fn with_exit_codes_path(path: impl Into<PathBuf>) -> Self {
        Self {
            exit_codes_source: ExitCodesSource::Path(path.into()),
            exit_codes: OnceCell::new(),
        }
    }

    /// Parses a free-form number such as `+27 (11) 345-6789`.
    ///
    /// Everything except ASCII digits is discarded first; the remaining digits
    /// must be `27` or `0` followed by a known prefix and seven more digits.
    /// Returns `None` if the input is not a South African number.
    pub fn check(&self, phone_number: &str) -> Option<PhoneNumber> {
        let digits = strip_non_digits(phone_number);

        let Some(captures) = REG_EXPS.valid_phone_number.captures(&digits) else {
            trace!("{:?} is not a South African phone number", phone_number);
            return None;
        };

        Some(PhoneNumber::new(
            captures.get(1)?.as_str(),
            captures.get(2)?.as_str(),
            captures.get(3)?.as_str(),
            captures.get(4)?.as_str(),
        ))
    }

    /// Returns the exit code table, reading it if this is the first request.
    pub fn exit_codes(&self) -> Result<&ExitCodeTable, ExitCodesError> {
        self.exit_codes.get_or_try_init(|| {
            let exit_codes = match &self.exit_codes_source {
                // A provided table fills the cell on construction.
                ExitCodesSource::Bundled | ExitCodesSource::Provided => ExitCodeTable::bundled()?,
                ExitCodesSource::Path(path) => ExitCodeTable::from_path(path)?,
            };
            debug!("Exit code table ready with {} countries", exit_codes.len());
            Ok(exit_codes)
        })
    }

    /// Formats `phone_number` for dialling in from `from_country`, an
    /// ISO 3166-1 alpha-3 code such as `USA`.
    ///
    /// Fails with [`DialInError::InvalidArgument`] for an empty country, with
    /// [`DialInError::InvalidOption`] for a country missing from the table and
    /// with [`DialInError::ExitCodes`] if the table cannot be read.
    pub fn format_dial_in(
        &self,
        phone_number: &PhoneNumber,
        from_country: &str,
    ) -> Result<String, DialInError> {
        if from_country.is_empty() {
            return Err(DialInError::InvalidArgument);
        }
        phone_number.format_dial_in(self.exit_codes()?, from_country)
    }

    /// [`format_dial_in`](Self::format_dial_in) from the USA.
    pub fn format_dial_in_default(&self, phone_number: &PhoneNumber) -> Result<String, DialInError> {
        self.format_dial_in(phone_number, CountryCode::default_dial_in())
    }

    /// Validates `value` the way the `zaphone` rule does.
    ///
    /// Without a requirement any parseable number passes. A format name
    /// (`national`, `E164`, `intl`, `RFC3966`) requires `value` to be written
    /// exactly in that format; `landline` or `mobile` requires the number to be
    /// of that kind. Requirement names are case-sensitive.
    pub fn validate(&self, value: &str, requirement: Option<&str>) -> Result<bool, RuleError> {
        let Some(phone_number) = self.check(value) else {
            return Ok(false);
        };
        let Some(requirement) = requirement.filter(|requirement| !requirement.is_empty()) else {
            return Ok(true);
        };

        Ok(match requirement.parse::<Requirement>()? {
            Requirement::Format(number_format) => value == phone_number.format(number_format),
            Requirement::Kind(kind) => phone_number.is(kind),
        })
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
