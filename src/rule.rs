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

use std::{fmt, str::FromStr};

use crate::phonenumberutil::{
    NumberKind, PhoneNumberFormat, errors::RuleError, phonenumberutil::PhoneNumberUtil,
};

/// Name the rule is registered under in validation rule strings.
pub const RULE_NAME: &'static str = "zaphone";

/// What a value must satisfy beyond being a parseable number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Format(PhoneNumberFormat),
    Kind(NumberKind),
}

impl FromStr for Requirement {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(number_format) = s.parse::<PhoneNumberFormat>() {
            return Ok(Requirement::Format(number_format));
        }
        if let Ok(kind) = s.parse::<NumberKind>() {
            return Ok(Requirement::Kind(kind));
        }
        Err(RuleError::UnknownRequirement(s.to_owned()))
    }
}

/// Builder for `zaphone` validation rule strings, e.g. `zaphone:E164`.
///
/// The requirement is kept as written and only checked when the rule is
/// applied, so a misspelt requirement surfaces as [`RuleError`] then.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZaPhoneRule {
    requirement: Option<String>,
}

impl ZaPhoneRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    pub fn requirement(&self) -> Option<&str> {
        self.requirement.as_deref()
    }

    pub fn passes(&self, phone_util: &PhoneNumberUtil, value: &str) -> Result<bool, RuleError> {
        phone_util.validate(value, self.requirement())
    }
}

impl fmt::Display for ZaPhoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.requirement {
            Some(requirement) => write!(f, "{}:{}", RULE_NAME, requirement),
            None => f.write_str(RULE_NAME),
        }
    }
}
