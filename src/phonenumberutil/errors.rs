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

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while building an [`ExitCodeTable`](super::ExitCodeTable).
#[derive(Debug, Error)]
pub enum ExitCodesError {
    #[error("Unable to read the INI file at {}: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error occurred: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line_num} is not a `key = value` pair: {line:?}")]
    MalformedLine { line_num: usize, line: String },
}

/// Failures of the dial-in formatter.
#[derive(Debug, Error)]
pub enum DialInError {
    /// No country was given to dial from.
    #[error(
        "To format a phone number for international dialling, you need to set a \
        valid country code from which the call would be made. Ex: USA or AUS"
    )]
    InvalidArgument,
    /// The country is not present in the exit code table.
    #[error("The country code specified ({0}) is not defined")]
    InvalidOption(String),
    #[error("{0}")]
    ExitCodes(#[from] ExitCodesError),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error(
        "zaphone rule: the requirement '{0}' does not exist. \
        Note that requirements are case-sensitive"
    )]
    UnknownRequirement(String),
}
