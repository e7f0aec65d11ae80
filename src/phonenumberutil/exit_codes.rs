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

use std::{
    collections::BTreeMap,
    fs,
    io::{self, BufRead},
    path::Path,
    str::FromStr,
};

use log::debug;

use super::{
    errors::ExitCodesError, helper_constants::BUNDLED_EXIT_CODES,
    helper_functions::parse_exit_codes,
};

/// Maps ISO 3166-1 alpha-3 country codes to the international exit code
/// dialled from that country, e.g. `USA` to `011`.
///
/// Country codes are case-sensitive. The table is read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCodeTable {
    exit_codes: BTreeMap<String, String>,
}

impl ExitCodeTable {
    /// Parses the table shipped with the crate.
    pub fn bundled() -> Result<Self, ExitCodesError> {
        BUNDLED_EXIT_CODES.parse()
    }

    /// Reads an ini-style table from `path`.
    ///
    /// Fails with [`ExitCodesError::InvalidPath`] if `path` is not a
    /// readable regular file. Bytes that are not valid UTF-8 are replaced
    /// rather than rejected.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExitCodesError> {
        let path = path.as_ref();
        let invalid_path = |source: io::Error| ExitCodesError::InvalidPath {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(invalid_path)?;
        if !metadata.is_file() {
            return Err(invalid_path(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let bytes = fs::read(path).map_err(invalid_path)?;

        let table: Self = String::from_utf8_lossy(&bytes).parse()?;
        debug!("Loaded {} exit codes from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ExitCodesError> {
        let mut exit_codes = BTreeMap::new();
        parse_exit_codes(reader, &mut exit_codes)?;
        Ok(Self { exit_codes })
    }

    /// Returns the exit code dialled from `country_code`.
    pub fn get(&self, country_code: &str) -> Option<&str> {
        self.exit_codes.get(country_code).map(String::as_str)
    }

    pub fn contains(&self, country_code: &str) -> bool {
        self.exit_codes.contains_key(country_code)
    }

    pub fn len(&self) -> usize {
        self.exit_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exit_codes.is_empty()
    }

    /// Iterates over `(country code, exit code)` pairs ordered by country code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exit_codes
            .iter()
            .map(|(country, exit_code)| (country.as_str(), exit_code.as_str()))
    }
}

impl FromStr for ExitCodeTable {
    type Err = ExitCodesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExitCodeTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            exit_codes: iter
                .into_iter()
                .map(|(country, exit_code)| (country.into(), exit_code.into()))
                .collect(),
        }
    }
}
