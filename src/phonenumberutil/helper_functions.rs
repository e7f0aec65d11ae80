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

use std::{collections::BTreeMap, io::BufRead};

use log::trace;

use super::errors::ExitCodesError;
use crate::string_util::unquote;

/// Reads `key = value` lines into `exit_codes`.
///
/// Blank lines, `;`/`#` comments and `[section]` headers are skipped; the
/// entries of all sections end up in the same map. Unquoted values may carry
/// a trailing `;` comment.
pub(super) fn parse_exit_codes<R: BufRead>(
    mut reader: R,
    exit_codes: &mut BTreeMap<String, String>,
) -> Result<(), ExitCodesError> {
    let mut line_buffer = String::new();
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            trace!("Skipping section header {}", line);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ExitCodesError::MalformedLine {
                line_num: line_number,
                line: line.to_owned(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ExitCodesError::MalformedLine {
                line_num: line_number,
                line: line.to_owned(),
            });
        }

        exit_codes.insert(key.to_owned(), parse_value(value).to_owned());
    }

    Ok(())
}

fn parse_value(value: &str) -> &str {
    let value = value.trim();
    if value.starts_with('"') || value.starts_with('\'') {
        return unquote(value);
    }
    match value.split_once(';') {
        Some((value, _comment)) => value.trim_end(),
        None => value,
    }
}
