// Tally - Benchmark Result Aggregation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Number and label formatting shared by the Markdown renderers.

/// Rounds to the nearest integer (ties to even) without separators.
pub fn format_integer(value: f64) -> String {
    format!("{:.0}", value)
}

/// Rounds to the nearest integer and groups thousands with commas.
///
/// ```
/// use tally_report::format::format_thousands;
///
/// assert_eq!(format_thousands(1234567.4), "1,234,567");
/// assert_eq!(format_thousands(999.0), "999");
/// ```
pub fn format_thousands(value: f64) -> String {
    let rounded = format_integer(value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalizes every alphabetic run (`nbody_sym` -> `Nbody_Sym`).
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(123456.0), "123,456");
        assert_eq!(format_thousands(-1234.0), "-1,234");
        assert_eq!(format_thousands(1_000_000_000.0), "1,000,000,000");
    }

    #[test]
    fn test_format_integer_rounds() {
        assert_eq!(format_integer(149.6), "150");
        assert_eq!(format_integer(141.42), "141");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("tenge"), "Tenge");
        assert_eq!(capitalize("GO"), "Go");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("fibonacci"), "Fibonacci");
        assert_eq!(title_case("nbody_sym"), "Nbody_Sym");
    }
}
