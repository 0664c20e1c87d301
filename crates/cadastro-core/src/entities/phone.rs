//! Phone value object
//!
//! Brazilian phone numbers: 10 digits for landlines, 11 for mobiles (third
//! digit must be `9`). The first two digits are the DDD area code, valid in
//! the range 11-99. Input may carry the `55` country code; the canonical
//! value never does, but the parsed value remembers whether the input did so
//! the display form can re-add the `+55 ` prefix.

use crate::error::{Error, Result};
use std::fmt;

/// Digit count of a landline number (DDD + 8 digits)
pub const LANDLINE_LEN: usize = 10;

/// Digit count of a mobile number (DDD + 9 digits)
pub const MOBILE_LEN: usize = 11;

/// A validated Brazilian phone number, held in canonical form
/// (10 or 11 digits, no country code, no punctuation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
    had_country_code: bool,
}

impl Phone {
    /// Parse and validate a phone number from raw user input.
    ///
    /// Strips every non-digit character; a leading `55` is treated as the
    /// country code (and removed) only when the cleaned string is longer
    /// than 11 digits. Validates length (10 or 11), area code range (11-99)
    /// and the mobile `9` marker on 11-digit numbers.
    pub fn parse(raw: &str) -> Result<Phone> {
        let cleaned: String = raw.chars().filter(char::is_ascii_digit).collect();

        let (value, had_country_code) = if cleaned.starts_with("55") && cleaned.len() > MOBILE_LEN
        {
            (cleaned[2..].to_string(), true)
        } else {
            (cleaned, false)
        };

        if value.len() != LANDLINE_LEN && value.len() != MOBILE_LEN {
            return Err(Error::InvalidPhone(format!(
                "expected {} or {} digits, got {}",
                LANDLINE_LEN,
                MOBILE_LEN,
                value.len()
            )));
        }

        let ddd: u32 = value[..2].parse().map_err(|_| {
            Error::InvalidPhone("area code is not numeric".to_string())
        })?;
        if !(11..=99).contains(&ddd) {
            return Err(Error::InvalidPhone(format!("invalid area code {ddd:02}")));
        }

        if value.len() == MOBILE_LEN && value.as_bytes()[2] != b'9' {
            return Err(Error::InvalidPhone(
                "mobile number must start with 9 after the area code".to_string(),
            ));
        }

        Ok(Phone {
            value,
            had_country_code,
        })
    }

    /// Canonical value: 10 or 11 digits, no country code, no punctuation.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True if this number has 11 digits (mobile with the leading 9).
    pub fn is_mobile(&self) -> bool {
        self.value.len() == MOBILE_LEN
    }

    /// True if the original input carried the `55` country code.
    pub fn had_country_code(&self) -> bool {
        self.had_country_code
    }

    /// Display form: mobile `(DD) DDDDD-DDDD`, landline `(DD) DDDD-DDDD`,
    /// prefixed with `+55 ` when the input carried the country code.
    pub fn formatted(&self) -> String {
        let local = if self.is_mobile() {
            format!(
                "({}) {}-{}",
                &self.value[0..2],
                &self.value[2..7],
                &self.value[7..11]
            )
        } else {
            format!(
                "({}) {}-{}",
                &self.value[0..2],
                &self.value[2..6],
                &self.value[6..10]
            )
        };

        if self.had_country_code {
            format!("+55 {local}")
        } else {
            local
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Valid mobiles (DDD 11-99, leading 9) always parse and round-trip.
        #[test]
        fn proptest_valid_mobiles_accepted(
            ddd in 11u32..=99,
            suffix in 0u32..=99_999_999,
        ) {
            let number = format!("{ddd}9{suffix:08}");
            let phone = Phone::parse(&number);
            prop_assert!(phone.is_ok(), "should accept {}", number);
            let phone = phone.unwrap();
            prop_assert_eq!(phone.value(), number.as_str());
            prop_assert!(phone.is_mobile());
        }

        /// Valid landlines always parse and format with the 4-4 split.
        #[test]
        fn proptest_valid_landlines_accepted(
            ddd in 11u32..=99,
            number in 0u32..=99_999_999,
        ) {
            let raw = format!("{ddd}{number:08}");
            let phone = Phone::parse(&raw);
            prop_assert!(phone.is_ok(), "should accept {}", raw);
            let formatted = phone.unwrap().formatted();
            prop_assert_eq!(&formatted[..1], "(");
            prop_assert_eq!(&formatted[3..5], ") ");
            prop_assert_eq!(&formatted[9..10], "-");
        }

        /// The country-code prefix never survives into the canonical value.
        #[test]
        fn proptest_country_code_stripped(
            ddd in 11u32..=99,
            suffix in 0u32..=99_999_999,
        ) {
            let raw = format!("55{ddd}9{suffix:08}");
            let phone = Phone::parse(&raw).unwrap();
            prop_assert_eq!(phone.value().len(), MOBILE_LEN);
            prop_assert!(phone.had_country_code());
            prop_assert!(phone.formatted().starts_with("+55 ("));
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn proptest_parse_never_panics(s in "\\PC{0,64}") {
            let _ = Phone::parse(&s);
        }
    }
}
