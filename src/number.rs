//! Numeral path: detection, parsing and place-value rendering.
//!
//! A numeric token is decomposed into triads of decimal digits (ones, tens,
//! hundreds) and read from the most significant triad down, with the
//! magnitude words for thousand and million separating the groups. Values
//! of one billion and above fall outside the three supported triads and
//! produce undefined output; likewise a digit or magnitude missing from the
//! `numbers` table renders as empty text. Both are inherited limitations of
//! the rule format, not guarded against here.

use crate::rules::RuleSet;

/// Spoken word for the decimal comma between the whole and fractional parts.
const COMMA_WORD: &str = "komo";

/// Decide whether `token` takes the numeral path.
///
/// A token is numeric when it parses as a decimal number once every `,`
/// and `.` is removed. This is decided once, before dispatch; a token that
/// fails here is transliterated as an ordinary word instead.
pub fn is_number(token: &str) -> bool {
    let bare: String = token.chars().filter(|c| *c != ',' && *c != '.').collect();
    bare.parse::<f64>().is_ok()
}

/// Split a numeric token into its whole and fractional parts.
///
/// `.` groups thousands and is discarded; `,` separates the integer part
/// from an optional fractional part, which is read as a literal integer
/// (`"7,05"` yields fraction 5). A token with more than one `,` yields
/// `(0, 0)`, which renders as nothing and drops the token from the output.
pub fn parse_number(token: &str) -> (i64, i64) {
    let ungrouped: String = token.chars().filter(|c| *c != '.').collect();
    let parts: Vec<&str> = ungrouped.split(',').collect();

    match parts.as_slice() {
        [whole] => (whole.parse().unwrap_or(0), 0),
        [whole, fraction] => (whole.parse().unwrap_or(0), fraction.parse().unwrap_or(0)),
        _ => (0, 0),
    }
}

/// Render a parsed numeral as words.
///
/// The fractional part is appended as `", komo <words>"` only when it is
/// nonzero and below 100; a fraction of exactly 0 or of three or more
/// digits is dropped and the whole part returned unchanged.
pub fn transcribe_number(rules: &RuleSet, whole: i64, fraction: i64) -> String {
    let result = transcribe_part(rules, whole);

    if fraction != 0 && fraction < 100 {
        return format!(
            "{}, {} {}",
            result,
            COMMA_WORD,
            transcribe_part(rules, fraction)
        );
    }

    result
}

fn transcribe_part(rules: &RuleSet, number: i64) -> String {
    let digit = |place: i64| (number / place) % 10;

    // Renders one triad. "one" is spoken alone only in the final triad;
    // "one thousand" and "one million" carry the magnitude word by itself.
    let triad = |ones: i64, tens: i64, hundreds: i64, include_one: bool| -> String {
        let mut result = String::new();

        if hundreds > 0 {
            if hundreds == 1 {
                result.push_str(&format!(" {}", rules.number_word(100)));
            } else {
                result.push_str(&format!(
                    " {} {}",
                    rules.number_word(hundreds),
                    rules.number_word(100)
                ));
            }
        }

        if tens > 0 {
            if tens == 1 {
                result.push_str(&format!(" {}", rules.number_word(10)));
            } else {
                result.push_str(&format!(
                    " {} {}",
                    rules.number_word(tens),
                    rules.number_word(10)
                ));
            }
        }

        if ones == 1 {
            if include_one {
                result.push_str(&format!(" {}", rules.number_word(1)));
            }
        } else if ones != 0 {
            result.push_str(&format!(" {}", rules.number_word(ones)));
        }

        result.trim().to_string()
    };

    let units = triad(digit(1), digit(10), digit(100), true);
    let thousands = triad(digit(1_000), digit(10_000), digit(100_000), false);
    let millions = triad(digit(1_000_000), digit(10_000_000), digit(100_000_000), false);

    let has_units = digit(1) != 0 || digit(10) != 0 || digit(100) != 0;
    let has_thousands = digit(1_000) != 0 || digit(10_000) != 0 || digit(100_000) != 0;
    let has_millions = digit(1_000_000) != 0 || digit(10_000_000) != 0 || digit(100_000_000) != 0;

    let mut result = String::new();

    if has_millions {
        result.push_str(&format!("{} {},", millions, rules.number_word(1_000_000)));
    }

    if has_thousands {
        result.push_str(&format!(" {} {},", thousands, rules.number_word(1_000)));
    }

    if has_units {
        result.push_str(&format!(" {}", units));
    }

    result.trim().trim_end_matches(',').to_string()
}
