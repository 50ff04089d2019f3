//! Conversion between display text and `f64`.
//!
//! Every string the calculator shows is produced by [`format_number`], and
//! every string it reads back is consumed by [`parse_number`], so the display
//! and the history always agree on how a value looks.

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest round-trip text for `value`.
///
/// Integers print without a fraction (`8`), floating-point artifacts are kept
/// (`0.30000000000000004`), very large or very small magnitudes use an
/// exponent with an explicit sign (`1e+21`, `1.5e-7`), and the non-finite
/// values print as `Infinity`, `-Infinity` and `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        // Negative zero prints as plain zero
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        return format!("{}", value);
    }
    let exponent = format!("{:e}", value);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exponent,
    }
}

/// Reads the longest leading number in `text`.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent, or a signed `Infinity`. Anything after the number is
/// ignored (`"12abc"` reads as 12). Text that does not start with a number
/// reads as NaN.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut power_start = end + 1;
        if matches!(bytes.get(power_start), Some(b'+' | b'-')) {
            power_start += 1;
        }
        let power_digits = count_digits(&bytes[power_start.min(bytes.len())..]);
        if power_digits > 0 {
            end = power_start + power_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
