//! Conversions between operand text and `f64`.
//!
//! Operands live in the engine as text, exactly as the user sees them. These
//! helpers are the only place text becomes a number and back again, so the
//! display rules (no trailing `.0`, exponent form for extreme magnitudes,
//! `-0` shown as `0`) are decided here.

/// Decimal places results are rounded to unless configured otherwise.
pub const DEFAULT_DECIMAL_PLACES: u32 = 10;

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. A prefix is an optional sign followed by
/// either `Infinity` or digits with an optional fraction and exponent.
/// Trailing text after the prefix is ignored, so an expression label such as
/// `"5 + 3 ="` parses as `5`. Returns `None` when no numeric prefix exists,
/// which is how error sentinels and empty text are recognised as
/// not-a-number.
///
/// # Example
///
/// ```rust
/// use calcflow::core::parse_number;
///
/// assert_eq!(parse_number("12.5"), Some(12.5));
/// assert_eq!(parse_number("0."), Some(0.0));
/// assert_eq!(parse_number("5 + 3 ="), Some(5.0));
/// assert_eq!(parse_number("√(4)"), None);
/// assert_eq!(parse_number("Cannot divide by zero"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut cursor = frac_start;
        while cursor < len && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        mantissa_digits += cursor - frac_start;
        end = cursor;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < len && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < len && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Render a number the way the display shows it.
///
/// # Example
///
/// ```rust
/// use calcflow::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.3), "0.3");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    format!("{value}")
}

/// Round `value` to `decimal_places`, halves going toward positive infinity.
///
/// This suppresses binary floating-point noise before a result is stored:
/// `0.1 + 0.2` becomes exactly `0.3`. Values too large to scale are returned
/// unchanged since they carry no fractional digits at that precision.
///
/// # Example
///
/// ```rust
/// use calcflow::core::round_result;
///
/// assert_eq!(round_result(0.1 + 0.2, 10), 0.3);
/// assert_eq!(round_result(2.5, 0), 3.0);
/// assert_eq!(round_result(-2.5, 0), -2.0);
/// ```
pub fn round_result(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / factor
}
