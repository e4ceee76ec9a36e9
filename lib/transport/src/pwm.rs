use serde_json::Value;

pub const PWM_MAX: u8 = 255;

/// Coerces loosely typed request input into a PWM duty value.
///
/// Missing, empty and non-numeric input resolve to `None` instead of an
/// error. Numbers outside `0..=255` are clamped, fractions truncate.
pub fn parse_pwm(value: Option<&Value>) -> Option<u8> {
    match value? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n as i64))
            .map(clamp),
        Value::String(s) => parse_str(s),
        _ => None,
    }
}

fn clamp(n: i64) -> u8 {
    n.clamp(0, PWM_MAX as i64) as u8
}

fn parse_str(s: &str) -> Option<u8> {
    let s = s.trim();

    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if negative {
        return Some(0);
    }

    // too many digits for i64 is still a number, just a large one
    Some(digits.parse::<i64>().map(clamp).unwrap_or(PWM_MAX))
}
