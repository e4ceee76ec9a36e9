const PWM_TOKEN: &str = "{p}";

/// Puts a PWM duty value into a light-on command template.
///
/// Every `{p}` (any case) is replaced with the value. Without a token, a
/// bare `M355 S1` gets ` P<value>` appended unless it already carries a
/// ` P` argument. Anything else is returned untouched.
pub fn inject_pwm(template: &str, pwm: u8) -> String {
    let value = pwm.to_string();

    let lower = template.to_ascii_lowercase();
    if lower.contains(PWM_TOKEN) {
        return replace_ignore_ascii_case(template, &lower, PWM_TOKEN, &value);
    }

    let upper = template.to_ascii_uppercase();
    if upper.contains("M355") && upper.contains("S1") && !upper.contains(" P") {
        return format!("{template} P{value}");
    }

    template.to_string()
}

// `lower` is `haystack` lowercased; ASCII case mapping keeps byte offsets.
fn replace_ignore_ascii_case(haystack: &str, lower: &str, needle: &str, to: &str) -> String {
    let mut result = String::with_capacity(haystack.len());
    let mut last = 0;

    for (start, matched) in lower.match_indices(needle) {
        result.push_str(&haystack[last..start]);
        result.push_str(to);
        last = start + matched.len();
    }

    result.push_str(&haystack[last..]);
    result
}
