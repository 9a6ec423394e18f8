/// Two-decimal rendering used for every displayed metric value.
///
/// An exact tie at the third decimal rounds away from zero, matching
/// JavaScript's `toFixed(2)`; `{:.2}` alone rounds it to even.
pub fn fixed2(value: f64) -> String {
    let magnitude = value.abs();
    // Ties are only representable when the fraction is an odd number of
    // eighths; scaling by 8 and 100 stays exact below 2^44.
    let eighths = magnitude * 8.0;
    let is_tie = magnitude < TIE_EXACT_LIMIT && eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{:.2}", value);
    }
    let cents = (magnitude * 100.0 + 0.5).floor() as u64;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

const TIE_EXACT_LIMIT: f64 = (1u64 << 44) as f64;

/// Score as the server sent it, with a `%` suffix and no rounding.
pub fn percent_label(value: f64) -> String {
    format!("{}%", value)
}

/// Replace the first underscore of a pattern key with a space.
pub fn humanize_key(key: &str) -> String {
    key.replacen('_', " ", 1)
}

/// `growth_potential` -> `Growth Potential`.
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
