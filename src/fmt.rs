/// Format a float as a dollar amount with thousands separators: $1,234.56
/// Imported amounts can be NaN (unparsable statement fields), and NaN
/// poisons every bucket it touches; show that honestly instead of $NaN.00.
pub fn money(val: f64) -> String {
    if val.is_nan() {
        return "(not a number)".to_string();
    }
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Confidence as a percentage: 0.9 -> "90%".
pub fn confidence(val: f64) -> String {
    format!("{:.0}%", val * 100.0)
}
