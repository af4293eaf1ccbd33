//! Currency presentation helpers.

/// Renders an amount as US dollars: two decimals, comma thousands grouping,
/// sign ahead of the symbol for negatives.
pub fn format_usd(amount: f64) -> String {
    let body = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let grouped = group_digits(int_part);
    if amount < 0.0 {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
