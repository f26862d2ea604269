use chrono::NaiveDate;

/// Lightweight currency/date formatting backed by the active configuration.
#[derive(Debug, Clone)]
pub struct CliFormatters {
    currency_symbol: String,
}

impl CliFormatters {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Renders an amount as `₹25,000.00`, with a leading minus for negatives.
    pub fn amount(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        format!(
            "{sign}{symbol}{grouped}",
            symbol = self.currency_symbol,
            grouped = group_thousands(value.abs())
        )
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Inserts thousands separators into a non-negative amount with two decimals.
fn group_thousands(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (int_part, dec_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (offset, ch) in digits.iter().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    format!("{grouped}.{dec_part}")
}
