//! Locale-aware number formatting for prices, market caps, and changes.
//!
//! EUR amounts follow Finnish conventions (`€ 1 234,5`), USD amounts follow US
//! conventions (`$ 1,234.5`). The currency sign is always placed before the
//! number, separated by a space.

use crate::domain::Currency;

/// Highest number of fraction digits shown for prices below one unit.
const SUB_UNIT_PRICE_DIGITS: usize = 6;

/// Formats the numeric columns of the dashboard.
pub trait NumberFormat {
    /// Price with currency sign, at most 2 fraction digits (more below one unit).
    fn price(&self, value: f64) -> String;

    /// Market cap with currency sign and no fraction digits.
    fn market_cap(&self, value: f64) -> String;

    /// 24h change with two decimals and a percent sign, or `n/a` when absent.
    ///
    /// With `explicit_plus`, non-negative values get a leading `+`.
    fn change(&self, value: Option<f64>, explicit_plus: bool) -> String {
        match value {
            Some(v) if explicit_plus && v >= 0.0 => format!("+{v:.2}%"),
            Some(v) => format!("{v:.2}%"),
            None => "n/a".to_string(),
        }
    }
}

/// Grouping and decimal conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub locale: &'static str,
    pub symbol: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl LocaleFormat {
    /// `fi-FI` for EUR, `en-US` for USD.
    #[must_use]
    pub const fn for_currency(currency: Currency) -> Self {
        match currency {
            Currency::Eur => Self {
                locale: "fi-FI",
                symbol: "€",
                group_separator: ' ',
                decimal_separator: ',',
            },
            Currency::Usd => Self {
                locale: "en-US",
                symbol: "$",
                group_separator: ',',
                decimal_separator: '.',
            },
        }
    }

    /// Formats `value` with at most `max_fraction` digits, trailing zeros trimmed.
    #[must_use]
    pub fn number(&self, value: f64, max_fraction: usize) -> String {
        if !value.is_finite() {
            return "n/a".to_string();
        }

        let fixed = format!("{:.*}", max_fraction, value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 2);
        if value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty()) {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }
        grouped
    }

    fn with_symbol(&self, number: &str) -> String {
        format!("{} {number}", self.symbol)
    }
}

impl NumberFormat for LocaleFormat {
    fn price(&self, value: f64) -> String {
        let digits = if value.abs() < 1.0 { SUB_UNIT_PRICE_DIGITS } else { 2 };
        self.with_symbol(&self.number(value, digits))
    }

    fn market_cap(&self, value: f64) -> String {
        self.with_symbol(&self.number(value, 0))
    }
}
