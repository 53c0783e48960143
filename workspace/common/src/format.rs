//! Display formatting for prices, percentages and dates.
//!
//! Only absent or non-finite values render as [`PLACEHOLDER`]; a present zero
//! is a real price and renders as `₹0.00`.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Shown in place of a value the backend did not provide.
pub const PLACEHOLDER: &str = "—";

/// Direction of a percentage change. Zero counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// CSS class the dashboard styles changes with.
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Up => "change-up",
            Direction::Down => "change-down",
        }
    }
}

/// Folds `-0.0` into `0.0` so zero never prints with a minus sign.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(unsigned_zero)
}

/// `₹1234.50`, or the placeholder.
pub fn currency(value: Option<f64>) -> String {
    match present(value) {
        Some(v) => format!("{}{:.2}", CURRENCY_SYMBOL, v),
        None => PLACEHOLDER.to_string(),
    }
}

/// `+2.3%` / `-3.2%`. Non-negative values get an explicit plus sign.
pub fn signed_percent(value: f64) -> String {
    let value = unsigned_zero(value);
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, value)
}

/// `92.5%` with the number printed as-is, or the placeholder.
pub fn plain_percent(value: Option<f64>) -> String {
    match present(value) {
        Some(v) => format!("{}%", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Signed percentage with its direction, `None` when the value is absent.
pub fn change(value: Option<f64>) -> Option<(String, Direction)> {
    present(value).map(|v| (signed_percent(v), Direction::of(v)))
}

/// Calendar-date part of an ISO timestamp: `2024-01-01T00:00:00Z` -> `2024-01-01`.
pub fn display_date(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}
