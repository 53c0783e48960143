//! View models: what each dashboard element displays, computed from a payload.

use crate::format::{self, Direction, PLACEHOLDER};
use crate::payload::{ForecastMetrics, ForecastPoint, MonthPredictionResponse};

/// Signed trend percentage with its styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBadge {
    pub text: String,
    pub direction: Direction,
}

/// Contents of `currentPrice`, `avgForecast` and `trendPercent`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsView {
    pub current_price: String,
    pub avg_forecast: String,
    pub trend: Option<TrendBadge>,
}

impl MetricsView {
    pub fn trend_text(&self) -> &str {
        self.trend.as_ref().map_or(PLACEHOLDER, |t| t.text.as_str())
    }
}

pub fn render_metrics(
    metrics: &ForecastMetrics,
    current_price: Option<f64>,
    avg_forecast: Option<f64>,
) -> MetricsView {
    MetricsView {
        current_price: format::currency(current_price),
        avg_forecast: format::currency(avg_forecast),
        trend: format::change(metrics.trend_pct).map(|(text, direction)| TrendBadge { text, direction }),
    }
}

/// One row of `forecastTable`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub date: String,
    pub price: String,
    pub change: String,
    /// `None` when the backend sent no change for the month
    pub direction: Option<Direction>,
}

impl ForecastRow {
    pub fn change_class(&self) -> &'static str {
        self.direction.map_or("", |d| d.css_class())
    }
}

/// Rows for the whole table. Callers replace the table body with the result;
/// nothing from a previous forecast survives.
pub fn build_forecast_table(forecast: &[ForecastPoint]) -> Vec<ForecastRow> {
    forecast
        .iter()
        .map(|point| {
            let (change, direction) = match format::change(point.change_pct) {
                Some((text, direction)) => (text, Some(direction)),
                None => (PLACEHOLDER.to_string(), None),
            };
            ForecastRow {
                date: format::display_date(&point.date).to_string(),
                price: format::currency(point.forecast),
                change,
                direction,
            }
        })
        .collect()
}

/// Contents of the month flow's result section.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthResultView {
    pub predicted_price: String,
    pub accuracy: String,
    pub mae: String,
    pub confidence: String,
}

pub fn month_result(response: &MonthPredictionResponse) -> MonthResultView {
    MonthResultView {
        predicted_price: format::currency(response.predicted_price),
        accuracy: format::plain_percent(response.accuracy),
        mae: format::currency(response.mae),
        confidence: format::plain_percent(response.confidence),
    }
}
