//! Chart specifications.
//!
//! The bulk forecast is drawn with Plotly (traces built with the `plotly`
//! crate), the month flow with Chart.js (config mirrored by the serde structs
//! below). Both are plain data here; the frontend hands them to the engines.

use plotly::common::{DashType, Line, Marker, Mode, Orientation, Title};
use plotly::layout::{Axis, Legend, Margin};
use plotly::{Configuration, Layout, Scatter};
use serde::Serialize;
use serde_json::{Value, json};

use crate::payload::{ForecastPoint, HistoryPoint};

pub const HISTORY_COLOR: &str = "#0b6b3a";
pub const FORECAST_COLOR: &str = "#00a86b";
pub const ACTUAL_COLOR: &str = "#28a745";

/// Line series of the combined history/forecast chart (`chartArea`).
pub type PriceTrace = Box<Scatter<String, Option<f64>>>;

/// Historical actuals (solid) overlaid with the forecast (dotted, marked).
#[derive(Debug, Clone)]
pub struct ForecastPlot {
    pub historical: PriceTrace,
    pub forecast: PriceTrace,
    pub layout: Layout,
    pub config: Configuration,
}

impl ForecastPlot {
    /// Trace array as Plotly expects it in `newPlot`.
    pub fn traces_json(&self) -> Result<Value, serde_json::Error> {
        Ok(Value::Array(vec![
            serde_json::to_value(&self.historical)?,
            serde_json::to_value(&self.forecast)?,
        ]))
    }

    pub fn layout_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.layout)
    }

    pub fn config_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.config)
    }
}

pub fn forecast_plot(history: &[HistoryPoint], forecast: &[ForecastPoint]) -> ForecastPlot {
    let historical = Scatter::new(
        history.iter().map(|p| p.date.clone()).collect(),
        history.iter().map(|p| p.actual).collect(),
    )
    .mode(Mode::Lines)
    .name("Historical")
    .line(Line::new().color(HISTORY_COLOR));

    let forecast = Scatter::new(
        forecast.iter().map(|p| p.date.clone()).collect(),
        forecast.iter().map(|p| p.forecast).collect(),
    )
    .mode(Mode::LinesMarkers)
    .name("Forecast")
    .line(Line::new().color(FORECAST_COLOR).dash(DashType::Dot))
    .marker(Marker::new().size(6));

    let layout = Layout::new()
        .margin(Margin::new().top(30).right(20).left(60).bottom(50))
        .x_axis(Axis::new().title(Title::with_text("Date")))
        .y_axis(Axis::new().title(Title::with_text("Price (₹)")))
        .legend(
            Legend::new()
                .orientation(Orientation::Horizontal)
                .x(0.02)
                .y(1.08),
        );

    ForecastPlot {
        historical,
        forecast,
        layout,
        config: Configuration::new().responsive(true),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Chart.js configuration object (`new Chart(canvas, config)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    fn new(label: &str, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color: None,
            border_dash: None,
            background_color: None,
            tension: None,
            fill: None,
        }
    }

    fn smooth_line(label: &str, data: Vec<Option<f64>>, color: &str) -> Self {
        Self {
            border_color: Some(color.to_string()),
            tension: Some(0.4),
            fill: Some(false),
            ..Self::new(label, data)
        }
    }
}

fn labels(history: &[HistoryPoint]) -> Vec<String> {
    history.iter().map(|p| p.date.clone()).collect()
}

fn predicted(history: &[HistoryPoint]) -> Vec<Option<f64>> {
    history.iter().map(|p| p.predicted).collect()
}

/// Actual vs. predicted line chart for `trendChart`.
pub fn trend_chart(history: &[HistoryPoint]) -> ChartConfig {
    let actual = Dataset::smooth_line(
        "Actual Price",
        history.iter().map(|p| p.actual).collect(),
        ACTUAL_COLOR,
    );
    let predicted = Dataset {
        border_dash: Some(vec![5, 5]),
        ..Dataset::smooth_line("Predicted Price", predicted(history), FORECAST_COLOR)
    };

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(history),
            datasets: vec![actual, predicted],
        },
        options: json!({
            "responsive": true,
            "plugins": { "legend": { "position": "bottom" } }
        }),
    }
}

/// Predicted values as bars for `barChart`.
pub fn bar_chart(history: &[HistoryPoint]) -> ChartConfig {
    let bars = Dataset {
        background_color: Some(FORECAST_COLOR.to_string()),
        ..Dataset::new("Forecasted Price (₹)", predicted(history))
    };

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(history),
            datasets: vec![bars],
        },
        options: json!({
            "responsive": true,
            "scales": { "y": { "beginAtZero": true } }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<HistoryPoint> {
        vec![
            HistoryPoint {
                date: "2024-10-01".to_string(),
                actual: Some(1580.0),
                predicted: Some(1575.0),
            },
            HistoryPoint {
                date: "2024-11-01".to_string(),
                actual: Some(1590.0),
                predicted: Some(1601.5),
            },
            HistoryPoint {
                date: "2024-12-01".to_string(),
                actual: Some(1602.0),
                predicted: None,
            },
        ]
    }

    #[test]
    fn test_month_charts_share_labels() {
        let history = history();
        let trend = trend_chart(&history);
        let bar = bar_chart(&history);

        assert_eq!(trend.kind, ChartKind::Line);
        assert_eq!(trend.data.datasets.len(), 2);
        assert_eq!(trend.data.datasets[0].label, "Actual Price");
        assert_eq!(trend.data.datasets[1].label, "Predicted Price");

        assert_eq!(bar.kind, ChartKind::Bar);
        assert_eq!(bar.data.datasets.len(), 1);
        assert_eq!(bar.data.datasets[0].data, trend.data.datasets[1].data);

        assert_eq!(trend.data.labels, bar.data.labels);
        assert_eq!(trend.data.labels.len(), 3);
    }

    #[test]
    fn test_trend_chart_serializes_for_chartjs() {
        let value = serde_json::to_value(trend_chart(&history())).unwrap();

        assert_eq!(value["type"], "line");
        let predicted = &value["data"]["datasets"][1];
        assert_eq!(predicted["borderDash"], json!([5, 5]));
        assert_eq!(predicted["borderColor"], FORECAST_COLOR);
        assert_eq!(predicted["tension"], 0.4);
        assert_eq!(predicted["fill"], false);
        assert_eq!(predicted["data"][2], Value::Null);
        assert!(value["data"]["datasets"][0].get("borderDash").is_none());
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
    }

    #[test]
    fn test_bar_chart_serializes_for_chartjs() {
        let value = serde_json::to_value(bar_chart(&history())).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["datasets"][0]["label"], "Forecasted Price (₹)");
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], FORECAST_COLOR);
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn test_forecast_plot_traces() {
        let forecast = vec![ForecastPoint {
            date: "2025-01-01".to_string(),
            forecast: Some(1612.0),
            change_pct: Some(0.6),
        }];

        let plot = forecast_plot(&history(), &forecast);
        let traces = plot.traces_json().unwrap();

        assert_eq!(traces.as_array().unwrap().len(), 2);
        assert_eq!(traces[0]["name"], "Historical");
        assert_eq!(traces[0]["mode"], "lines");
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 3);
        assert_eq!(traces[0]["line"]["color"], HISTORY_COLOR);
        assert_eq!(traces[1]["name"], "Forecast");
        assert_eq!(traces[1]["mode"], "lines+markers");
        assert_eq!(traces[1]["line"]["dash"], "dot");
        assert_eq!(traces[1]["marker"]["size"], 6);
        assert_eq!(traces[1]["y"][0], 1612.0);
    }

    #[test]
    fn test_forecast_plot_layout() {
        let plot = forecast_plot(&[], &[]);
        let layout = plot.layout_json().unwrap();

        assert_eq!(layout["margin"]["t"], 30);
        assert_eq!(layout["margin"]["l"], 60);
        assert_eq!(layout["legend"]["orientation"], "h");
        assert_eq!(plot.config_json().unwrap()["responsive"], true);
    }
}
