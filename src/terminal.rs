//! Renders the dashboard flows as text.

use common::chart::{ChartConfig, ForecastPlot};
use common::{DashboardError, DashboardView, Flow, ForecastRow, MetricsView, MonthResultView, UiState};
use std::cell::RefCell;
use std::io::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::{error, info};

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Month")]
    date: String,
    #[tabled(rename = "Forecast Price")]
    price: String,
    #[tabled(rename = "Change")]
    change: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    label: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Predicted")]
    predicted: String,
}

/// Dashboard page printed to a writer, one section per rendered element.
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn print(&self, text: &str) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", text) {
            error!("Failed to write output: {}", e);
        }
    }
}

pub fn forecast_table(rows: &[ForecastRow]) -> String {
    let rows: Vec<TableRow> = rows
        .iter()
        .map(|row| TableRow {
            date: row.date.clone(),
            price: row.price.clone(),
            change: row.change.clone(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

fn history_table(chart: &ChartConfig) -> String {
    let value = |dataset: usize, index: usize| {
        chart
            .data
            .datasets
            .get(dataset)
            .and_then(|d| d.data.get(index).copied().flatten())
            .map(|v| format!("{:.2}", v))
            .unwrap_or_default()
    };
    let rows: Vec<HistoryRow> = chart
        .data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| HistoryRow {
            label: label.clone(),
            actual: value(0, i),
            predicted: value(1, i),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

impl<W: Write> DashboardView for TerminalView<W> {
    fn set_control(&self, flow: Flow, state: UiState) {
        if state.is_loading() {
            self.print(flow.label(state));
        }
    }

    fn show_metrics(&self, metrics: &MetricsView) {
        self.print(&format!("Current price:    {}", metrics.current_price));
        self.print(&format!("Average forecast: {}", metrics.avg_forecast));
        self.print(&format!("Trend:            {}", metrics.trend_text()));
    }

    fn show_forecast_table(&self, rows: &[ForecastRow]) {
        self.print(&forecast_table(rows));
    }

    fn draw_forecast_plot(&self, plot: &ForecastPlot) -> Result<(), DashboardError> {
        let traces = plot
            .traces_json()
            .map_err(|e| DashboardError::Render(e.to_string()))?;
        let points = |i: usize| traces.get(i).and_then(|t| t["x"].as_array()).map_or(0, |x| x.len());
        self.print(&format!(
            "Chart: {} historical and {} forecast points",
            points(0),
            points(1)
        ));
        Ok(())
    }

    fn show_month_result(&self, result: &MonthResultView) {
        self.print(&format!("Predicted price: {}", result.predicted_price));
        self.print(&format!("Accuracy:        {}", result.accuracy));
        self.print(&format!("MAE:             {}", result.mae));
        self.print(&format!("Confidence:      {}", result.confidence));
    }

    fn draw_month_charts(&self, trend: &ChartConfig, _bar: &ChartConfig) -> Result<(), DashboardError> {
        if !trend.data.labels.is_empty() {
            self.print(&history_table(trend));
        }
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.print(&format!("! {}", message));
    }

    fn reload(&self) {
        info!("Nothing to reload in a terminal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::chart;
    use common::payload::HistoryPoint;
    use common::view;
    use common::ForecastPoint;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_forecast_table_lists_every_row() {
        let rows = view::build_forecast_table(&[
            ForecastPoint {
                date: "2025-01-01T00:00:00Z".to_string(),
                forecast: Some(1010.0),
                change_pct: Some(1.0),
            },
            ForecastPoint {
                date: "2025-02-01T00:00:00Z".to_string(),
                forecast: Some(990.5),
                change_pct: Some(-1.9),
            },
        ]);

        let table = forecast_table(&rows);

        assert!(table.contains("Forecast Price"));
        assert!(table.contains("2025-01-01"));
        assert!(table.contains("₹1010.00"));
        assert!(table.contains("+1.0%"));
        assert!(table.contains("₹990.50"));
        assert!(table.contains("-1.9%"));
    }

    #[test]
    fn test_month_charts_print_history() {
        let history = vec![HistoryPoint {
            date: "2024-10-01".to_string(),
            actual: Some(1580.0),
            predicted: Some(1575.0),
        }];
        let view = TerminalView::new(Vec::new());

        view.draw_month_charts(&chart::trend_chart(&history), &chart::bar_chart(&history))
            .unwrap();

        let text = output(view);
        assert!(text.contains("2024-10-01"));
        assert!(text.contains("1580.00"));
        assert!(text.contains("1575.00"));
    }

    #[test]
    fn test_alert_and_loading_label() {
        let view = TerminalView::new(Vec::new());

        view.set_control(Flow::Forecast, UiState::Loading);
        view.set_control(Flow::Forecast, UiState::Idle);
        view.alert("Prediction failed: Server error: 500");

        assert_eq!(
            output(view),
            "Predicting…\n! Prediction failed: Server error: 500\n"
        );
    }
}
