use std::cell::RefCell;
use std::rc::Rc;

use common::chart::{ChartConfig, ForecastPlot};
use common::{
    ChartSurface, DashboardError, DashboardView, Flow, ForecastRow, MetricsView, MonthResultView,
    UiState,
};
use yew::UseStateHandle;

use crate::charts::{self, ChartJsChart, PlotlyChart};

pub type PlotSurface = Rc<RefCell<ChartSurface<PlotlyChart>>>;
pub type CanvasSurface = Rc<RefCell<ChartSurface<ChartJsChart>>>;

/// The dashboard page as the controller sees it: component state handles
/// for the text elements, chart surfaces for the plots.
#[derive(Clone)]
pub struct PageView {
    pub forecast_control: UseStateHandle<UiState>,
    pub month_control: UseStateHandle<UiState>,
    pub metrics: UseStateHandle<Option<MetricsView>>,
    pub rows: UseStateHandle<Vec<ForecastRow>>,
    pub month_result: UseStateHandle<Option<MonthResultView>>,
    pub plot: PlotSurface,
    pub trend_chart: CanvasSurface,
    pub bar_chart: CanvasSurface,
}

impl DashboardView for PageView {
    fn set_control(&self, flow: Flow, state: UiState) {
        log::trace!("{:?} control -> {:?}", flow, state);
        match flow {
            Flow::Forecast => self.forecast_control.set(state),
            Flow::Month => self.month_control.set(state),
        }
    }

    fn show_metrics(&self, metrics: &MetricsView) {
        self.metrics.set(Some(metrics.clone()));
    }

    fn show_forecast_table(&self, rows: &[ForecastRow]) {
        self.rows.set(rows.to_vec());
    }

    fn draw_forecast_plot(&self, plot: &ForecastPlot) -> Result<(), DashboardError> {
        charts::draw_plot(&mut self.plot.borrow_mut(), plot)
    }

    fn show_month_result(&self, result: &MonthResultView) {
        self.month_result.set(Some(result.clone()));
    }

    fn draw_month_charts(&self, trend: &ChartConfig, bar: &ChartConfig) -> Result<(), DashboardError> {
        charts::draw_chart(&mut self.trend_chart.borrow_mut(), trend)?;
        charts::draw_chart(&mut self.bar_chart.borrow_mut(), bar)
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", e);
                }
            }
            None => log::error!("No window to alert: {}", message),
        }
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}
