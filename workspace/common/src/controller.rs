//! The dashboard's two flows, driven against an abstract page.

use std::cell::Cell;

use tracing::{debug, error, info, instrument, warn};

use crate::chart::{self, ChartConfig, ForecastPlot};
use crate::error::DashboardError;
use crate::payload::{ForecastResponse, MonthPredictionResponse};
use crate::request::{self, BulkForecastQuery, CsvUpload, MonthQuery, PredictTransport};
use crate::state::{Flow, UiState};
use crate::view::{self, ForecastRow, MetricsView, MonthResultView};

/// The page the controller renders into.
///
/// Methods take `&self`: implementations sit on interior-mutable handles
/// (DOM nodes, component state) and are called across await points.
pub trait DashboardView {
    /// Applies the trigger control's state (disabled flag and label).
    fn set_control(&self, flow: Flow, state: UiState);

    /// `currentPrice`, `avgForecast`, `trendPercent`
    fn show_metrics(&self, metrics: &MetricsView);

    /// Replaces every row of `forecastTable`'s body.
    fn show_forecast_table(&self, rows: &[ForecastRow]);

    /// Redraws `chartArea`.
    fn draw_forecast_plot(&self, plot: &ForecastPlot) -> Result<(), DashboardError>;

    /// Reveals `resultSection` and fills its fields.
    fn show_month_result(&self, result: &MonthResultView);

    /// Redraws `trendChart` and `barChart`.
    fn draw_month_charts(&self, trend: &ChartConfig, bar: &ChartConfig) -> Result<(), DashboardError>;

    /// Blocking message to the user.
    fn alert(&self, message: &str);

    /// Reloads the whole page.
    fn reload(&self);
}

/// Owns the transport and the state of both flows.
pub struct DashboardController<T> {
    transport: T,
    forecast_state: Cell<UiState>,
    month_state: Cell<UiState>,
}

/// Holds a flow in `Loading`; dropping it returns the flow to `Idle` on
/// every exit path.
struct LoadingGuard<'a, V: DashboardView> {
    state: &'a Cell<UiState>,
    view: &'a V,
    flow: Flow,
}

impl<V: DashboardView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.state.set(UiState::Idle);
        self.view.set_control(self.flow, UiState::Idle);
        debug!("{:?} flow back to idle", self.flow);
    }
}

impl<T: PredictTransport> DashboardController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            forecast_state: Cell::new(UiState::Idle),
            month_state: Cell::new(UiState::Idle),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn state(&self, flow: Flow) -> UiState {
        self.cell(flow).get()
    }

    fn cell(&self, flow: Flow) -> &Cell<UiState> {
        match flow {
            Flow::Forecast => &self.forecast_state,
            Flow::Month => &self.month_state,
        }
    }

    fn begin<'a, V: DashboardView>(
        &'a self,
        flow: Flow,
        view: &'a V,
    ) -> Result<LoadingGuard<'a, V>, DashboardError> {
        let state = self.cell(flow);
        if state.get().is_loading() {
            warn!("{:?} flow triggered while a request is in flight, ignoring", flow);
            return Err(DashboardError::Busy);
        }
        state.set(UiState::Loading);
        view.set_control(flow, UiState::Loading);
        Ok(LoadingGuard { state, view, flow })
    }

    /// Flow A: fetch the twelve-month forecast and render metrics, table and
    /// the combined chart. Failures are alerted and returned.
    #[instrument(skip_all, fields(upload = upload.is_some()))]
    pub async fn run_forecast<V: DashboardView>(
        &self,
        view: &V,
        upload: Option<CsvUpload>,
    ) -> Result<ForecastResponse, DashboardError> {
        let _loading = self.begin(Flow::Forecast, view)?;

        let outcome = self.forecast_pipeline(view, upload).await;
        if let Err(err) = &outcome {
            report(view, err);
        }
        outcome
    }

    async fn forecast_pipeline<V: DashboardView>(
        &self,
        view: &V,
        upload: Option<CsvUpload>,
    ) -> Result<ForecastResponse, DashboardError> {
        let response = request::execute(&self.transport, &BulkForecastQuery { upload }).await?;
        info!(
            "Forecast received: {} history points, {} forecast points",
            response.history.len(),
            response.forecast.len()
        );

        view.show_metrics(&view::render_metrics(
            &response.metrics,
            response.current_price,
            response.avg_forecast,
        ));
        view.show_forecast_table(&view::build_forecast_table(&response.forecast));
        view.draw_forecast_plot(&chart::forecast_plot(&response.history, &response.forecast))?;

        Ok(response)
    }

    /// Flow B: validate the month, fetch its prediction, fill the result
    /// section and draw both charts. Failures are alerted and returned.
    #[instrument(skip(self, view))]
    pub async fn submit_month<V: DashboardView>(
        &self,
        view: &V,
        month: &str,
    ) -> Result<MonthPredictionResponse, DashboardError> {
        let query = match MonthQuery::new(month) {
            Ok(query) => query,
            Err(err) => {
                report(view, &err);
                return Err(err);
            }
        };

        let _loading = self.begin(Flow::Month, view)?;

        let outcome = self.month_pipeline(view, &query).await;
        if let Err(err) = &outcome {
            report(view, err);
        }
        outcome
    }

    async fn month_pipeline<V: DashboardView>(
        &self,
        view: &V,
        query: &MonthQuery,
    ) -> Result<MonthPredictionResponse, DashboardError> {
        let response = request::execute(&self.transport, query).await?;
        info!("Prediction for {} received", query.month);

        view.show_month_result(&view::month_result(&response));
        view.draw_month_charts(
            &chart::trend_chart(&response.history),
            &chart::bar_chart(&response.history),
        )?;

        Ok(response)
    }

    /// The refresh control: reload unconditionally.
    pub fn refresh<V: DashboardView>(&self, view: &V) {
        info!("Reloading dashboard");
        view.reload();
    }
}

fn report<V: DashboardView>(view: &V, err: &DashboardError) {
    match err {
        DashboardError::Validation(_) => warn!("Rejected input: {}", err),
        DashboardError::Busy => {}
        _ => error!("Prediction failed: {}", err),
    }
    if let Some(message) = err.alert_message() {
        view.alert(&message);
    }
}
