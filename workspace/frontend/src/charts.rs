//! Plotly and Chart.js bindings behind [`ChartSurface`].

use common::chart::{ChartConfig, ForecastPlot};
use common::{ChartInstance, ChartSurface, DashboardError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(item: &JsValue, config: JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &ChartJs);
}

/// Plot living in a Plotly div.
pub struct PlotlyChart {
    div_id: String,
}

impl ChartInstance for PlotlyChart {
    fn dispose(self) {
        if let Err(e) = purge(&self.div_id) {
            log::warn!("Failed to purge plot #{}: {:?}", self.div_id, e);
        }
    }
}

/// Chart.js instance bound to a canvas.
pub struct ChartJsChart {
    chart: ChartJs,
}

impl ChartInstance for ChartJsChart {
    fn dispose(self) {
        self.chart.destroy();
    }
}

fn render_error(context: &str, detail: impl std::fmt::Debug) -> DashboardError {
    let error_msg = format!("{}: {:?}", context, detail);
    log::error!("{}", error_msg);
    DashboardError::Render(error_msg)
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, DashboardError> {
    let json = serde_json::to_string(value).map_err(|e| render_error("Failed to serialize chart", e))?;
    js_sys::JSON::parse(&json).map_err(|e| render_error("Failed to parse chart JSON", e))
}

pub fn draw_plot(surface: &mut ChartSurface<PlotlyChart>, plot: &ForecastPlot) -> Result<(), DashboardError> {
    let data = to_js(&plot.traces_json().map_err(|e| render_error("Failed to serialize traces", e))?)?;
    let layout = to_js(&plot.layout)?;
    let config = to_js(&plot.config)?;

    surface.replace(|div_id| {
        log::trace!("Plotly.newPlot on #{}", div_id);
        new_plot(div_id, data, layout, config).map_err(|e| render_error("Plotly refused the plot", e))?;
        Ok(PlotlyChart {
            div_id: div_id.to_string(),
        })
    })
}

pub fn draw_chart(surface: &mut ChartSurface<ChartJsChart>, config: &ChartConfig) -> Result<(), DashboardError> {
    let config = to_js(config)?;

    surface.replace(|canvas_id| {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| render_error("Missing chart surface", canvas_id))?;
        log::trace!("new Chart on #{}", canvas_id);
        let chart = ChartJs::new(&canvas.into(), config).map_err(|e| render_error("Chart.js refused the chart", e))?;
        Ok(ChartJsChart { chart })
    })
}
