use common::{Flow, ForecastRow, MetricsView, UiState};
use yew::prelude::*;

use super::chart::ForecastChart;
use super::stats::ForecastStats;
use super::table::ForecastTable;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: UiState,
    pub metrics: Option<MetricsView>,
    pub rows: Vec<ForecastRow>,
    pub csv_input: NodeRef,
    pub on_predict: Callback<MouseEvent>,
}

#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &Props) -> Html {
    html! {
        <section class="mb-8">
            <div class="flex flex-wrap justify-between items-center gap-4 mb-6">
                <input
                    type="file"
                    id="csvFile"
                    accept=".csv"
                    class="file-input file-input-bordered"
                    ref={props.csv_input.clone()}
                />
                <button
                    id="predictBtn"
                    class="btn btn-primary"
                    disabled={!props.state.is_enabled()}
                    onclick={props.on_predict.clone()}
                >
                    { Flow::Forecast.label(props.state) }
                </button>
            </div>
            <ForecastStats metrics={props.metrics.clone()} />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Price History & Forecast"}</h3>
                        <ForecastChart loading={props.state.is_loading()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Monthly Forecast"}</h3>
                        <ForecastTable rows={props.rows.clone()} />
                    </div>
                </div>
            </div>
        </section>
    }
}
