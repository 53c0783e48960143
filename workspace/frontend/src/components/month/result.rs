use common::MonthResultView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub result: Option<MonthResultView>,
}

/// `resultSection` stays hidden until the first prediction arrives. The
/// canvases are always mounted so charts can be drawn into them.
#[function_component(MonthResult)]
pub fn month_result(props: &Props) -> Html {
    let display = if props.result.is_some() { "display: block;" } else { "display: none;" };
    let field = |value: Option<&String>| value.cloned().unwrap_or_default();
    let result = props.result.as_ref();

    html! {
        <div id="resultSection" style={display} class="mt-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                <div class="stat bg-base-100 shadow rounded-box">
                    <div class="stat-title">{"Predicted Price"}</div>
                    <div class="stat-value text-primary" id="predictedPrice">
                        { field(result.map(|r| &r.predicted_price)) }
                    </div>
                </div>
                <div class="stat bg-base-100 shadow rounded-box">
                    <div class="stat-title">{"Accuracy"}</div>
                    <div class="stat-value" id="accuracy">{ field(result.map(|r| &r.accuracy)) }</div>
                </div>
                <div class="stat bg-base-100 shadow rounded-box">
                    <div class="stat-title">{"MAE"}</div>
                    <div class="stat-value" id="mae">{ field(result.map(|r| &r.mae)) }</div>
                </div>
                <div class="stat bg-base-100 shadow rounded-box">
                    <div class="stat-title">{"Confidence"}</div>
                    <div class="stat-value" id="confidence">{ field(result.map(|r| &r.confidence)) }</div>
                </div>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Actual vs Predicted"}</h3>
                        <canvas id="trendChart"></canvas>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Forecasted Prices"}</h3>
                        <canvas id="barChart"></canvas>
                    </div>
                </div>
            </div>
        </div>
    }
}
