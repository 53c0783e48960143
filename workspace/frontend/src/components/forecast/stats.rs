use common::format::PLACEHOLDER;
use common::MetricsView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metrics: Option<MetricsView>,
}

#[function_component(ForecastStats)]
pub fn forecast_stats(props: &Props) -> Html {
    let (current_price, avg_forecast, trend_text, trend_class) = match &props.metrics {
        Some(m) => (
            m.current_price.clone(),
            m.avg_forecast.clone(),
            m.trend_text().to_string(),
            m.trend.as_ref().map_or("", |t| t.direction.css_class()),
        ),
        None => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            "",
        ),
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Current Price"}</div>
                    <div class="stat-value" id="currentPrice">{current_price}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Average Forecast"}</div>
                    <div class="stat-value text-primary" id="avgForecast">{avg_forecast}</div>
                    <div class="stat-desc">{"Next 12 months"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Trend"}</div>
                    <div class={classes!("stat-value", trend_class)} id="trendPercent">{trend_text}</div>
                </div>
            </div>
        </div>
    }
}
