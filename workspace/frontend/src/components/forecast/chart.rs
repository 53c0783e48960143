use yew::prelude::*;

use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub loading: bool,
}

/// Host div for the combined history/forecast plot. The div stays mounted
/// while loading so the previous plot can be purged in place.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    html! {
        <div class="relative">
            <div id="chartArea" class="chart-container" style="height: 400px;"></div>
            if props.loading {
                <div class="absolute inset-0 bg-base-100/70">
                    <Loading text={Some("Running forecast model...".to_string())} />
                </div>
            }
        </div>
    }
}
