use common::ForecastRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<ForecastRow>,
}

#[function_component(ForecastTable)]
pub fn forecast_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full" id="forecastTable">
                <thead>
                    <tr>
                        <th>{"Month"}</th>
                        <th>{"Forecast Price"}</th>
                        <th>{"Change"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr key={row.date.clone()}>
                            <td>{&row.date}</td>
                            <td>{&row.price}</td>
                            <td class={row.change_class()}>{&row.change}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
