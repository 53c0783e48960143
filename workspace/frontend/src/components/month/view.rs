use common::{MonthResultView, UiState};
use yew::prelude::*;

use super::form::MonthForm;
use super::result::MonthResult;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: UiState,
    pub result: Option<MonthResultView>,
    pub month_input: NodeRef,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(MonthPanel)]
pub fn month_panel(props: &Props) -> Html {
    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Predict a Single Month"}</h2>
                <MonthForm
                    state={props.state}
                    month_input={props.month_input.clone()}
                    on_submit={props.on_submit.clone()}
                />
                <MonthResult result={props.result.clone()} />
            </div>
        </section>
    }
}
