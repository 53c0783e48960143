use common::{Flow, UiState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: UiState,
    pub month_input: NodeRef,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(MonthForm)]
pub fn month_form(props: &Props) -> Html {
    html! {
        <form id="predictForm" class="flex flex-wrap items-end gap-4" onsubmit={props.on_submit.clone()}>
            <label class="form-control">
                <div class="label">
                    <span class="label-text">{"Month"}</span>
                </div>
                <input
                    type="month"
                    id="month"
                    name="month"
                    class="input input-bordered"
                    ref={props.month_input.clone()}
                />
            </label>
            <button type="submit" class="btn btn-primary" disabled={!props.state.is_enabled()}>
                { Flow::Month.label(props.state) }
            </button>
        </form>
    }
}
