use std::rc::Rc;

use common::{ChartSurface, DashboardController, DashboardView, UiState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::page_view::PageView;
use crate::api_client::{self, BrowserTransport};
use crate::components::forecast::view::ForecastPanel;
use crate::components::layout::layout::Layout;
use crate::components::month::view::MonthPanel;

type Controller = DashboardController<BrowserTransport>;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let controller: Rc<Controller> =
        use_memo((), |_| DashboardController::new(BrowserTransport::from_settings()));

    let page = PageView {
        forecast_control: use_state(UiState::default),
        month_control: use_state(UiState::default),
        metrics: use_state(|| None),
        rows: use_state(Vec::new),
        month_result: use_state(|| None),
        plot: use_mut_ref(|| ChartSurface::new("chartArea")),
        trend_chart: use_mut_ref(|| ChartSurface::new("trendChart")),
        bar_chart: use_mut_ref(|| ChartSurface::new("barChart")),
    };
    let csv_input = use_node_ref();
    let month_input = use_node_ref();

    let on_predict = {
        let controller = controller.clone();
        let page = page.clone();
        let csv_input = csv_input.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("User clicked predict button");
            let file = csv_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let controller = controller.clone();
            let page = page.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let upload = match file {
                    Some(file) => match api_client::read_upload(file).await {
                        Ok(upload) => Some(upload),
                        Err(err) => {
                            if let Some(message) = err.alert_message() {
                                page.alert(&message);
                            }
                            return;
                        }
                    },
                    None => None,
                };
                // Failures were already alerted by the controller.
                let _ = controller.run_forecast(&page, upload).await;
            });
        })
    };

    let on_month_submit = {
        let controller = controller.clone();
        let page = page.clone();
        let month_input = month_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let month = month_input
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            log::debug!("User submitted month form: {:?}", month);
            let controller = controller.clone();
            let page = page.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = controller.submit_month(&page, &month).await;
            });
        })
    };

    let on_refresh = {
        let controller = controller.clone();
        let page = page.clone();
        Callback::from(move |_: ()| controller.refresh(&page))
    };

    html! {
        <Layout title="Price Forecast" on_refresh={Some(on_refresh)}>
            <ForecastPanel
                state={*page.forecast_control}
                metrics={(*page.metrics).clone()}
                rows={(*page.rows).clone()}
                csv_input={csv_input}
                on_predict={on_predict}
            />
            <MonthPanel
                state={*page.month_control}
                result={(*page.month_result).clone()}
                month_input={month_input}
                on_submit={on_month_submit}
            />
        </Layout>
    }
}
