use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            {if let Some(on_refresh) = &props.on_refresh {
                let on_refresh = on_refresh.clone();
                html! {
                    <div class="flex-none px-4">
                        <button
                            id="refreshBtn"
                            class="btn btn-ghost btn-sm"
                            onclick={Callback::from(move |_| {
                                log::debug!("User clicked refresh button");
                                on_refresh.emit(());
                            })}
                        >
                            <i class="fas fa-sync-alt"></i>
                            {" Refresh"}
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
