use leptos::prelude::*;
use leptos::task::spawn_local;

use xplore_core::fetch::FetchState;
use xplore_core::models::Resource;

use crate::api::ApiClient;
use crate::components::resource_card::ResourceCard;
use crate::state::{begin_fetch, resolve_fetch};

#[component]
pub(crate) fn HistoryPage(api: ApiClient) -> impl IntoView {
    let history = RwSignal::new(FetchState::<Vec<Resource>>::new());

    let load = {
        let api = api.clone();
        move || {
            let generation = begin_fetch(history);
            let api = api.clone();
            spawn_local(async move {
                let outcome = api.history().await;
                resolve_fetch(history, generation, outcome);
            });
        }
    };

    load();

    // Представление только для чтения: открытие записи не дописывает её в
    // историю повторно, в отличие от кликов в поиске и рекомендациях.
    let on_open = Callback::new(move |resource: Resource| {
        crate::components::open_resource(&resource.url);
    });

    let list = move || history.with(|fetch| fetch.data().cloned().unwrap_or_default());
    let is_empty =
        move || history.with(|fetch| fetch.is_success() && fetch.data().is_some_and(Vec::is_empty));
    let has_items =
        move || history.with(|fetch| fetch.data().is_some_and(|data| !data.is_empty()));
    let error_text =
        move || history.with(|fetch| fetch.error().map(str::to_string).unwrap_or_default());

    view! {
        <div class="history-page">
            <h1 class="history-title">"Your History"</h1>
            <p class="history-subtitle">"Resources you've recently explored"</p>

            <Show when=move || history.with(|fetch| fetch.error().is_some())>
                <div class="error-message" on:click=move |_| {
                    history.update(|fetch| fetch.dismiss_error())
                }>
                    {error_text.clone()}
                </div>
            </Show>

            <Show when=move || history.with(|fetch| fetch.is_loading())>
                <div class="loading-state">
                    <p>"Loading your history..."</p>
                </div>
            </Show>

            <Show when=is_empty>
                <div class="empty-state">
                    <h3>"No history yet"</h3>
                    <p>"Start searching and clicking on resources to build your history"</p>
                </div>
            </Show>

            <Show when=has_items>
                <div class="history-section">
                    <div class="history-header">
                        <h2>{move || format!("{} recent resources", list().len())}</h2>
                        <button
                            class="btn btn-secondary"
                            on:click={
                                let load = load.clone();
                                move |_| load()
                            }
                            disabled=move || history.with(|fetch| fetch.is_loading())
                        >
                            "Refresh"
                        </button>
                    </div>
                    <div class="history-timeline">
                        <For
                            each=list.clone()
                            key=|resource| {
                                (resource.url.clone(), resource.timestamp.clone())
                            }
                            children={
                                let on_open = on_open;
                                move |resource| {
                                    view! { <ResourceCard resource=resource on_open=on_open /> }
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
