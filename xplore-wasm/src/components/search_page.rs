use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use xplore_core::fetch::FetchState;
use xplore_core::models::Resource;
use xplore_core::search::{SearchQuery, TAG_OPTIONS};

use crate::api::ApiClient;
use crate::components::resource_card::ResourceCard;
use crate::state::{begin_fetch, resolve_fetch};

#[component]
pub(crate) fn SearchPage(api: ApiClient) -> impl IntoView {
    let query = RwSignal::new(SearchQuery::default());
    let results = RwSignal::new(FetchState::<Vec<Resource>>::new());
    // Ошибки валидации живут вне цикла загрузки, чтобы невалидный submit не
    // сбивал состояние "ещё не искали".
    let form_error = RwSignal::new(None::<String>);

    let on_submit = {
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            form_error.set(None);

            let text = match query.with(|query| query.validate()) {
                Ok(text) => text,
                Err(err) => {
                    form_error.set(Some(err.display_message()));
                    return;
                }
            };
            let tags = query.with(|query| query.selected_tags().to_vec());

            let generation = begin_fetch(results);
            let api = api.clone();
            spawn_local(async move {
                let outcome = api.search(&text, &tags).await;
                resolve_fetch(results, generation, outcome);
            });
        }
    };

    // Клик по результату пишет его в историю best-effort; открытие ресурса
    // не ждёт записи и не падает вместе с ней.
    let on_open = Callback::new({
        let api = api.clone();
        move |resource: Resource| {
            let api = api.clone();
            let url = resource.url.clone();
            spawn_local(async move {
                if let Err(err) = api.add_history(&url).await {
                    log::warn!("failed to record history for {url}: {err}");
                }
            });
            crate::components::open_resource(&resource.url);
        }
    });

    let tag_buttons = move || {
        TAG_OPTIONS
            .into_iter()
            .map(|tag| {
                let class = move || {
                    if query.with(|query| query.is_selected(tag)) {
                        "tag-option active"
                    } else {
                        "tag-option"
                    }
                };
                view! {
                    <button
                        type="button"
                        class=class
                        on:click=move |_| query.update(|query| query.toggle_tag(tag))
                    >
                        {tag}
                    </button>
                }
            })
            .collect_view()
    };

    let error_text = move || {
        form_error
            .get()
            .or_else(|| results.with(|fetch| fetch.error().map(str::to_string)))
            .unwrap_or_default()
    };
    let has_error = move || {
        form_error.get().is_some() || results.with(|fetch| fetch.error().is_some())
    };
    let dismiss_error = move |_| {
        form_error.set(None);
        results.update(|fetch| fetch.dismiss_error());
    };

    let result_list = move || results.with(|fetch| fetch.data().cloned().unwrap_or_default());
    let no_results =
        move || results.with(|fetch| fetch.is_success() && fetch.data().is_some_and(Vec::is_empty));
    let has_results =
        move || results.with(|fetch| fetch.data().is_some_and(|data| !data.is_empty()));

    view! {
        <div class="search-page">
            <h1 class="search-title">"Discover ML Resources"</h1>

            <form class="search-form" on:submit=on_submit>
                <input
                    class="search-input"
                    placeholder="Search for datasets, models, papers, tutorials..."
                    prop:value=move || query.with(|query| query.text.clone())
                    on:input=move |ev| query.update(|query| query.text = event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || results.with(|fetch| fetch.is_loading())
                >
                    "Search"
                </button>

                <div class="tag-filter">
                    <span class="filter-label">"Filter by type:"</span>
                    <div class="tag-options">{tag_buttons}</div>
                </div>
            </form>

            <Show when=has_error>
                <div class="error-message" on:click=dismiss_error.clone()>
                    {error_text.clone()}
                </div>
            </Show>

            <Show when=move || results.with(|fetch| fetch.is_loading())>
                <div class="loading-state">
                    <p>"Searching resources..."</p>
                </div>
            </Show>

            <Show when=no_results>
                <div class="empty-state">
                    <h3>"No results found"</h3>
                    <p>"Try adjusting your search query or filters"</p>
                </div>
            </Show>

            <Show when=has_results>
                <div class="results-section">
                    <h2>{move || format!("Found {} resources", result_list().len())}</h2>
                    <div class="results-grid">
                        <For
                            each=result_list.clone()
                            key=|resource| resource.url.clone()
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

            <Show when=move || results.with(|fetch| fetch.is_idle())>
                <div class="search-tips">
                    <h3>"Search Tips"</h3>
                    <ul>
                        <li>"Use specific keywords like \"neural networks\" or \"computer vision\""</li>
                        <li>"Filter by resource type to narrow your results"</li>
                        <li>"Click on any result to visit it and add it to your history"</li>
                    </ul>
                </div>
            </Show>
        </div>
    }
}
