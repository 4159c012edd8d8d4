use leptos::prelude::*;
use leptos::task::spawn_local;

use xplore_core::fetch::FetchState;
use xplore_core::models::Resource;

use crate::api::ApiClient;
use crate::components::resource_card::ResourceCard;
use crate::state::{AppState, begin_fetch, resolve_fetch};

#[component]
pub(crate) fn RecommendationsPage(state: AppState, api: ApiClient) -> impl IntoView {
    let recommendations = RwSignal::new(FetchState::<Vec<Resource>>::new());

    let load = {
        let api = api.clone();
        move || {
            let generation = begin_fetch(recommendations);
            let api = api.clone();
            spawn_local(async move {
                let outcome = api.recommendations().await;
                resolve_fetch(recommendations, generation, outcome);
            });
        }
    };

    // Одна загрузка при монтировании; кнопка Refresh гоняет тот же цикл.
    load();

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

    // Предпочтения берутся напрямую из сессии, а не вторым запросом.
    let preferences = {
        let state = state.clone();
        move || {
            state
                .user
                .with(|user| user.as_ref().map(|u| u.preferences.clone()))
                .unwrap_or_default()
        }
    };
    let has_preferences = {
        let preferences = preferences.clone();
        move || !preferences().is_empty()
    };

    let list = move || recommendations.with(|fetch| fetch.data().cloned().unwrap_or_default());
    let is_empty = move || {
        recommendations.with(|fetch| fetch.is_success() && fetch.data().is_some_and(Vec::is_empty))
    };
    let has_items =
        move || recommendations.with(|fetch| fetch.data().is_some_and(|data| !data.is_empty()));
    let error_text = move || {
        recommendations.with(|fetch| fetch.error().map(str::to_string).unwrap_or_default())
    };

    view! {
        <div class="recommendations-page">
            <h1 class="recommendations-title">"Personalized for You"</h1>

            <Show when=has_preferences.clone()>
                <div class="user-preferences">
                    <span class="preferences-label">"Your interests:"</span>
                    <div class="preferences-tags">
                        {
                            let preferences = preferences.clone();
                            move || {
                                preferences()
                                    .into_iter()
                                    .map(|preference| view! { <span class="tag">{preference}</span> })
                                    .collect_view()
                            }
                        }
                    </div>
                </div>
            </Show>

            <Show when=move || recommendations.with(|fetch| fetch.error().is_some())>
                <div class="error-message" on:click=move |_| {
                    recommendations.update(|fetch| fetch.dismiss_error())
                }>
                    {error_text.clone()}
                </div>
            </Show>

            <Show when=move || recommendations.with(|fetch| fetch.is_loading())>
                <div class="loading-state">
                    <p>"Loading your recommendations..."</p>
                </div>
            </Show>

            <Show when=is_empty>
                <div class="empty-state">
                    <h3>"No recommendations yet"</h3>
                    <p>"Start searching and clicking resources to get personalized picks"</p>
                </div>
            </Show>

            <Show when=has_items>
                <div class="recommendations-section">
                    <div class="recommendations-header">
                        <h2>{move || format!("Top {} recommendations", list().len())}</h2>
                        <button
                            class="btn btn-secondary"
                            on:click={
                                let load = load.clone();
                                move |_| load()
                            }
                            disabled=move || recommendations.with(|fetch| fetch.is_loading())
                        >
                            "Refresh"
                        </button>
                    </div>
                    <div class="recommendations-grid">
                        <For
                            each=list.clone()
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
        </div>
    }
}
