use leptos::prelude::*;
use leptos::task::spawn_local;

use xplore_core::fetch::FetchState;
use xplore_core::models::{AdminResourcesPage, AdminStats};
use xplore_core::pagination::Pagination;

use crate::api::ApiClient;
use crate::state::{begin_fetch, resolve_fetch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Stats,
    Resources,
}

#[component]
pub(crate) fn AdminPage(api: ApiClient) -> impl IntoView {
    let tab = RwSignal::new(AdminTab::Stats);
    let stats = RwSignal::new(FetchState::<AdminStats>::new());
    let resources = RwSignal::new(FetchState::<AdminResourcesPage>::new());
    let pagination = RwSignal::new(Pagination::new());

    let load_stats = {
        let api = api.clone();
        move || {
            let generation = begin_fetch(stats);
            let api = api.clone();
            spawn_local(async move {
                let outcome = api.admin_stats().await;
                resolve_fetch(stats, generation, outcome);
            });
        }
    };

    // Пагинация продвигается только для реально применённого ответа;
    // устаревшая загрузка страницы отбрасывается вместе со своим номером.
    let load_resources = {
        let api = api.clone();
        move |page: u32| {
            let generation = begin_fetch(resources);
            let api = api.clone();
            spawn_local(async move {
                let outcome = api.admin_resources(page).await;
                let total_pages = outcome.as_ref().ok().map(|served| served.total_pages);
                if resolve_fetch(resources, generation, outcome) {
                    if let Some(total_pages) = total_pages {
                        pagination.update(|p| p.commit(page, total_pages));
                    }
                }
            });
        }
    };

    load_stats();

    // Активация вкладки догружает её данные, когда показывать нечего: при
    // первом входе и после провалившейся первой загрузки.
    let select_tab = {
        let load_stats = load_stats.clone();
        let load_resources = load_resources.clone();
        move |target: AdminTab| {
            tab.set(target);
            match target {
                AdminTab::Stats => {
                    if stats.with_untracked(|fetch| fetch.needs_load()) {
                        load_stats();
                    }
                }
                AdminTab::Resources => {
                    if resources.with_untracked(|fetch| fetch.needs_load()) {
                        load_resources(pagination.get_untracked().page());
                    }
                }
            }
        }
    };

    let go_prev = {
        let load_resources = load_resources.clone();
        move |_| {
            if let Some(page) = pagination.get_untracked().prev_page() {
                load_resources(page);
            }
        }
    };
    let go_next = {
        let load_resources = load_resources.clone();
        move |_| {
            if let Some(page) = pagination.get_untracked().next_page() {
                load_resources(page);
            }
        }
    };

    // Один отрисованный слот loading/error, питаемый активной вкладкой.
    // Неактивная вкладка хранит своё состояние и показывает его при возврате.
    let active_loading = move || match tab.get() {
        AdminTab::Stats => stats.with(|fetch| fetch.is_loading()),
        AdminTab::Resources => resources.with(|fetch| fetch.is_loading()),
    };
    let active_error = move || match tab.get() {
        AdminTab::Stats => stats.with(|fetch| fetch.error().map(str::to_string)),
        AdminTab::Resources => resources.with(|fetch| fetch.error().map(str::to_string)),
    };
    let dismiss_error = move |_| match tab.get_untracked() {
        AdminTab::Stats => stats.update(|fetch| fetch.dismiss_error()),
        AdminTab::Resources => resources.update(|fetch| fetch.dismiss_error()),
    };

    let tab_class = move |target: AdminTab| {
        move || {
            if tab.get() == target {
                "tab-btn active"
            } else {
                "tab-btn"
            }
        }
    };

    let stats_view = move || {
        stats.with(|fetch| {
            fetch.data().cloned().map(|data| {
                let max_count = data
                    .tag_distribution
                    .iter()
                    .map(|entry| entry.count)
                    .max()
                    .unwrap_or(0)
                    .max(1);
                let bars = data
                    .tag_distribution
                    .iter()
                    .map(|entry| {
                        let width = entry.count as f64 / max_count as f64 * 100.0;
                        view! {
                            <div class="tag-bar-row">
                                <span class="tag-bar-label">{entry.label().to_string()}</span>
                                <div class="tag-bar-track">
                                    <div
                                        class="tag-bar-fill"
                                        style=format!("width: {width:.1}%")
                                    ></div>
                                </div>
                                <span class="tag-bar-count">{entry.count}</span>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="stats-grid">
                        <div class="stat-card">
                            <span class="stat-value">{data.total_resources}</span>
                            <span class="stat-label">"Resources"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{data.total_links}</span>
                            <span class="stat-label">"Links"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{data.total_users}</span>
                            <span class="stat-label">"Users"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{data.total_interactions}</span>
                            <span class="stat-label">"Interactions"</span>
                        </div>
                    </div>
                    <div class="tag-distribution">
                        <h3>"Tag Distribution"</h3>
                        {bars}
                    </div>
                }
            })
        })
    };

    let resource_rows = move || {
        resources.with(|fetch| {
            fetch
                .data()
                .map(|page| page.resources.clone())
                .unwrap_or_default()
                .into_iter()
                .map(|resource| {
                    let crawled = resource
                        .crawled_date()
                        .map(|date| date.to_string())
                        .or_else(|| resource.last_crawled.clone())
                        .unwrap_or_else(|| "-".to_string());
                    let popularity = resource
                        .popularity_score
                        .map(|score| format!("{score:.4}"))
                        .unwrap_or_else(|| "-".to_string());
                    view! {
                        <tr>
                            <td class="col-title">
                                <div class="resource-title">{resource.display_title().to_string()}</div>
                                <div class="resource-url">{resource.url.clone()}</div>
                            </td>
                            <td class="col-tags">{resource.tag_list().join(", ")}</td>
                            <td class="col-popularity">{popularity}</td>
                            <td class="col-crawled">{crawled}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let resource_total = move || {
        resources.with(|fetch| fetch.data().map(|page| page.total).unwrap_or_default())
    };
    let has_resources = move || resources.with(|fetch| fetch.data().is_some());
    let page_label = move || {
        let p = pagination.get();
        format!("Page {} of {}", p.page(), p.total_pages())
    };

    view! {
        <div class="admin-page">
            <h1 class="admin-title">"Admin Dashboard"</h1>

            <div class="admin-tabs">
                <button class=tab_class(AdminTab::Stats) on:click={
                    let select_tab = select_tab.clone();
                    move |_| select_tab(AdminTab::Stats)
                }>
                    "Statistics"
                </button>
                <button class=tab_class(AdminTab::Resources) on:click={
                    let select_tab = select_tab.clone();
                    move |_| select_tab(AdminTab::Resources)
                }>
                    "Resources"
                </button>
            </div>

            <Show when=move || active_error().is_some()>
                <div class="error-message" on:click=dismiss_error.clone()>
                    {move || active_error().unwrap_or_default()}
                </div>
            </Show>

            <Show when=active_loading>
                <div class="loading-state">
                    <p>"Loading..."</p>
                </div>
            </Show>

            <Show when=move || tab.get() == AdminTab::Stats>
                <div class="admin-stats">
                    {stats_view.clone()}
                </div>
            </Show>

            <Show when=move || tab.get() == AdminTab::Resources>
                <div class="admin-resources">
                    <Show when=has_resources>
                        <div class="resources-meta">
                            {move || format!("{} indexed resources", resource_total())}
                        </div>
                        <table class="resources-table">
                            <thead>
                                <tr>
                                    <th>"Resource"</th>
                                    <th>"Tags"</th>
                                    <th>"Popularity"</th>
                                    <th>"Last Crawled"</th>
                                </tr>
                            </thead>
                            <tbody>{resource_rows.clone()}</tbody>
                        </table>
                        <div class="pagination-controls">
                            <button
                                class="btn btn-secondary"
                                on:click=go_prev.clone()
                                disabled=move || {
                                    !pagination.get().has_prev()
                                        || resources.with(|fetch| fetch.is_loading())
                                }
                            >
                                "Previous"
                            </button>
                            <span class="pagination-label">{page_label}</span>
                            <button
                                class="btn btn-secondary"
                                on:click=go_next.clone()
                                disabled=move || {
                                    !pagination.get().has_next()
                                        || resources.with(|fetch| fetch.is_loading())
                                }
                            >
                                "Next"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
