use leptos::prelude::*;

use xplore_core::models::Resource;

/// Единая карточка записи ресурса: заголовок, необязательный бейдж
/// релевантности, описание, теги и метаданные. Клик по любому месту карточки
/// уведомляет `on_open` с полной записью.
#[component]
pub(crate) fn ResourceCard(resource: Resource, on_open: Callback<Resource>) -> impl IntoView {
    let title = resource.display_title().to_string();
    let description = resource.description.clone().filter(|d| !d.trim().is_empty());
    let tags = resource.tag_list();
    let score_badge = resource.score.map(|score| {
        let bucket = resource
            .score_bucket()
            .map(|bucket| bucket.css_class())
            .unwrap_or("low");
        view! {
            <span class=format!("score-badge {bucket}")>
                {format!("{:.0}%", score * 100.0)}
            </span>
        }
    });
    let popularity = resource
        .popularity_score
        .map(|score| format!("Popularity: {score:.2}"));
    let visited = resource.timestamp.clone();

    let url = resource.url.clone();
    let on_click = move |_| on_open.run(resource.clone());

    view! {
        <div class="resource-card card" on:click=on_click>
            <div class="resource-header">
                <h3 class="resource-title">{title}</h3>
                {score_badge}
            </div>

            {description.map(|text| view! { <p class="resource-description">{text}</p> })}

            <div class="resource-footer">
                <div class="resource-tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect_view()}
                </div>
                <span class="resource-url">{url}</span>
            </div>

            {popularity.map(|text| view! {
                <div class="resource-meta">
                    <span class="meta-item">{text}</span>
                </div>
            })}
            {visited.map(|timestamp| view! {
                <div class="resource-meta">
                    <span class="meta-item">{format!("Visited: {timestamp}")}</span>
                </div>
            })}
        </div>
    }
}
