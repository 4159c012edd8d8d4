use leptos::prelude::*;

use xplore_core::routes::Route;

use crate::state::AppState;

#[component]
pub(crate) fn HomePage(state: AppState) -> impl IntoView {
    let state_for_register = state.clone();
    let state_for_login = state.clone();

    view! {
        <div class="home-page">
            <div class="home-hero">
                <h1 class="home-title">"ML Resource Discovery"</h1>
                <p class="home-subtitle">
                    "Your intelligent platform for discovering machine learning resources"
                </p>
                <div class="home-features">
                    <div class="feature-card">
                        <h3>"Smart Search"</h3>
                        <p>"Find ML resources ranked by relevance"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Personalized"</h3>
                        <p>"Recommendations tailored to your interests"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Ranked Results"</h3>
                        <p>"Resources ordered by relevance and popularity"</p>
                    </div>
                </div>
                <div class="home-cta">
                    <button
                        class="btn btn-primary btn-large"
                        on:click=move |_| state_for_register.navigate(Route::Register)
                    >
                        "Get Started"
                    </button>
                    <button
                        class="btn btn-secondary btn-large"
                        on:click=move |_| state_for_login.navigate(Route::Login)
                    >
                        "Sign In"
                    </button>
                </div>
            </div>
        </div>
    }
}
