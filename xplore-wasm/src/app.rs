use leptos::prelude::*;

use xplore_core::routes::Route;

use crate::api::ApiClient;
use crate::components::admin_page::AdminPage;
use crate::components::history_page::HistoryPage;
use crate::components::home_page::HomePage;
use crate::components::login_page::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::recommendations_page::RecommendationsPage;
use crate::components::register_page::RegisterPage;
use crate::components::search_page::SearchPage;

#[component]
pub fn App() -> impl IntoView {
    let state = crate::state::AppState::new();
    let api = ApiClient::new(state.clone());

    let page = {
        let state = state.clone();
        let api = api.clone();
        move || match state.route.get() {
            Route::Home => view! { <HomePage state=state.clone() /> }.into_any(),
            Route::Login => {
                view! { <LoginPage state=state.clone() api=api.clone() /> }.into_any()
            }
            Route::Register => {
                view! { <RegisterPage state=state.clone() api=api.clone() /> }.into_any()
            }
            Route::Search => {
                view! { <SearchPage api=api.clone() /> }.into_any()
            }
            Route::Recommendations => {
                view! { <RecommendationsPage state=state.clone() api=api.clone() /> }.into_any()
            }
            Route::History => view! { <HistoryPage api=api.clone() /> }.into_any(),
            Route::Admin => view! { <AdminPage api=api.clone() /> }.into_any(),
        }
    };

    view! {
        <div class="app">
            <Navbar state=state.clone() />
            <main>{page}</main>
        </div>
    }
}
