use leptos::prelude::*;

use xplore_core::routes::Route;

use crate::state::AppState;

const LINKS: [(Route, &str); 4] = [
    (Route::Search, "Search"),
    (Route::Recommendations, "Recommendations"),
    (Route::History, "History"),
    (Route::Admin, "Admin"),
];

#[component]
pub(crate) fn Navbar(state: AppState) -> impl IntoView {
    let user_name = {
        let state = state.clone();
        move || {
            state
                .user
                .get()
                .map(|user| if user.name.is_empty() { user.email } else { user.name })
                .unwrap_or_default()
        }
    };

    let on_logout = {
        let state = state.clone();
        move |_| {
            state.clear_session();
            state.navigate(Route::Login);
        }
    };

    let links = {
        let state = state.clone();
        move || {
            LINKS
                .into_iter()
                .map(|(route, label)| {
                    let state = state.clone();
                    let class = {
                        let state = state.clone();
                        move || {
                            if state.route.get() == route {
                                "nav-link active"
                            } else {
                                "nav-link"
                            }
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| state.navigate(route)>
                            {label}
                        </button>
                    }
                })
                .collect_view()
        }
    };

    let state_for_links = state.clone();
    let state_for_actions = state.clone();
    let state_for_login = state.clone();
    let state_for_register = state.clone();

    view! {
        <nav class="navbar">
            <button class="navbar-logo" on:click={
                let state = state.clone();
                move |_| state.navigate(Route::Home)
            }>
                "ML Xplore"
            </button>

            <Show when=move || state_for_links.is_authenticated()>
                <div class="navbar-links">{links.clone()}</div>
            </Show>

            <div class="navbar-actions">
                <Show
                    when=move || state_for_actions.is_authenticated()
                    fallback=move || {
                        let state_for_login = state_for_login.clone();
                        let state_for_register = state_for_register.clone();
                        view! {
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| state_for_login.navigate(Route::Login)
                            >
                                "Login"
                            </button>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| state_for_register.navigate(Route::Register)
                            >
                                "Register"
                            </button>
                        }
                    }
                >
                    <span class="user-name">{user_name.clone()}</span>
                    <button class="btn btn-secondary" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
