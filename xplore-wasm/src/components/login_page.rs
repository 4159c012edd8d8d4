use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use xplore_core::register::validate_login;
use xplore_core::routes::Route;

use crate::api::ApiClient;
use crate::state::AppState;

#[component]
pub(crate) fn LoginPage(state: AppState, api: ApiClient) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = {
        let state = state.clone();
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            error.set(None);

            // Введённые значения при провале сохраняются, меняется только ошибка.
            let request = match validate_login(&email.get(), &password.get()) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.display_message()));
                    return;
                }
            };

            loading.set(true);
            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.login(&request).await {
                    Ok(auth) => match state.set_session(auth.token, auth.user) {
                        Ok(()) => state.navigate(Route::Search),
                        Err(err) => error.set(Some(err)),
                    },
                    Err(err) => error.set(Some(err.display_message())),
                }
                loading.set(false);
            });
        }
    };

    let error_text = move || error.get().unwrap_or_default();

    view! {
        <div class="auth-card">
            <h1 class="auth-title">"Welcome Back"</h1>
            <p class="auth-subtitle">"Sign in to continue exploring"</p>

            <Show when=move || error.get().is_some()>
                <div class="error-message" on:click=move |_| error.set(None)>
                    {error_text.clone()}
                </div>
            </Show>

            <form class="auth-form" on:submit=on_submit>
                <input
                    class="input"
                    placeholder="your@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="password"
                    placeholder="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary btn-full" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>

            <p class="auth-footer">
                "No account yet? "
                <button class="link" on:click={
                    let state = state.clone();
                    move |_| state.navigate(Route::Register)
                }>
                    "Register"
                </button>
            </p>
        </div>
    }
}
