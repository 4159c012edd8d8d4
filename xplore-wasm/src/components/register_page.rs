use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use xplore_core::models::LoginRequest;
use xplore_core::register::{PREFERENCE_OPTIONS, RegistrationForm};
use xplore_core::routes::Route;

use crate::api::ApiClient;
use crate::state::AppState;

#[component]
pub(crate) fn RegisterPage(state: AppState, api: ApiClient) -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = {
        let state = state.clone();
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            error.set(None);

            // Ошибки валидации до сети не доходят.
            let request = match form.with(|form| form.validate()) {
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
                // Регистрация, затем вход с теми же данными; сессия
                // коммитится только после успешного входа.
                let login = LoginRequest {
                    email: request.email.clone(),
                    password: request.password.clone(),
                };
                let outcome = match api.register(&request).await {
                    Ok(()) => api.login(&login).await,
                    Err(err) => Err(err),
                };
                match outcome {
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

    let preference_buttons = move || {
        PREFERENCE_OPTIONS
            .into_iter()
            .map(|preference| {
                let class = move || {
                    if form.with(|form| form.is_preferred(preference)) {
                        "preference-btn active"
                    } else {
                        "preference-btn"
                    }
                };
                view! {
                    <button
                        type="button"
                        class=class
                        on:click=move |_| form.update(|form| form.toggle_preference(preference))
                    >
                        {preference}
                    </button>
                }
            })
            .collect_view()
    };

    let error_text = move || error.get().unwrap_or_default();

    view! {
        <div class="auth-card">
            <h1 class="auth-title">"Join ML Xplore"</h1>
            <p class="auth-subtitle">"Create an account to get started"</p>

            <Show when=move || error.get().is_some()>
                <div class="error-message" on:click=move |_| error.set(None)>
                    {error_text.clone()}
                </div>
            </Show>

            <form class="auth-form" on:submit=on_submit>
                <input
                    class="input"
                    placeholder="Full name"
                    prop:value=move || form.with(|form| form.name.clone())
                    on:input=move |ev| form.update(|form| form.name = event_target_value(&ev))
                />
                <input
                    class="input"
                    placeholder="your@email.com"
                    prop:value=move || form.with(|form| form.email.clone())
                    on:input=move |ev| form.update(|form| form.email = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="password"
                    placeholder="password"
                    prop:value=move || form.with(|form| form.password.clone())
                    on:input=move |ev| form.update(|form| form.password = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="password"
                    placeholder="confirm password"
                    prop:value=move || form.with(|form| form.confirm_password.clone())
                    on:input=move |ev| {
                        form.update(|form| form.confirm_password = event_target_value(&ev))
                    }
                />

                <label>"Preferences (select at least one)"</label>
                <div class="preference-grid">{preference_buttons}</div>

                <button type="submit" class="btn btn-primary btn-full" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>

            <p class="auth-footer">
                "Already have an account? "
                <button class="link" on:click={
                    let state = state.clone();
                    move |_| state.navigate(Route::Login)
                }>
                    "Login"
                </button>
            </p>
        </div>
    }
}
