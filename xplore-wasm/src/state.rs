use leptos::prelude::*;

use xplore_core::error::ClientError;
use xplore_core::fetch::FetchState;
use xplore_core::models::User;
use xplore_core::routes::{self, Route};
use xplore_core::session::Session;

use crate::storage;

#[derive(Debug, Clone)]
/// Реактивное состояние приложения: сессия плюс текущий маршрут.
///
/// Сигналы сессии пишутся ровно в двух местах: auth-поток при успехе
/// (`set_session`) и 401-перехватчик API-клиента (`clear_session`). Все
/// остальные компоненты их только читают.
pub(crate) struct AppState {
    pub(crate) token: RwSignal<Option<String>>,
    pub(crate) user: RwSignal<Option<User>>,
    pub(crate) route: RwSignal<Route>,
}

impl AppState {
    /// Восстанавливает сессию из localStorage и прогоняет стартовый маршрут
    /// через guard.
    pub(crate) fn new() -> Self {
        let session = Session::restore(storage::load_token(), storage::load_user());
        let authenticated = session.is_authenticated();

        Self {
            token: RwSignal::new(session.token().map(str::to_string)),
            user: RwSignal::new(session.user().cloned()),
            route: RwSignal::new(routes::resolve_navigation(Route::Home, authenticated)),
        }
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some) && self.user.with(Option::is_some)
    }

    /// Точка входа guard-а: каждый переход идёт через неё и разрешается по
    /// свежему чтению авторизации.
    pub(crate) fn navigate(&self, target: Route) {
        let destination = routes::resolve_navigation(target, self.is_authenticated());
        self.route.set(destination);
    }

    /// Сохраняет и публикует обе половины сессии вместе. Если хотя бы одна
    /// не сохранилась, не коммитится ничего, а ошибка возвращается
    /// auth-форме для показа.
    pub(crate) fn set_session(&self, token: String, user: User) -> Result<(), String> {
        storage::save_user(&user)?;
        storage::save_token(&token)?;
        self.user.set(Some(user));
        self.token.set(Some(token));
        Ok(())
    }

    /// Убирает обе половины сессии из хранилища и из сигналов.
    pub(crate) fn clear_session(&self) {
        if let Err(err) = storage::clear_token() {
            log::warn!("failed to clear persisted token: {err}");
        }
        if let Err(err) = storage::clear_user() {
            log::warn!("failed to clear persisted user: {err}");
        }
        self.token.set(None);
        self.user.set(None);
    }
}

/// Запускает цикл загрузки на `FetchState` в сигнале и возвращает поколение,
/// которое ответ обязан предъявить обратно.
pub(crate) fn begin_fetch<T>(state: RwSignal<FetchState<T>>) -> u64
where
    T: Clone + Send + Sync + 'static,
{
    let mut generation = 0;
    state.update(|fetch| generation = fetch.begin());
    generation
}

/// Завершает цикл загрузки. Возвращает `false`, если ответ устарел и был
/// отброшен (после `begin_fetch` успела стартовать более новая загрузка).
pub(crate) fn resolve_fetch<T>(
    state: RwSignal<FetchState<T>>,
    generation: u64,
    result: Result<T, ClientError>,
) -> bool
where
    T: Clone + Send + Sync + 'static,
{
    let mut applied = false;
    state.update(|fetch| applied = fetch.resolve(generation, result));
    if !applied {
        log::debug!("discarded stale fetch response (generation {generation})");
    }
    applied
}
