#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Все представления, на которые клиент умеет переходить.
pub enum Route {
    /// Публичная посадочная страница.
    Home,
    /// Форма входа.
    Login,
    /// Форма регистрации.
    Register,
    /// Поиск ресурсов, защищённое представление по умолчанию.
    Search,
    /// Персональные рекомендации.
    Recommendations,
    /// История просмотров.
    History,
    /// Админ-панель (статистика + таблица ресурсов).
    Admin,
}

impl Route {
    /// Требует ли вход в маршрут авторизованной сессии.
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::Search | Self::Recommendations | Self::History | Self::Admin
        )
    }

    /// Путь маршрута.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Search => "/search",
            Self::Recommendations => "/recommendations",
            Self::History => "/history",
            Self::Admin => "/admin",
        }
    }
}

/// Маршрутный guard: куда реально приведёт переход на `target` при текущем
/// состоянии сессии.
///
/// Защищённые маршруты отправляют неавторизованных на Login; посадочная
/// страница отправляет авторизованных на Search. Вызывающие обязаны
/// вычислять это со свежим чтением авторизации на каждом переходе, а не с
/// закэшированным решением.
pub fn resolve_navigation(target: Route, authenticated: bool) -> Route {
    if target.requires_auth() && !authenticated {
        return Route::Login;
    }
    if target == Route::Home && authenticated {
        return Route::Search;
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_redirect_anonymous_users_to_login() {
        for route in [
            Route::Search,
            Route::Recommendations,
            Route::History,
            Route::Admin,
        ] {
            assert_eq!(resolve_navigation(route, false), Route::Login);
        }
    }

    #[test]
    fn protected_routes_open_for_authenticated_users() {
        for route in [
            Route::Search,
            Route::Recommendations,
            Route::History,
            Route::Admin,
        ] {
            assert_eq!(resolve_navigation(route, true), route);
        }
    }

    #[test]
    fn landing_page_redirects_authenticated_users_to_search() {
        assert_eq!(resolve_navigation(Route::Home, true), Route::Search);
        assert_eq!(resolve_navigation(Route::Home, false), Route::Home);
    }

    #[test]
    fn auth_forms_stay_reachable_either_way() {
        assert_eq!(resolve_navigation(Route::Login, false), Route::Login);
        assert_eq!(resolve_navigation(Route::Login, true), Route::Login);
        assert_eq!(resolve_navigation(Route::Register, false), Route::Register);
    }
}
