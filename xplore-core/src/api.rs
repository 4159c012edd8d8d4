//! Пути API сервиса поиска ресурсов, общие для браузерного и нативного
//! клиентов. Все пути относительны единого корня API.

/// `POST /register`
pub const REGISTER_PATH: &str = "/register";
/// `POST /login`
pub const LOGIN_PATH: &str = "/login";
/// `GET /user`
pub const USER_PATH: &str = "/user";
/// `GET /recommendations`
pub const RECOMMENDATIONS_PATH: &str = "/recommendations";
/// `GET /history` и `POST /history`
pub const HISTORY_PATH: &str = "/history";
/// `GET /admin/stats`
pub const ADMIN_STATS_PATH: &str = "/admin/stats";

/// Строит путь поиска с запросом и повторяющимися параметрами `tags[]`.
///
/// Теги уходят параметрами запроса, а не пост-фильтром на клиенте.
pub fn search_path(query: &str, tags: &[String]) -> String {
    let mut pairs = form_urlencoded::Serializer::new(String::new());
    pairs.append_pair("query", query);
    for tag in tags {
        pairs.append_pair("tags[]", tag);
    }
    format!("/search?{}", pairs.finish())
}

/// Строит путь одной страницы админ-таблицы ресурсов.
pub fn admin_resources_path(page: u32, per_page: u32) -> String {
    format!("/admin/resources?page={page}&per_page={per_page}")
}

/// Склеивает корень API и относительный путь, нормализуя слэши.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_encodes_query_and_repeats_tags() {
        let tags = vec!["model".to_string(), "research paper".to_string()];
        assert_eq!(
            search_path("neural nets", &tags),
            "/search?query=neural+nets&tags%5B%5D=model&tags%5B%5D=research+paper"
        );
    }

    #[test]
    fn search_path_without_tags_has_only_the_query() {
        assert_eq!(search_path("transformers", &[]), "/search?query=transformers");
    }

    #[test]
    fn admin_resources_path_carries_page_and_size() {
        assert_eq!(
            admin_resources_path(2, 20),
            "/admin/resources?page=2&per_page=20"
        );
    }

    #[test]
    fn endpoint_normalizes_slashes() {
        assert_eq!(
            endpoint("http://localhost:5000/api/", "/search"),
            "http://localhost:5000/api/search"
        );
        assert_eq!(
            endpoint("http://localhost:5000/api", "search"),
            "http://localhost:5000/api/search"
        );
    }
}
