//! Нативная клиентская библиотека сервиса ML Xplore.
//!
//! Оборачивает REST API (`reqwest`) в типизированные методы. Клиент хранит
//! bearer-токен после `login` и автоматически подставляет его в защищённые
//! операции.
#![warn(missing_docs)]

mod error;

pub use error::{XploreClientError, XploreClientResult};
pub use xplore_core::models::{
    AdminResourcesPage, AdminStats, AuthResponse, Resource, TagCount, User,
};

use std::time::Duration;

use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use xplore_core::api;
use xplore_core::models::{AddHistoryRequest, LoginRequest, RegisterRequest};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
/// Подтверждение от пишущих endpoint-ов (`/register`, `/history`).
pub struct AckResponse {
    /// Человекочитаемое подтверждение, например "Added to history".
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент REST API сервиса ML Xplore.
pub struct XploreClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl XploreClient {
    /// Создаёт клиент для заданного корня API, например
    /// `http://127.0.0.1:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
            token: None,
        }
    }

    /// Задаёт bearer-токен вручную (например, восстановленный с диска).
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Текущий bearer-токен, если он есть.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Сбрасывает сохранённый bearer-токен.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Регистрирует пользователя. Токен аккаунт получает только через вход.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        preferences: &[String],
    ) -> XploreClientResult<AckResponse> {
        let payload = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            preferences: preferences.to_vec(),
        };
        self.send_json(Method::POST, api::REGISTER_PATH, Some(&payload), false)
            .await
    }

    /// Выполняет вход и сохраняет полученный bearer-токен в клиенте.
    pub async fn login(&mut self, email: &str, password: &str) -> XploreClientResult<AuthResponse> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self
            .send_json(Method::POST, api::LOGIN_PATH, Some(&payload), false)
            .await?;
        self.token = Some(auth.token.clone());
        Ok(auth)
    }

    /// Профиль авторизованного пользователя, включая предпочтения.
    ///
    /// Требует сохранённый токен.
    pub async fn get_user(&self) -> XploreClientResult<User> {
        self.require_token()?;
        self.send_json::<(), _>(Method::GET, api::USER_PATH, None, true)
            .await
    }

    /// Поиск по индексу ресурсов. Теги уходят повторяющимися параметрами
    /// `tags[]`; результаты приходят ранжированными, лучшие первыми.
    ///
    /// Требует сохранённый токен.
    pub async fn search(&self, query: &str, tags: &[String]) -> XploreClientResult<Vec<Resource>> {
        self.require_token()?;
        let path = api::search_path(query, tags);
        self.send_json::<(), _>(Method::GET, &path, None, true).await
    }

    /// Список персональных рекомендаций.
    ///
    /// Требует сохранённый токен.
    pub async fn recommendations(&self) -> XploreClientResult<Vec<Resource>> {
        self.require_token()?;
        self.send_json::<(), _>(Method::GET, api::RECOMMENDATIONS_PATH, None, true)
            .await
    }

    /// История просмотров пользователя, недавние первыми.
    ///
    /// Требует сохранённый токен.
    pub async fn history(&self) -> XploreClientResult<Vec<Resource>> {
        self.require_token()?;
        self.send_json::<(), _>(Method::GET, api::HISTORY_PATH, None, true)
            .await
    }

    /// Дописывает посещённый ресурс в историю пользователя.
    ///
    /// Требует сохранённый токен.
    pub async fn add_history(&self, resource_url: &str) -> XploreClientResult<AckResponse> {
        self.require_token()?;
        let payload = AddHistoryRequest {
            resource_url: resource_url.to_string(),
        };
        self.send_json(Method::POST, api::HISTORY_PATH, Some(&payload), true)
            .await
    }

    /// Сводная статистика индекса.
    ///
    /// Требует сохранённый токен.
    pub async fn admin_stats(&self) -> XploreClientResult<AdminStats> {
        self.require_token()?;
        self.send_json::<(), _>(Method::GET, api::ADMIN_STATS_PATH, None, true)
            .await
    }

    /// Одна страница админ-таблицы ресурсов.
    ///
    /// Требует сохранённый токен.
    pub async fn admin_resources(
        &self,
        page: u32,
        per_page: u32,
    ) -> XploreClientResult<AdminResourcesPage> {
        self.require_token()?;
        let path = api::admin_resources_path(page, per_page);
        self.send_json::<(), _>(Method::GET, &path, None, true).await
    }

    fn endpoint(&self, path: &str) -> String {
        api::endpoint(&self.base_url, path)
    }

    async fn decode_error(response: reqwest::Response) -> XploreClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        XploreClientError::from_http_status(status, Some(message))
    }

    /// универсальный helper для отправки запросов с json-payload
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: Option<&TReq>,
        authed: bool,
    ) -> XploreClientResult<TRes>
    where
        TReq: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if authed {
            let token = self.require_token()?;
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(XploreClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(XploreClientError::from_reqwest)
    }

    fn require_token(&self) -> XploreClientResult<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or(XploreClientError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = XploreClient::new("http://localhost:5000/api/");
        assert_eq!(
            client.endpoint("/search?query=x"),
            "http://localhost:5000/api/search?query=x"
        );
    }

    #[test]
    fn token_lifecycle_round_trips() {
        let mut client = XploreClient::new("http://localhost:5000/api");
        assert!(client.get_token().is_none());

        client.set_token("t1");
        assert_eq!(client.get_token(), Some("t1"));

        client.clear_token();
        assert!(client.get_token().is_none());
    }

    #[test]
    fn require_token_rejects_missing_or_blank_token() {
        let mut client = XploreClient::new("http://localhost:5000/api");
        assert!(matches!(
            client.require_token(),
            Err(XploreClientError::Unauthorized)
        ));

        client.set_token("   ");
        assert!(matches!(
            client.require_token(),
            Err(XploreClientError::Unauthorized)
        ));

        client.set_token("t1");
        assert_eq!(client.require_token().expect("token is set"), "t1");
    }
}
