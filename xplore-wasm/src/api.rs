use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use xplore_core::api as paths;
use xplore_core::error::{ClientError, ClientResult, ErrorBody};
use xplore_core::models::{
    AddHistoryRequest, AdminResourcesPage, AdminStats, AuthResponse, LoginRequest,
    RegisterRequest, Resource,
};
use xplore_core::routes::Route;

use crate::state::AppState;

const API_BASE_URL: &str = match option_env!("XPLORE_API_BASE_URL") {
    Some(value) => value,
    None => "/api",
};

const ADMIN_PAGE_SIZE: u32 = 20;

fn endpoint(path: &str) -> String {
    paths::endpoint(API_BASE_URL, path)
}

fn network_error(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

#[derive(Debug, Deserialize)]
struct Ack {
    #[allow(dead_code)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
/// Обёртка исходящих запросов: подставляет bearer-токен, когда он есть, и
/// централизует обработку сбоев.
///
/// Единственное место, где гасится сессия: 401 на запросе с токеном чистит
/// сессию, уводит на Login и пробрасывает `AuthExpired`; 401 без токена
/// (неудачный вход) остаётся обычной серверной ошибкой со своим сообщением.
pub(crate) struct ApiClient {
    state: AppState,
}

impl ApiClient {
    pub(crate) fn new(state: AppState) -> Self {
        Self { state }
    }

    pub(crate) async fn register(&self, payload: &RegisterRequest) -> ClientResult<()> {
        let _: Ack = self.send_post(paths::REGISTER_PATH, payload).await?;
        Ok(())
    }

    pub(crate) async fn login(&self, payload: &LoginRequest) -> ClientResult<AuthResponse> {
        self.send_post(paths::LOGIN_PATH, payload).await
    }

    pub(crate) async fn search(
        &self,
        query: &str,
        tags: &[String],
    ) -> ClientResult<Vec<Resource>> {
        self.send_get(&paths::search_path(query, tags)).await
    }

    pub(crate) async fn recommendations(&self) -> ClientResult<Vec<Resource>> {
        self.send_get(paths::RECOMMENDATIONS_PATH).await
    }

    pub(crate) async fn history(&self) -> ClientResult<Vec<Resource>> {
        self.send_get(paths::HISTORY_PATH).await
    }

    /// Best-effort запись в историю; вызывающие не ждут её и только логируют
    /// провал.
    pub(crate) async fn add_history(&self, resource_url: &str) -> ClientResult<()> {
        let payload = AddHistoryRequest {
            resource_url: resource_url.to_string(),
        };
        let _: Ack = self.send_post(paths::HISTORY_PATH, &payload).await?;
        Ok(())
    }

    pub(crate) async fn admin_stats(&self) -> ClientResult<AdminStats> {
        self.send_get(paths::ADMIN_STATS_PATH).await
    }

    pub(crate) async fn admin_resources(&self, page: u32) -> ClientResult<AdminResourcesPage> {
        self.send_get(&paths::admin_resources_path(page, ADMIN_PAGE_SIZE))
            .await
    }

    async fn send_get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = endpoint(path);
        let (builder, authed) = self.attach_token(Request::get(&url));
        let response = builder.send().await.map_err(network_error)?;
        self.handle(response, authed).await
    }

    async fn send_post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = endpoint(path);
        let (builder, authed) = self.attach_token(Request::post(&url));
        let request = builder.json(body).map_err(network_error)?;
        let response = request.send().await.map_err(network_error)?;
        self.handle(response, authed).await
    }

    /// Клиент никогда не опускает токен, если он есть.
    fn attach_token(&self, builder: RequestBuilder) -> (RequestBuilder, bool) {
        match self.state.token.get_untracked() {
            Some(token) => (
                builder.header("Authorization", &format!("Bearer {token}")),
                true,
            ),
            None => (builder, false),
        }
    }

    async fn handle<T: DeserializeOwned>(
        &self,
        response: Response,
        authed: bool,
    ) -> ClientResult<T> {
        if response.ok() {
            return response
                .json::<T>()
                .await
                .map_err(|err| ClientError::Decode(err.to_string()));
        }
        Err(self.classify_failure(response, authed).await)
    }

    async fn classify_failure(&self, response: Response, authed: bool) -> ClientError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);

        let err = ClientError::classify(status, authed, message);
        if err.is_auth_expired() {
            self.expire_session();
        }
        err
    }

    fn expire_session(&self) {
        log::warn!("session rejected by the server, logging out");
        self.state.clear_session();
        self.state.navigate(Route::Login);
    }
}
