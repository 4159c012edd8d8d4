use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки, которые представление наблюдает в цикле загрузки.
pub enum ClientError {
    /// Локальная валидация не прошла; запрос в сеть не отправлялся.
    #[error("{0}")]
    Validation(String),

    /// Запрос не завершился (connection refused, DNS, обрыв).
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил статусом вне 2xx.
    #[error("server error {status}: {message}")]
    Server {
        /// HTTP-статус ответа.
        status: u16,
        /// Сообщение из тела ошибки либо запасной текст по статусу.
        message: String,
    },

    /// Тело ответа не удалось декодировать.
    #[error("decode error: {0}")]
    Decode(String),

    /// 401 на запросе с bearer-токеном: сессия больше не действует.
    #[error("authorization expired")]
    AuthExpired,
}

/// Result-алиас, используемый по всему клиентскому ядру.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Deserialize)]
/// Форма тела ошибки, единая для всех ответов сервиса.
pub struct ErrorBody {
    /// Человекочитаемое сообщение, например `{"error": "Invalid email or password"}`.
    pub error: Option<String>,
}

impl ClientError {
    /// Строит серверную ошибку из статуса и необязательного сообщения тела.
    ///
    /// Пустые сообщения заменяются запасным текстом по статусу, чтобы
    /// представлению всегда было что показать.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback_message(status));
        Self::Server { status, message }
    }

    /// Классифицирует неуспешный HTTP-ответ.
    ///
    /// Единственный глобальный случай: 401 на запросе, который нёс
    /// bearer-токен, означает истёкшую сессию. 401 без токена (неверные
    /// логин/пароль) остаётся обычной серверной ошибкой со своим сообщением.
    pub fn classify(status: u16, authed: bool, message: Option<String>) -> Self {
        if status == 401 && authed {
            return Self::AuthExpired;
        }
        Self::from_status(status, message)
    }

    /// Истинно для единственной ошибки, обрабатываемой централизованно.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// Текст, который представление показывает inline. Сообщения валидации и
    /// сервера проходят как есть; транспортные сбои сводятся к общему тексту.
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Server { message, .. } => message.clone(),
            Self::Network(_) => "Network error. Please check your connection and try again.".to_string(),
            Self::Decode(_) => "Received an unexpected response from the server.".to_string(),
            Self::AuthExpired => "Your session has expired. Please log in again.".to_string(),
        }
    }
}

fn fallback_message(status: u16) -> String {
    match status {
        400 => "Invalid request".to_string(),
        401 => "Invalid credentials".to_string(),
        403 => "You do not have access to this page".to_string(),
        404 => "Not found".to_string(),
        409 => "Conflict: the account may already exist".to_string(),
        500..=599 => "Server error. Please try again later.".to_string(),
        _ => format!("HTTP error {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_keeps_server_message() {
        let err = ClientError::from_status(409, Some("Email already exists".to_string()));
        match err {
            ClientError::Server { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Email already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_status_falls_back_on_blank_message() {
        let err = ClientError::from_status(503, Some("   ".to_string()));
        match err {
            ClientError::Server { message, .. } => {
                assert_eq!(message, "Server error. Please try again later.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_message_passes_validation_text_through() {
        let err = ClientError::Validation("Passwords do not match".to_string());
        assert_eq!(err.display_message(), "Passwords do not match");
    }

    #[test]
    fn classify_expires_session_only_for_authed_401() {
        let err = ClientError::classify(401, true, Some("Token has expired".to_string()));
        assert_eq!(err, ClientError::AuthExpired);
        assert!(err.is_auth_expired());
    }

    #[test]
    fn classify_keeps_login_failure_message_intact() {
        let err = ClientError::classify(401, false, Some("Invalid email or password".to_string()));
        match err {
            ClientError::Server { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid email or password");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn classify_treats_other_authed_statuses_as_server_errors() {
        let forbidden = ClientError::classify(403, true, None);
        assert!(!forbidden.is_auth_expired());
        assert!(matches!(forbidden, ClientError::Server { status: 403, .. }));

        let unavailable = ClientError::classify(503, true, None);
        assert!(matches!(
            unavailable,
            ClientError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn only_auth_expired_is_global() {
        assert!(ClientError::AuthExpired.is_auth_expired());
        assert!(!ClientError::Network("refused".to_string()).is_auth_expired());
        assert!(!ClientError::from_status(401, None).is_auth_expired());
    }
}
