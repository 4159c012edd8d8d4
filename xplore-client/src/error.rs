use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки нативной библиотеки `xplore-client`.
pub enum XploreClientError {
    /// Транспортный сбой HTTP (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Требуется или истекла авторизация (нет/невалиден токен, 401/403).
    #[error("unauthorized")]
    Unauthorized,

    /// Запрошенный ресурс не существует.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос или бизнес-ошибка валидации от сервера.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result операций `xplore-client`.
pub type XploreClientResult<T> = Result<T, XploreClientError>;

impl XploreClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized
            }
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::InvalidRequest(message)
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_common_business_errors() {
        let unauth =
            XploreClientError::from_http_status(reqwest::StatusCode::UNAUTHORIZED, None);
        assert!(matches!(unauth, XploreClientError::Unauthorized));

        let forbidden =
            XploreClientError::from_http_status(reqwest::StatusCode::FORBIDDEN, None);
        assert!(matches!(forbidden, XploreClientError::Unauthorized));

        let not_found = XploreClientError::from_http_status(reqwest::StatusCode::NOT_FOUND, None);
        assert!(matches!(not_found, XploreClientError::NotFound));

        let conflict = XploreClientError::from_http_status(
            reqwest::StatusCode::CONFLICT,
            Some("Email already exists".to_string()),
        );
        match conflict {
            XploreClientError::InvalidRequest(message) => {
                assert_eq!(message, "Email already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
