use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Запрошенный пост или категория не найдены (или пост не опубликован).
    #[error("not found")]
    NotFound,

    /// Сервер отклонил запрос: незаполненные или некорректные поля.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Сообщение сервера.
        message: String,
        /// Незаполненные поля формы, если сервер их перечислил.
        fields: Vec<String>,
    },

    /// Сервер принял форму, но не смог доставить письмо.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_http_status(
        status: reqwest::StatusCode,
        message: Option<String>,
        fields: Vec<String>,
    ) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            reqwest::StatusCode::BAD_GATEWAY => Self::Delivery(message),
            _ => Self::InvalidRequest { message, fields },
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None, Vec::new());
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::BlogClientError;

    #[test]
    fn bad_gateway_is_delivery_error() {
        let err = BlogClientError::from_http_status(
            reqwest::StatusCode::BAD_GATEWAY,
            Some("message delivery failed".to_string()),
            Vec::new(),
        );
        assert!(matches!(err, BlogClientError::Delivery(msg) if msg == "message delivery failed"));
    }

    #[test]
    fn bad_request_keeps_missing_fields() {
        let err = BlogClientError::from_http_status(
            reqwest::StatusCode::BAD_REQUEST,
            None,
            vec!["name".to_string()],
        );
        match err {
            BlogClientError::InvalidRequest { message, fields } => {
                assert_eq!(message, "http status 400 Bad Request");
                assert_eq!(fields, vec!["name"]);
            }
            _ => panic!("expected InvalidRequest"),
        }
    }
}
