use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Text shown to the user. Server-supplied messages win over transport
    /// details, configuration problems fall back to the generic text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Network(detail) if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(e: wasm_bindgen::JsValue) -> Self {
        ApiError::Browser(format!("{:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = ApiError::Rejected { status: 422, message: "Email already registered".into() };
        assert_eq!(err.user_message("fallback"), "Email already registered");
    }

    #[test]
    fn empty_or_internal_errors_use_fallback() {
        let empty = ApiError::Rejected { status: 500, message: String::new() };
        assert_eq!(empty.user_message("Try again"), "Try again");
        assert_eq!(ApiError::NotConfigured("API_URL").user_message("Try again"), "Try again");
        assert_eq!(ApiError::Decode("eof".into()).user_message("Try again"), "Try again");
    }

    #[test]
    fn network_detail_is_shown() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("fallback"), "connection refused");
    }
}
