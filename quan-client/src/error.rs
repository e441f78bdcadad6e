//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request with a message
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Toast text shown to staff for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(e) if e.is_timeout() => "Máy chủ phản hồi quá lâu, vui lòng thử lại".into(),
            Self::Http(_) => "Không thể kết nối tới máy chủ".into(),
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::Api { .. } => "Máy chủ từ chối yêu cầu".into(),
            Self::Unauthorized => "Phiên đăng nhập đã hết hạn, vui lòng đăng nhập lại".into(),
            Self::Forbidden(_) => "Bạn không có quyền thực hiện thao tác này".into(),
            Self::NotFound(_) => "Không tìm thấy dữ liệu".into(),
            Self::Validation(msg) => msg.clone(),
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "Dữ liệu phản hồi không hợp lệ".into()
            }
            Self::Internal(_) => "Đã xảy ra lỗi, vui lòng thử lại".into(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ClientError::Api { status: 409, message: "Bàn đang có đơn".into() };
        assert_eq!(err.user_message(), "Bàn đang có đơn");

        let err = ClientError::Api { status: 500, message: String::new() };
        assert_eq!(err.user_message(), "Máy chủ từ chối yêu cầu");

        let err = ClientError::Validation("Bàn đã được đặt trước".into());
        assert_eq!(err.user_message(), "Bàn đã được đặt trước");

        assert_eq!(ClientError::NotFound("order 3".into()).user_message(), "Không tìm thấy dữ liệu");
    }
}
