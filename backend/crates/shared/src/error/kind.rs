//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// 外部に見せるステータスは意図的に少数に絞っている。
/// 内部のエラー種別は各クレートでこのいずれかに畳み込まれる。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: malformed header, weak password, duplicate user name
    BadRequest,
    /// 401 - Unauthorized: blocked account
    Unauthorized,
    /// 404 - Not Found: missing entity, ownership mismatch, failed token check
    NotFound,
    /// 500 - Internal Server Error: storage or configuration failure
    InternalServerError,
    /// 503 - Service Unavailable: storage pool exhausted, closed or unreachable
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// HTTP ステータスの標準的な理由フレーズ
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Message used when the caller did not supply one.
    ///
    /// These are the only texts a client sees for opaque rejections.
    #[inline]
    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request.",
            ErrorKind::Unauthorized => "The request requires user authentication.",
            ErrorKind::NotFound => "Failure to retrieve objects",
            ErrorKind::InternalServerError | ErrorKind::ServiceUnavailable => {
                "The server encountered an unexpected condition which prevented it from fulfilling the request."
            }
        }
    }

    /// 5xx系のエラーは `true`。ログに記録すべきもの。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Whether the response must carry a `WWW-Authenticate: Bearer` challenge
    #[inline]
    pub const fn requires_challenge(&self) -> bool {
        matches!(self, ErrorKind::Unauthorized)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
