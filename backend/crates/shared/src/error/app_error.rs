//! Application Error - Unified error type for the application
//!
//! Defines the [`AppError`] struct and the [`ErrorBody`] JSON shape every
//! error response is rendered with.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// プロジェクト全体で使用する標準エラー型です。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `title` - レスポンスの `error` フィールド
/// * `message` - 詳細メッセージ（オプション）
/// * `field_errors` - 入力フィールドごとの検証メッセージ
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::not_found();
/// assert_eq!(err.title(), "Resource not found");
///
/// let err = AppError::unprocessable("numberOfPeople", "The number of people field is required.");
/// assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
/// ```
pub struct AppError {
    kind: ErrorKind,
    title: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
    field_errors: BTreeMap<String, Vec<String>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// JSON error body
///
/// `{ "error": ..., "message": ..., "errors": { field: [messages] } }`.
/// `message` and `errors` are omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 種別の既定タイトルで新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            title: Cow::Borrowed(kind.default_title()),
            message: None,
            field_errors: BTreeMap::new(),
            source: None,
        }
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// 405 Method Not Allowed エラー
    #[inline]
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorKind::MethodNotAllowed)
    }

    /// 422 Unprocessable Entity エラー
    ///
    /// フィールド名と検証メッセージを一件登録し、同じ文をメッセージにします。
    pub fn unprocessable(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(ErrorKind::UnprocessableEntity)
            .with_message(message.clone())
            .with_field_error(field, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError).with_message(message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// `error` フィールドのタイトルを上書き
    #[inline]
    pub fn with_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
        self.title = title.into();
        self
    }

    /// 詳細メッセージを設定
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// フィールドの検証メッセージを追加
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    /// 元のエラーを設定（デバッグ用）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::AppError;
    /// use std::error::Error;
    ///
    /// let io_err = std::io::Error::other("connection reset");
    /// let err = AppError::internal("Database error").with_source(io_err);
    /// assert!(err.source().is_some());
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// フィールド名 → 検証メッセージ一覧
    #[inline]
    pub fn field_errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.field_errors
    }

    /// レスポンスボディを構築
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.title.to_string(),
            message: self.message.as_ref().map(|m| m.to_string()),
            errors: (!self.field_errors.is_empty()).then(|| self.field_errors.clone()),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("title", &self.title);
        if let Some(message) = &self.message {
            builder.field("message", message);
        }
        if !self.field_errors.is_empty() {
            builder.field("field_errors", &self.field_errors);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.title)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_title() {
        let err = AppError::new(ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.title(), "Resource not found");
        assert!(err.message().is_none());
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::not_found().status_code(), 404);
        assert_eq!(AppError::method_not_allowed().status_code(), 405);
        assert_eq!(AppError::unprocessable("f", "m").status_code(), 422);
        assert_eq!(AppError::internal("test").status_code(), 500);
    }

    #[test]
    fn test_unprocessable_records_field() {
        let err = AppError::unprocessable("numberOfPeople", "must be an integer");
        assert_eq!(err.message(), Some("must be an integer"));
        assert_eq!(
            err.field_errors().get("numberOfPeople"),
            Some(&vec!["must be an integer".to_string()])
        );
    }

    #[test]
    fn test_with_title() {
        let err = AppError::internal("Irregularity occurred: Deck is incomplete")
            .with_title("Irregularity occurred");
        assert_eq!(err.title(), "Irregularity occurred");
        assert_eq!(
            err.message(),
            Some("Irregularity occurred: Deck is incomplete")
        );
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AppError::internal("Failed to read file").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found();
        assert_eq!(err.to_string(), "[Not Found] Resource not found");

        let err = AppError::internal("boom");
        assert_eq!(
            err.to_string(),
            "[Internal Server Error] An unexpected error occurred: boom"
        );
    }

    #[test]
    fn test_body_omits_empty_parts() {
        let json = serde_json::to_value(AppError::not_found().to_body()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Resource not found" }));

        let json = serde_json::to_value(AppError::unprocessable("n", "bad").to_body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "The given data was invalid.",
                "message": "bad",
                "errors": { "n": ["bad"] }
            })
        );
    }
}
