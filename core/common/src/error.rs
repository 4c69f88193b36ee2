//! エラーハンドリング
//!
//! アプリ全体で使うエラー型。分類ごとに sysexits 準拠の終了コードへ対応付ける。

/// アプリケーションエラー
///
/// ドメイン層の詳細なエラー（thiserror の enum）は usecase 境界でこの型に変換する。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// 入力データの形式不正（EX_DATAERR）
    #[error("{0}")]
    Data(String),
    /// 外部サービスへの HTTP 要求失敗（EX_UNAVAILABLE）
    #[error("{0}")]
    Http(String),
    /// 内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
    /// ファイル I/O 失敗（EX_IOERR）
    #[error("{0}")]
    Io(String),
    /// JSON の生成・解析失敗（EX_DATAERR）
    #[error("{0}")]
    Json(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// 使い方の誤りか（main が usage を表示するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// sysexits 準拠の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Data(_) | Error::Json(_) => 65,
            Error::Http(_) => 69,
            Error::System(_) => 70,
            Error::Io(_) => 74,
        }
    }
}
