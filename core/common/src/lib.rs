//! wishmeta 共通ライブラリ
//!
//! エラー型・構造化ログ・ファイルシステム抽象など、
//! ドメインに依存しない基盤をまとめる。

/// エラーハンドリング
pub mod error;

/// Outbound ポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
