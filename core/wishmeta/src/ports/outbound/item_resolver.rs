//! アイテム ID 解決 Outbound ポート

use common::error::Error;

/// 表示名（zh-cn）を数値 ID へ解決する Outbound ポート
///
/// 未解決の名前は `0` を返す。`0` は出力にそのまま残す仕様で、
/// ここで補正してはならない。`Err` は HTTP 失敗などの転送エラーのみ。
pub trait ItemIdResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<i64, Error>;
}
