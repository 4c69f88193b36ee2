//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// 更新ランを実行する Inbound ポート
///
/// main/cli はこの trait を実装した型の run を呼び出す。
pub trait RunRefresh: Send + Sync {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
