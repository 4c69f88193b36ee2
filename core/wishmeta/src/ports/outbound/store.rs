//! 出力ドキュメント保存 Outbound ポート

use crate::domain::BannerData;
use common::error::Error;

/// 集約結果を永続化する Outbound ポート
///
/// 実装は `adapter::JsonBannerStore`（整形 JSON をファイルへ書き出す）など。
/// 保存形式はアダプターの関心事で、usecase はドキュメントの構造だけを保証する。
pub trait BannerStore: Send + Sync {
    fn save(&self, data: &BannerData) -> Result<(), Error>;
}
