//! お知らせの分類
//!
//! タイトル・サブタイトル・本文テキストから祈願の種別を判定する。
//! 確率 UP マーカーを含むお知らせは必ず角色か武器のどちらかであり、
//! どちらにも該当しなければ分類エラーとする。

use crate::domain::pool::PoolType;

/// タイトル中の確率 UP マーカー
const RATE_UP_TITLE_MARKER: &str = "概率UP";
/// 本文中の角色確率 UP マーカー
const CHARACTER_RATE_UP_MARKER: &str = "概率提升角色";
/// 角色活动祈愿（標準）のフッター
const CHARACTER_POOL_MARKER: &str = "※ 本祈愿属于「角色活动祈愿」";
/// 角色活动祈愿-2 のフッター
const CHARACTER_POOL_2_MARKER: &str = "※ 本祈愿属于「角色活动祈愿-2」";
/// サブタイトル中の武器祈願マーカー
const WEAPON_SUBTITLE_MARKER: &str = "神铸赋形";
/// 本文中の集録祈願マーカー
const CHRONICLED_MARKER: &str = "本祈愿属于「集录祈愿」";

/// 角色活动祈愿のフェーズ（標準 / -2）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterPhase {
    Standard,
    Second,
}

/// 分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Character(CharacterPhase),
    Weapon,
    Chronicled,
    /// 祈願ではないお知らせ。エラーではなく、その 1 件を黙ってスキップする
    NotABanner,
}

impl BannerKind {
    pub fn pool_type(&self) -> PoolType {
        match self {
            BannerKind::Character(CharacterPhase::Standard) => PoolType::CharacterEvent,
            BannerKind::Character(CharacterPhase::Second) => PoolType::CharacterEvent2,
            BannerKind::Weapon => PoolType::WeaponEvent,
            BannerKind::Chronicled => PoolType::Chronicled,
            BannerKind::NotABanner => PoolType::None,
        }
    }
}

/// 分類エラー
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifyError {
    /// 確率 UP タイトルなのに角色とも武器とも判定できない
    #[error("unknown banner type: subtitle={subtitle}")]
    UnknownBannerType { subtitle: String },
}

/// お知らせを分類する
///
/// `content_text` はタグ除去済みの本文テキスト。
pub fn classify(
    title: &str,
    subtitle: &str,
    content_text: &str,
) -> Result<BannerKind, ClassifyError> {
    if title.contains(RATE_UP_TITLE_MARKER) {
        if content_text.contains(CHARACTER_RATE_UP_MARKER) {
            // -2 のフッターは標準フッターの部分文字列ではないので順不同で判定できる
            if content_text.contains(CHARACTER_POOL_2_MARKER) {
                return Ok(BannerKind::Character(CharacterPhase::Second));
            }
            if content_text.contains(CHARACTER_POOL_MARKER) {
                return Ok(BannerKind::Character(CharacterPhase::Standard));
            }
            return Err(ClassifyError::UnknownBannerType {
                subtitle: subtitle.to_string(),
            });
        }
        if subtitle.contains(WEAPON_SUBTITLE_MARKER) {
            return Ok(BannerKind::Weapon);
        }
        return Err(ClassifyError::UnknownBannerType {
            subtitle: subtitle.to_string(),
        });
    }
    if content_text.contains(CHRONICLED_MARKER) {
        return Ok(BannerKind::Chronicled);
    }
    Ok(BannerKind::NotABanner)
}
