//! 報酬アイテム名の抽出
//!
//! 祈願種別ごとのパターンで本文テキストから表示名を取り出す。
//! いずれも初出順を保った重複排除を行い、件数の不変条件を検証する。

use regex::Regex;

/// 角色名 + 元素サフィックスのパターン。名前部分だけを取り出す
const CHARACTER_PATTERN: &str = r"([\x{4e00}-\x{9fa5}]+)\((?:风|火|水|冰|雷|岩|草)\)";
/// 中黒に続く武器名のパターン
const WEAPON_PATTERN: &str = r"·([\x{4e00}-\x{9fa5}]+)";

/// 集録祈願のフィールド見出し。次の見出し（末尾は脚注マーカー）までを取り出す
const CHRONICLED_RARE_CHARACTERS: &str = "5星角色：(?P<r>.*?)5星武器：";
const CHRONICLED_RARE_WEAPONS: &str = "5星武器：(?P<r>.*?)4星角色：";
const CHRONICLED_COMMON_CHARACTERS: &str = "4星角色：(?P<r>.*?)4星武器：";
const CHRONICLED_COMMON_WEAPONS: &str = "4星武器：(?P<r>.*?)※";

/// レアリティ別に分けた表示名リスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemNames {
    /// 5 星（ピックアップ上位）
    pub rare: Vec<String>,
    /// 4 星
    pub common: Vec<String>,
}

/// 抽出エラー
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractError {
    #[error("character banner must have 4 characters, found {found}")]
    CharacterCount { found: usize },
    #[error("weapon banner must have 7 weapons, found {found}")]
    WeaponCount { found: usize },
    /// 集録祈願の見出しキャプチャ失敗。検索対象と使ったパターンを持ち回る
    #[error("content did not match pattern: pattern={pattern} text={text}")]
    PatternMismatch { pattern: String, text: String },
}

/// 固定パターン専用のコンパイルヘルパー
fn pattern(p: &str) -> Regex {
    Regex::new(p).expect("fixed pattern compiles")
}

/// 初出順を保って重複を除く
fn dedup_keep_order(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// 角色祈願: 元素サフィックス付きの名前をちょうど 4 件抽出する。
/// 先頭 1 件が 5 星、残り 3 件が 4 星。
pub fn extract_character_names(content_text: &str) -> Result<ItemNames, ExtractError> {
    let re = pattern(CHARACTER_PATTERN);
    let names = dedup_keep_order(
        re.captures_iter(content_text)
            .map(|caps| caps[1].to_string()),
    );
    if names.len() != 4 {
        return Err(ExtractError::CharacterCount { found: names.len() });
    }
    let mut names = names;
    let common = names.split_off(1);
    Ok(ItemNames { rare: names, common })
}

/// 武器祈願: 中黒に続く名前をちょうど 7 件抽出する。
/// 先頭 2 件が 5 星、残り 5 件が 4 星。
pub fn extract_weapon_names(content_text: &str) -> Result<ItemNames, ExtractError> {
    let re = pattern(WEAPON_PATTERN);
    let names = dedup_keep_order(
        re.captures_iter(content_text)
            .map(|caps| caps[1].to_string()),
    );
    if names.len() != 7 {
        return Err(ExtractError::WeaponCount { found: names.len() });
    }
    let mut names = names;
    let common = names.split_off(2);
    Ok(ItemNames { rare: names, common })
}

/// 集録祈願: 空白を全て除いた本文から 4 区間を取り出し、
/// 5 星は角色→武器、4 星も角色→武器の順で結合する。
pub fn extract_chronicled_names(content_text: &str) -> Result<ItemNames, ExtractError> {
    let text: String = content_text.chars().filter(|c| !c.is_whitespace()).collect();
    let rare_characters = capture_section(&text, CHRONICLED_RARE_CHARACTERS)?;
    let rare_weapons = capture_section(&text, CHRONICLED_RARE_WEAPONS)?;
    let common_characters = capture_section(&text, CHRONICLED_COMMON_CHARACTERS)?;
    let common_weapons = capture_section(&text, CHRONICLED_COMMON_WEAPONS)?;
    Ok(ItemNames {
        rare: dedup_keep_order(rare_characters.into_iter().chain(rare_weapons)),
        common: dedup_keep_order(common_characters.into_iter().chain(common_weapons)),
    })
}

/// 見出し間の 1 区間をキャプチャして `/` 区切りで分割する
fn capture_section(text: &str, section_pattern: &str) -> Result<Vec<String>, ExtractError> {
    let re = pattern(section_pattern);
    let caps = re
        .captures(text)
        .ok_or_else(|| ExtractError::PatternMismatch {
            pattern: section_pattern.to_string(),
            text: text.to_string(),
        })?;
    Ok(caps["r"].split('/').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_four_names_split_one_three() {
        let text = "300%概率提升角色：·5星角色「茜特菈莉(冰)」·4星角色「香菱(火)」「重云(冰)」「北斗(雷)」茜特菈莉(冰)香菱(火)重云(冰)北斗(雷)";
        let names = extract_character_names(text).unwrap();
        assert_eq!(names.rare, vec!["茜特菈莉"]);
        assert_eq!(names.common, vec!["香菱", "重云", "北斗"]);
    }

    #[test]
    fn test_character_dedup_keeps_first_seen_order() {
        let text = "甲(风)乙(火)甲(风)丙(水)丁(冰)";
        let names = extract_character_names(text).unwrap();
        assert_eq!(names.rare, vec!["甲"]);
        assert_eq!(names.common, vec!["乙", "丙", "丁"]);
    }

    #[test]
    fn test_character_wrong_count_is_error() {
        let err = extract_character_names("甲(风)乙(火)").unwrap_err();
        assert!(matches!(err, ExtractError::CharacterCount { found: 2 }));
    }

    #[test]
    fn test_character_count_never_truncates() {
        let err = extract_character_names("甲(风)乙(火)丙(水)丁(冰)戊(雷)").unwrap_err();
        assert!(matches!(err, ExtractError::CharacterCount { found: 5 }));
    }

    #[test]
    fn test_weapon_seven_names_split_two_five() {
        let text = "5星武器：·雾切之回光·磐岩结绿4星武器：·西风剑·祭礼剑·匣里龙吟·笛剑·黎明神剑";
        let names = extract_weapon_names(text).unwrap();
        assert_eq!(names.rare, vec!["雾切之回光", "磐岩结绿"]);
        assert_eq!(
            names.common,
            vec!["西风剑", "祭礼剑", "匣里龙吟", "笛剑", "黎明神剑"]
        );
    }

    #[test]
    fn test_weapon_wrong_count_is_error() {
        let err = extract_weapon_names("·甲剑·乙弓").unwrap_err();
        assert!(matches!(err, ExtractError::WeaponCount { found: 2 }));
    }

    #[test]
    fn test_chronicled_merges_characters_then_weapons() {
        let text = "5星角色：甲/乙5星武器：斩山之刃/贯虹之槊4星角色：丙/丁4星武器：弓藏/流浪乐章※脚注";
        let names = extract_chronicled_names(text).unwrap();
        assert_eq!(names.rare, vec!["甲", "乙", "斩山之刃", "贯虹之槊"]);
        assert_eq!(names.common, vec!["丙", "丁", "弓藏", "流浪乐章"]);
    }

    #[test]
    fn test_chronicled_strips_all_whitespace_first() {
        let text = "5星角色：甲 / 乙\n5星武器：A/B\n4星角色：丙/丁\n4星武器：C/D\n※";
        let names = extract_chronicled_names(text).unwrap();
        assert_eq!(names.rare, vec!["甲", "乙", "A", "B"]);
        assert_eq!(names.common, vec!["丙", "丁", "C", "D"]);
    }

    #[test]
    fn test_chronicled_missing_section_is_error() {
        let text = "5星角色：甲/乙5星武器：A/B4星角色：丙/丁";
        let err = extract_chronicled_names(text).unwrap_err();
        match err {
            ExtractError::PatternMismatch { pattern, .. } => {
                assert!(pattern.contains("4星武器"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
