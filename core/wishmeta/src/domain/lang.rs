//! 対応ロケールの定義
//!
//! zh-cn を基準ロケールとし、残り 14 ロケールへ固定順で展開する。

use std::fmt;

/// 対応ロケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    ZhCn,
    EnUs,
    ZhTw,
    Ja,
    Ko,
    Es,
    Fr,
    Ru,
    Th,
    Vi,
    De,
    Id,
    Pt,
    Tr,
    It,
}

impl Lang {
    /// 解析の基準となるロケール
    pub const BASE: Lang = Lang::ZhCn;

    /// 基準ロケール以外の展開先（この順で 1 件ずつ取得する）
    pub const TARGETS: [Lang; 14] = [
        Lang::EnUs,
        Lang::ZhTw,
        Lang::Ja,
        Lang::Ko,
        Lang::Es,
        Lang::Fr,
        Lang::Ru,
        Lang::Th,
        Lang::Vi,
        Lang::De,
        Lang::Id,
        Lang::Pt,
        Lang::Tr,
        Lang::It,
    ];

    /// API とも出力ドキュメントとも共通のロケールコード
    pub fn code(&self) -> &'static str {
        match self {
            Lang::ZhCn => "zh-cn",
            Lang::EnUs => "en-us",
            Lang::ZhTw => "zh-tw",
            Lang::Ja => "ja",
            Lang::Ko => "ko",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::Ru => "ru",
            Lang::Th => "th",
            Lang::Vi => "vi",
            Lang::De => "de",
            Lang::Id => "id",
            Lang::Pt => "pt",
            Lang::Tr => "tr",
            Lang::It => "it",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
