//! 祈願名の正規化
//!
//! サブタイトルからロケール固有の飾り（引用符・定型の前置き・末尾の助詞）を
//! 除いて正規の祈願名にする。除去はすべてリテラルの置換で、ロケールごとの
//! 順序付きリストをデータとして持つ。順序が意味を持つのは、先の除去で初めて
//! 後の除去対象が露出するケースのみ。

use crate::domain::lang::Lang;

/// ロケールごとの除去リスト（この順で適用する）
fn removals(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::ZhCn => &["」祈愿", "「"],
        Lang::EnUs => &["Event Wish - "],
        Lang::ZhTw => &["」祈願", "「"],
        Lang::Ja => &["イベント祈願<br />", "集録祈願<br />", "「", "」"],
        Lang::Ko => &["「", "」 기원", " 기원", "」"],
        Lang::Es => &["Gachapón «", "»"],
        // フランス語は « » の内側に NBSP を使う
        Lang::Fr => &["Vœux « ", "\u{a0}»", "\u{a0}"],
        Lang::Ru => &["Молитва «", "»", "Молитва: "],
        Lang::Th => &["การอธิษฐาน \"", "\""],
        Lang::Vi => &["Cầu Nguyện \"", "\"", "Cầu Nguyện "],
        Lang::De => &["Gebet „", "“"],
        Lang::Id => &["Event Permohonan \"", "\"", "Event Permohonan "],
        Lang::Pt => &["Oração \"", "\"", "Oração "],
        Lang::Tr => &["\" Etkinliği Dileği", " Etkinliği Dileği", "\""],
        Lang::It => &["Desiderio "],
    }
}

/// サブタイトルを正規の祈願名にする
pub fn canonical_banner_name(lang: Lang, subtitle: &str) -> String {
    let mut name = subtitle.to_string();
    for target in removals(lang) {
        name = name.replace(target, "");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zh_cn() {
        assert_eq!(canonical_banner_name(Lang::ZhCn, "「浮生孰来」祈愿"), "浮生孰来");
    }

    #[test]
    fn test_zh_tw() {
        assert_eq!(canonical_banner_name(Lang::ZhTw, "「浮生孰來」祈願"), "浮生孰來");
    }

    #[test]
    fn test_en_us() {
        assert_eq!(
            canonical_banner_name(Lang::EnUs, "Event Wish - Ballad in Goblets"),
            "Ballad in Goblets"
        );
    }

    #[test]
    fn test_ja_with_literal_br() {
        assert_eq!(
            canonical_banner_name(Lang::Ja, "イベント祈願<br />「白鷺の庭」"),
            "白鷺の庭"
        );
    }

    #[test]
    fn test_ko_trailing_particle() {
        assert_eq!(canonical_banner_name(Lang::Ko, "「운명의 궤적」 기원"), "운명의 궤적");
    }

    #[test]
    fn test_fr_uses_narrow_spaces() {
        assert_eq!(
            canonical_banner_name(Lang::Fr, "Vœux « Ballade en gobelets\u{a0}»"),
            "Ballade en gobelets"
        );
    }

    #[test]
    fn test_es_guillemets() {
        assert_eq!(
            canonical_banner_name(Lang::Es, "Gachapón «Balada en copas»"),
            "Balada en copas"
        );
    }

    #[test]
    fn test_tr_trailing_phrase_exposes_quote() {
        assert_eq!(
            canonical_banner_name(Lang::Tr, "\"Kadehteki Balad\" Etkinliği Dileği"),
            "Kadehteki Balad"
        );
    }

    #[test]
    fn test_idempotent_for_every_lang() {
        let samples = [
            (Lang::ZhCn, "「浮生孰来」祈愿"),
            (Lang::EnUs, "Event Wish - Ballad in Goblets"),
            (Lang::ZhTw, "「浮生孰來」祈願"),
            (Lang::Ja, "イベント祈願<br />「白鷺の庭」"),
            (Lang::Ko, "「운명의 궤적」 기원"),
            (Lang::Es, "Gachapón «Balada en copas»"),
            (Lang::Fr, "Vœux « Ballade en gobelets\u{a0}»"),
            (Lang::Ru, "Молитва «Баллада в кубках»"),
            (Lang::Th, "การอธิษฐาน \"บทกวีแห่งจอกเหล้า\""),
            (Lang::Vi, "Cầu Nguyện \"Bài Ca Trong Ly\""),
            (Lang::De, "Gebet „Ballade in Bechern“"),
            (Lang::Id, "Event Permohonan \"Balada dalam Piala\""),
            (Lang::Pt, "Oração \"Balada nas Taças\""),
            (Lang::Tr, "\"Kadehteki Balad\" Etkinliği Dileği"),
            (Lang::It, "Desiderio Ballata nei calici"),
        ];
        for (lang, subtitle) in samples {
            let once = canonical_banner_name(lang, subtitle);
            let twice = canonical_banner_name(lang, &once);
            assert_eq!(once, twice, "normalization must be idempotent for {lang}");
            assert!(!once.is_empty());
        }
    }
}
