//! HTML のテキスト化（タグ除去と実体参照の復元）
//!
//! お知らせ本文は HTML で届く。タグを除去したあとに実体参照を復元するため、
//! `&lt;t class="t_lc"&gt;` のようにエスケープされた時刻マーカーは
//! リテラルの `<t class="t_lc">` としてテキスト側に残る。時刻抽出の
//! テンプレートはこれを前提にしている。
//!
//! 空白の正規化は行わない。隣接するタグの中身は区切りなしで連結され、
//! 「〓祈愿介绍〓祈愿时间…」のような見出しの連結に各パターンが依存する。

/// タグを除去し、実体参照を復元したテキストを返す
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    decode_entities(&out)
}

/// 最小限の実体参照の復元。`&amp;` は二重復元を避けるため最後に置換する。
fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_without_separator() {
        assert_eq!(strip_tags("<p>〓祈愿介绍〓</p><p>祈愿时间</p>"), "〓祈愿介绍〓祈愿时间");
    }

    #[test]
    fn test_escaped_time_marker_survives() {
        let html = r#"<p>&lt;t class="t_lc"&gt;2025/03/12 06:00:00&lt;/t&gt;</p>"#;
        assert_eq!(
            strip_tags(html),
            r#"<t class="t_lc">2025/03/12 06:00:00</t>"#
        );
    }

    #[test]
    fn test_keeps_whitespace_in_text_nodes() {
        assert_eq!(strip_tags("<p>a b</p>\n<p>c</p>"), "a b\nc");
    }

    #[test]
    fn test_amp_decoded_last() {
        // &amp;lt; はリテラルの「&lt;」であって「<」ではない
        assert_eq!(strip_tags("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_attributes_inside_tags_are_dropped() {
        assert_eq!(strip_tags(r#"<div class="roster"><span>甲</span></div>"#), "甲");
    }
}
