//! バージョン表記の正規化
//!
//! 「月之N」形式の序数フレーズを数値バージョンへ対応付ける。
//! 対応表にない入力はそのまま返す（"6.5" のような数値リテラルを素通しする）。

/// 序数フレーズ → 数値バージョンの固定対応表
const VERSION_TABLE: [(&str, &str); 9] = [
    ("「月之一」", "6.0"),
    ("「月之二」", "6.1"),
    ("「月之三」", "6.2"),
    ("「月之四」", "6.3"),
    ("「月之五」", "6.4"),
    ("「月之六」", "6.5"),
    ("「月之七」", "6.6"),
    ("「月之八」", "6.7"),
    ("「月之九」", "6.8"),
];

/// バージョントークンを数値表記へ解決する
///
/// 部分文字列として序数フレーズを含めば対応する数値を返す。失敗しない。
pub fn resolve(token: &str) -> String {
    for (phrase, numeric) in VERSION_TABLE {
        if token.contains(phrase) {
            return numeric.to_string();
        }
    }
    token.to_string()
}

/// 数値バージョンに対応する序数フレーズ（逆引き）
pub fn ordinal_for(version: &str) -> Option<&'static str> {
    VERSION_TABLE
        .iter()
        .find(|(_, numeric)| *numeric == version)
        .map(|(phrase, _)| *phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_resolves_to_numeric() {
        assert_eq!(resolve("「月之一」"), "6.0");
        assert_eq!(resolve("「月之三」"), "6.2");
        assert_eq!(resolve("「月之九」"), "6.8");
    }

    #[test]
    fn test_numeric_passes_through() {
        assert_eq!(resolve("6.5"), "6.5");
    }

    #[test]
    fn test_unknown_phrase_passes_through() {
        assert_eq!(resolve("「月之十」"), "「月之十」");
    }

    #[test]
    fn test_containment_is_enough() {
        assert_eq!(resolve("「月之三」版本更新后"), "6.2");
    }

    #[test]
    fn test_ordinal_for_reverse_lookup() {
        assert_eq!(ordinal_for("6.2"), Some("「月之三」"));
        assert_eq!(ordinal_for("5.0"), None);
    }
}
