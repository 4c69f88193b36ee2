//! 祈願時間の抽出と相対開始時刻の解決
//!
//! 終了時刻は常に絶対時刻。開始時刻は絶対時刻か「X.Y版本更新后」の相対表記で、
//! 相対表記の場合は同一バッチ内の兄弟お知らせ（更新説明 → 維持予告の順）から
//! 実際の更新時刻を引き当てる。段階ごとの探索・抽出は独立した関数にしてあり、
//! ネストした例外処理ではなく明示的な列挙で結果を返す。

use crate::domain::announcement::Announcement;
use crate::domain::html;
use crate::domain::version;
use regex::Regex;

/// イベント祈願（角色 / 武器）の時間見出し
const EVENT_HEADER: &str = "〓祈愿介绍〓祈愿时间概率提升(?:角色|武器)（5星）概率提升(?:角色|武器)（4星）";
/// 集録祈願の時間見出し
const CHRONICLED_HEADER: &str = "〓祈愿介绍〓祈愿时间可定轨5星角色可定轨5星武器";

/// 見出しに続く開始・終了の共通部。開始は相対表記も受け付ける
const TIME_TAIL: &str = concat!(
    r#"(?:<t class="(?:t_lc|t_gl)">)?"#,
    r"(?P<start>(?:(?:\d\.\d|「月之[一二三四五六七八九]」)版本更新后)|(?:20\d{2}/\d{2}/\d{2} \d{2}:\d{2}(?::\d{2})?))",
    r#"(?:</t>)? ?~ ?<t class="(?:t_lc|t_gl)">"#,
    r"(?P<end>20\d{2}/\d{2}/\d{2} \d{2}:\d{2}(?::\d{2})?)"
);

/// 更新説明の本文から更新開始時刻を取り出すテンプレート
const PATCH_TIME_PATTERN: &str = concat!(
    r#"〓更新时间〓<t class="t_(?:gl|lc)"(?: contenteditable="false")?>"#,
    r"(?P<start>20\d{2}/\d{2}/\d{2} \d{2}:\d{2}(?::\d{2})?)",
    r"</t>开始"
);

/// 維持予告の本文から予定時刻を取り出すテンプレート
const FORECAST_TIME_PATTERN: &str = concat!(
    r#"预计将于<t class="t_(?:gl|lc)"(?: contenteditable="false")?>"#,
    r"(?P<start>20\d{2}/\d{2}/\d{2} \d{2}:\d{2}(?::\d{2})?)",
    r"</t>进行版本更新维护"
);

/// 開始時刻の相対表記マーカー
const RELATIVE_MARKER: &str = "版本更新后";
/// 更新説明のサブタイトル接尾辞
const PATCH_NOTES_SUFFIX: &str = "版本更新说明";
/// 維持予告のサブタイトル接尾辞
const FORECAST_SUFFIX: &str = "版本更新维护预告";

/// 開始時刻の表記
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartSpec {
    /// `YYYY/MM/DD HH:MM[:SS]` の絶対時刻
    Absolute(String),
    /// 「<version>版本更新后」。version は数値表記へ解決済み
    AfterUpdate { version: String },
}

/// 抽出した祈願時間
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: StartSpec,
    pub end: String,
}

/// 相対開始時刻の解決結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartResolution {
    /// 兄弟お知らせから実時刻を引き当てた
    Resolved(String),
    /// 更新説明も維持予告も無い。メンテナンス中とみなしラン全体を打ち切る
    UnderMaintenance,
}

/// 時間抽出エラー
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimeError {
    #[error("time window did not match: pattern={pattern} content={content}")]
    WindowMismatch { pattern: String, content: String },
    #[error("unknown version format in start time: {start}")]
    UnknownVersionFormat { start: String },
    /// 兄弟お知らせは見つかったが、その本文が内側のテンプレートに一致しない
    #[error("patch time did not match: pattern={pattern} content={content}")]
    PatchTimeMismatch { pattern: String, content: String },
    #[error("no update log found")]
    NoUpdateLog,
}

/// 固定パターン専用のコンパイルヘルパー
fn pattern(p: &str) -> Regex {
    Regex::new(p).expect("fixed pattern compiles")
}

/// 本文テキストから祈願時間を取り出す
///
/// エスケープ復元で残った `contenteditable` 属性を先に除去してから照合する。
pub fn extract_window(content_text: &str, chronicled: bool) -> Result<TimeWindow, TimeError> {
    let cleaned = content_text.replace(" contenteditable=\"false\"", "");
    let header = if chronicled { CHRONICLED_HEADER } else { EVENT_HEADER };
    let pattern_str = format!("{header}{TIME_TAIL}");
    let re = pattern(&pattern_str);
    let caps = re.captures(&cleaned).ok_or_else(|| TimeError::WindowMismatch {
        pattern: pattern_str.clone(),
        content: cleaned.clone(),
    })?;
    let start_raw = caps["start"].to_string();
    let end = caps["end"].to_string();
    if start_raw.contains(RELATIVE_MARKER) {
        let ver_re = pattern(r"^(\d\.\d|「月之[一二三四五六七八九]」)");
        let m = ver_re
            .captures(&start_raw)
            .ok_or_else(|| TimeError::UnknownVersionFormat {
                start: start_raw.clone(),
            })?;
        Ok(TimeWindow {
            start: StartSpec::AfterUpdate {
                version: version::resolve(&m[1]),
            },
            end,
        })
    } else {
        Ok(TimeWindow {
            start: StartSpec::Absolute(start_raw),
            end,
        })
    }
}

/// サブタイトルが「<version><suffix>」に一致する兄弟を探す。
/// version は数値表記・序数表記のどちらの綴りでもよい。
fn find_by_subtitle<'a>(
    version: &str,
    corpus: &'a [Announcement],
    suffix: &str,
) -> Option<&'a Announcement> {
    let numeric = format!("{version}{suffix}");
    let ordinal = version::ordinal_for(version).map(|phrase| format!("{phrase}{suffix}"));
    corpus
        .iter()
        .find(|ann| ann.subtitle == numeric || ordinal.as_deref() == Some(ann.subtitle.as_str()))
}

/// 更新説明のお知らせを探す
pub fn find_patch_notes<'a>(version: &str, corpus: &'a [Announcement]) -> Option<&'a Announcement> {
    find_by_subtitle(version, corpus, PATCH_NOTES_SUFFIX)
}

/// 維持予告のお知らせを探す
pub fn find_maintenance_forecast<'a>(
    version: &str,
    corpus: &'a [Announcement],
) -> Option<&'a Announcement> {
    find_by_subtitle(version, corpus, FORECAST_SUFFIX)
}

/// 更新説明の本文から更新開始時刻を取り出す
pub fn extract_patch_time(content_text: &str) -> Result<String, TimeError> {
    capture_start(content_text, PATCH_TIME_PATTERN)
}

/// 維持予告の本文から予定時刻を取り出す
pub fn extract_forecast_time(content_text: &str) -> Result<String, TimeError> {
    capture_start(content_text, FORECAST_TIME_PATTERN)
}

fn capture_start(content_text: &str, time_pattern: &str) -> Result<String, TimeError> {
    let re = pattern(time_pattern);
    let caps = re
        .captures(content_text)
        .ok_or_else(|| TimeError::PatchTimeMismatch {
            pattern: time_pattern.to_string(),
            content: content_text.to_string(),
        })?;
    Ok(caps["start"].to_string())
}

/// 相対開始時刻を兄弟お知らせから解決する
///
/// 更新説明 → 維持予告の順で探し、どちらも無ければ [`StartResolution::UnderMaintenance`]。
/// 兄弟が見つかったのに内側のテンプレートが一致しない場合はエラー。
pub fn resolve_relative_start(
    version: &str,
    corpus: &[Announcement],
) -> Result<StartResolution, TimeError> {
    if let Some(notes) = find_patch_notes(version, corpus) {
        let text = html::strip_tags(&notes.content);
        return Ok(StartResolution::Resolved(extract_patch_time(&text)?));
    }
    if let Some(forecast) = find_maintenance_forecast(version, corpus) {
        let text = html::strip_tags(&forecast.content);
        return Ok(StartResolution::Resolved(extract_forecast_time(&text)?));
    }
    Ok(StartResolution::UnderMaintenance)
}

/// 絶対時刻で始まる祈願の version を推定する
///
/// コーパス順で最初に「版本更新说明」を含むサブタイトルから先頭のバージョン
/// トークンを読む。見つからなければ [`TimeError::NoUpdateLog`]。
pub fn infer_live_version(corpus: &[Announcement]) -> Result<String, TimeError> {
    let ann = corpus
        .iter()
        .find(|a| a.subtitle.contains(PATCH_NOTES_SUFFIX))
        .ok_or(TimeError::NoUpdateLog)?;
    let re = pattern(r"^(\d+\.\d+|「月之[一二三四五六七八九]」)");
    let caps = re.captures(&ann.subtitle).ok_or(TimeError::NoUpdateLog)?;
    Ok(version::resolve(&caps[1]))
}
