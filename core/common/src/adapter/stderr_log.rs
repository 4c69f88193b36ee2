//! stderr へ要点のみ出力する Log 実装（--verbose 用）
//!
//! 既存のロガー（tracing / log）には接続せず、整形した 1 行を stderr に出す。
//! fields の全量は出さず要点のみ。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 400;

fn level_tag(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    }
}

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = &record.fields else {
        return String::new();
    };
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.len() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 整形した 1 行を stderr に出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let summary = fields_summary(record);
        if summary.is_empty() {
            eprintln!("[{}] {}", level_tag(record.level), record.message);
        } else {
            eprintln!("[{}] {} {}", level_tag(record.level), record.message, summary);
        }
        Ok(())
    }
}

/// 複数の Log へ同じレコードを流す Log 実装（ファイル + stderr の併用に使う）
pub struct TeeLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(sinks: Vec<Arc<dyn Log>>) -> Self {
        Self { sinks }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        for sink in &self.sinks {
            sink.log(record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::file_json_log::NoopLog;
    use std::sync::Mutex;

    struct CountingLog(Mutex<usize>);
    impl Log for CountingLog {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            *self.0.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_tee_forwards_to_all_sinks() {
        let a = Arc::new(CountingLog(Mutex::new(0)));
        let tee = TeeLog::new(vec![a.clone(), Arc::new(NoopLog)]);
        tee.log(&LogRecord::simple(LogLevel::Info, "x")).unwrap();
        tee.log(&LogRecord::simple(LogLevel::Info, "y")).unwrap();
        assert_eq!(*a.0.lock().unwrap(), 2);
    }
}
