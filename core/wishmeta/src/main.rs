mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use cli::{parse_args, print_completion, Config, ParseOutcome};
use ports::inbound::RunRefresh;
use usecase::RunOutcome;
use wiring::{wire, App};

/// メンテナンス検出時の終了コード（EX_TEMPFAIL: 後で再実行）
const EXIT_MAINTENANCE: i32 = 75;

/// ランを実行する Runner（結果 → 終了コードの変換は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunRefresh for Runner {
    fn run(&self, _config: Config) -> Result<i32, Error> {
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: None,
        });

        let result = self.app.refresh.run().map(|outcome| match outcome {
            RunOutcome::Completed(stats) => {
                println!(
                    "{} announcements processed: {} banners, {} skipped, {} failed",
                    stats.processed, stats.banners, stats.skipped, stats.failed
                );
                0
            }
            RunOutcome::Maintenance => {
                eprintln!(
                    "wishmeta: no update log found; game is most likely under maintenance, retry later"
                );
                EXIT_MAINTENANCE
            }
        });

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("wishmeta: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire(&config);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: wishmeta [options]");
}

fn print_help() {
    println!("Usage: wishmeta [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -v, --verbose              Also print log records to stderr");
    println!("  -o, --output <file>        Path of the aggregated JSON document (default: banner-data.json)");
    println!("  --archive-dir <dir>        Directory for raw announcement archives (default: ann_archive)");
    println!("  --no-archive               Do not archive raw announcement contents");
    println!("  --log-file <file>          Path of the JSONL run log (default: wishmeta-log.jsonl)");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Description:");
    println!("  Fetch the zh-cn announcement feed, classify gacha banner announcements,");
    println!("  extract reward pools and active time windows, and write the aggregated");
    println!("  metadata for all supported locales to the output document.");
    println!();
    println!("Exit codes:");
    println!("  0    run completed (per-announcement failures are reported and skipped)");
    println!("  75   no update log found; the game is most likely under maintenance, retry later");
}
