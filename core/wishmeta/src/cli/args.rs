//! コマンドライン引数の解析

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

/// 解析済みの設定
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも整形して出す
    pub verbose: bool,
    /// --no-archive: 生お知らせのアーカイブを行わない
    pub no_archive: bool,
    /// -o / --output: 出力 JSON のパス。省略時は banner-data.json
    pub output: Option<String>,
    /// --archive-dir: アーカイブ先ディレクトリ。省略時は ann_archive
    pub archive_dir: Option<String>,
    /// --log-file: JSONL ログのパス。省略時は wishmeta-log.jsonl
    pub log_file: Option<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("wishmeta")
        .about("Collect gacha banner metadata from game announcements")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Also print log records to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-archive")
                .long("no-archive")
                .help("Do not archive raw announcement contents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file")
                .help("Path of the aggregated JSON document (default: banner-data.json)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("archive-dir")
                .long("archive-dir")
                .value_name("dir")
                .help("Directory for raw announcement archives (default: ann_archive)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("file")
                .help("Path of the JSONL run log (default: wishmeta-log.jsonl)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script (bash, zsh, fish)")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_from(std::env::args())
}

fn parse_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    if let Some(shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }
    Ok(ParseOutcome::Config(Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        no_archive: matches.get_flag("no-archive"),
        output: matches.get_one::<String>("output").cloned(),
        archive_dir: matches.get_one::<String>("archive-dir").cloned(),
        log_file: matches.get_one::<String>("log-file").cloned(),
    }))
}

/// 補完スクリプトを stdout へ出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "wishmeta", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let outcome = parse_from(["wishmeta"]).unwrap();
        let ParseOutcome::Config(config) = outcome else {
            panic!("expected Config");
        };
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_and_values() {
        let outcome = parse_from([
            "wishmeta",
            "-v",
            "--no-archive",
            "-o",
            "out.json",
            "--archive-dir",
            "arch",
            "--log-file",
            "run.jsonl",
        ])
        .unwrap();
        let ParseOutcome::Config(config) = outcome else {
            panic!("expected Config");
        };
        assert!(config.verbose);
        assert!(config.no_archive);
        assert_eq!(config.output.as_deref(), Some("out.json"));
        assert_eq!(config.archive_dir.as_deref(), Some("arch"));
        assert_eq!(config.log_file.as_deref(), Some("run.jsonl"));
    }

    #[test]
    fn test_generate_completion() {
        let outcome = parse_from(["wishmeta", "--generate", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = parse_from(["wishmeta", "--nope"]).unwrap_err();
        assert!(err.is_usage());
    }
}
