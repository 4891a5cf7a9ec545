mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "ddeprims", version, about = "DDE wire codec and format inspection CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). `RUST_LOG` takes precedence when set.
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_fields_subcommand() {
        let cli = Cli::try_parse_from(["ddeprims", "encode-fields", "service", "topic"])
            .expect("encode-fields args should parse");
        assert!(matches!(cli.command, Command::EncodeFields(_)));
    }

    #[test]
    fn parses_format_code_by_name() {
        let cli = Cli::try_parse_from([
            "ddeprims",
            "decode-format",
            "--cf",
            "unicodetext",
            "61626300",
        ])
        .expect("decode-format args should parse");

        match cli.command {
            Command::DecodeFormat(args) => assert_eq!(args.cf, 13),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_conflicting_payload_args() {
        let err = Cli::try_parse_from([
            "ddeprims",
            "encode-format",
            "--cf",
            "text",
            "--data",
            "hi",
            "--hex",
            "6869",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_unknown_format_name() {
        let err = Cli::try_parse_from(["ddeprims", "decode-format", "--cf", "bogus", "00"])
            .expect_err("unknown format should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
