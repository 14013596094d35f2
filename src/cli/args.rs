//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use srpcalc::models::{OutputFormat, OverflowMode};

/// Single-responsibility integer calculator.
#[derive(Parser, Debug)]
#[command(name = "srpcalc", version = srpcalc::constants::VERSION)]
pub struct Cli {
    /// Output format (overrides config and SRPCALC_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Overflow behaviour (overrides config and SRPCALC_OVERFLOW).
    #[arg(long, global = true)]
    pub overflow: Option<OverflowMode>,

    /// Disable coloured output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Config file to use instead of `.srpcalc.toml` in the working directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    #[command(flatten)]
    Calc(CalcCommand),

    /// Print version and build information.
    Version,
}

/// Commands that evaluate something and therefore need configuration.
#[derive(clap::Subcommand, Debug)]
pub enum CalcCommand {
    /// Add two integers.
    Add(OperandArgs),

    /// Subtract the second integer from the first.
    Sub(OperandArgs),

    /// Evaluate one or more expressions such as "add 2 2".
    Eval(EvalArgs),

    /// Evaluate a file of expressions, one per line.
    Batch(BatchArgs),
}

/// Operands for `add` and `sub`.
#[derive(Parser, Debug)]
pub struct OperandArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: i64,

    #[arg(allow_negative_numbers = true)]
    pub b: i64,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expressions, each `<op> <a> <b>` in a single argument.
    #[arg(required = true)]
    pub expressions: Vec<String>,
}

/// Arguments for the `batch` subcommand.
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input file (reads stdin when omitted).
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_add_with_negative_operands() {
        let cli = Cli::try_parse_from(["srpcalc", "add", "-3", "-4"]).unwrap();
        match cli.command {
            Command::Calc(CalcCommand::Add(args)) => {
                assert_eq!(args.a, -3);
                assert_eq!(args.b, -4);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "srpcalc", "sub", "2", "2", "--format", "json", "--overflow", "checked",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.overflow, Some(OverflowMode::Checked));
    }

    #[test]
    fn parse_version_is_not_a_calc_command() {
        let cli = Cli::try_parse_from(["srpcalc", "version"]).unwrap();
        assert!(matches!(cli.command, Command::Version));
        let cli = Cli::try_parse_from(["srpcalc", "batch"]).unwrap();
        assert!(matches!(cli.command, Command::Calc(CalcCommand::Batch(_))));
    }

    #[test]
    fn parse_rejects_non_integer_operand() {
        assert!(Cli::try_parse_from(["srpcalc", "add", "two", "2"]).is_err());
    }

    #[test]
    fn eval_requires_an_expression() {
        assert!(Cli::try_parse_from(["srpcalc", "eval"]).is_err());
        let cli = Cli::try_parse_from(["srpcalc", "eval", "add 1 2", "sub 3 1"]).unwrap();
        match cli.command {
            Command::Calc(CalcCommand::Eval(args)) => assert_eq!(args.expressions.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
