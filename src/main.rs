//! srpcalc — single-responsibility integer calculator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use srpcalc::config::Config;
use srpcalc::constants;
use srpcalc::env::Env;
use srpcalc::eval::Evaluator;
use srpcalc::models::{BatchReport, Operation};
use srpcalc::output;

use std::io::Read;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{BatchArgs, CalcCommand, Cli, Command, EvalArgs, OperandArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    // `version` must work even with an unreadable config.
    let command = match cli.command {
        Command::Version => return run_version(),
        Command::Calc(command) => command,
    };

    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&work_dir), cli.config.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    config.apply_overrides(cli.overflow, cli.format, cli.no_color);

    if !config.output.color {
        colored::control::set_override(false);
    }

    let evaluator = Evaluator::new(config.arithmetic.overflow);
    let report = match command {
        CalcCommand::Add(args) => run_operation(&evaluator, Operation::Add, args)?,
        CalcCommand::Sub(args) => run_operation(&evaluator, Operation::Sub, args)?,
        CalcCommand::Eval(args) => run_eval(&evaluator, args),
        CalcCommand::Batch(args) => run_batch(&evaluator, args)?,
    };

    let renderer = output::renderer_for(config.output.format);
    print!("{}", renderer.render(&report));

    if report.has_errors() {
        bail!(
            "{} of {} expression(s) failed",
            report.errors.len(),
            report.len()
        );
    }
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Apply a single operation given on the command line.
fn run_operation(evaluator: &Evaluator, operation: Operation, args: OperandArgs) -> Result<BatchReport> {
    let evaluation = evaluator.apply(operation, args.a, args.b)?;
    Ok(BatchReport::single(evaluation))
}

/// Evaluate expressions passed as arguments.
fn run_eval(evaluator: &Evaluator, args: EvalArgs) -> BatchReport {
    evaluator.evaluate_batch(&args.expressions.join("\n"))
}

/// Evaluate a file (or stdin) of expressions.
fn run_batch(evaluator: &Evaluator, args: BatchArgs) -> Result<BatchReport> {
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(evaluator.evaluate_batch(&input))
}
