//! Wealth Projection CLI
//!
//! Command-line interface for running wealth projections

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use wealth_projection::assumptions::loader::load_scenarios;
use wealth_projection::report::{
    export, format_percent, render_summary, render_table, ProjectionReport, ReportConfig,
};
use wealth_projection::{AssumptionInputs, ProjectionResult, ScenarioRunner};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "wealth_projection", version, about = "Year-by-year wealth projection")]
struct Cli {
    /// Current wealth
    #[arg(long, default_value_t = 1_500_000.0, allow_negative_numbers = true)]
    initial_wealth: f64,

    /// Amount invested every month
    #[arg(long, default_value_t = 5_000.0, allow_negative_numbers = true)]
    monthly_contribution: f64,

    /// Expected annual dividend yield, in percent
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    dividend_pct: f64,

    /// Expected annual net return, in percent
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    return_pct: f64,

    /// Expected annual inflation, in percent
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    inflation_pct: f64,

    /// Number of years to project
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    years: i64,

    /// Client age today
    #[arg(long, default_value_t = 40, allow_negative_numbers = true)]
    age: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run every scenario in a CSV file instead of the flags above
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Compare return rates (percent, comma separated) for the flag scenario
    #[arg(long, value_delimiter = ',')]
    sweep_returns: Vec<f64>,

    /// Currency prefix for table and summary output
    #[arg(long, default_value = "$")]
    currency_symbol: String,

    /// Only print the first N years of the table
    #[arg(long)]
    max_rows: Option<usize>,
}

impl Cli {
    fn inputs(&self) -> AssumptionInputs {
        AssumptionInputs {
            initial_wealth: self.initial_wealth,
            monthly_contribution: self.monthly_contribution,
            annual_dividend_pct: self.dividend_pct,
            annual_return_pct: self.return_pct,
            annual_inflation_pct: self.inflation_pct,
            horizon_years: self.years,
            current_age: self.age,
        }
    }

    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            currency_symbol: self.currency_symbol.clone(),
            max_rows: self.max_rows,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let runner = ScenarioRunner::new();
    let mut out = open_output(cli.output.as_ref())?;

    if let Some(path) = &cli.scenarios {
        let scenarios = load_scenarios(path)
            .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
        log::info!("loaded {} scenarios from {}", scenarios.len(), path.display());

        let mut runs = Vec::new();
        for outcome in runner.run_named(&scenarios) {
            match outcome.result {
                Ok(result) => runs.push((outcome.name, result)),
                Err(e) => eprintln!("{}: rejected: {}", outcome.name, e),
            }
        }
        return emit_named(&mut out, &runs, cli);
    }

    let assumptions = cli.inputs().to_assumptions()?;

    if !cli.sweep_returns.is_empty() {
        let rates: Vec<f64> = cli.sweep_returns.iter().map(|pct| pct / 100.0).collect();
        if let Some(bad) = rates.iter().find(|r| !(0.0..=1.0).contains(*r)) {
            bail!("sweep return rates must be between 0 and 100 percent (got {})", bad * 100.0);
        }

        let runs: Vec<(String, ProjectionResult)> = runner
            .sweep_return_rates(assumptions, &rates)?
            .into_iter()
            .map(|r| (format!("return {}", format_percent(r.assumptions.annual_return_rate)), r))
            .collect();
        return emit_named(&mut out, &runs, cli);
    }

    let result = runner.run(assumptions)?;
    emit(&mut out, &result, cli)
}

fn emit(out: &mut dyn Write, result: &ProjectionResult, cli: &Cli) -> anyhow::Result<()> {
    let config = cli.report_config();
    match cli.format {
        OutputFormat::Table => {
            writeln!(out, "{}", render_table(result, &config))?;
            writeln!(out, "{}\n", render_summary(result, &config))?;
        }
        OutputFormat::Csv => export::write_csv(result.records(), &mut *out)?,
        OutputFormat::Json => writeln!(out, "{}", ProjectionReport::new(result).to_json()?)?,
    }
    Ok(())
}

/// Several projections: banners for the table, one combined document otherwise
fn emit_named(
    out: &mut dyn Write,
    runs: &[(String, ProjectionResult)],
    cli: &Cli,
) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Table => {
            for (name, result) in runs {
                writeln!(out, "== {} ==", name)?;
                emit(out, result, cli)?;
            }
        }
        OutputFormat::Csv => export::write_named_csv(runs, &mut *out)?,
        OutputFormat::Json => writeln!(out, "{}", export::named_reports_json(runs)?)?,
    }
    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("unable to create {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_form_defaults() {
        let cli = Cli::parse_from(["wealth_projection"]);
        assert_eq!(cli.inputs(), AssumptionInputs::default());
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_cli_parses_sweep_and_negative_values() {
        let cli = Cli::parse_from([
            "wealth_projection",
            "--initial-wealth",
            "-1",
            "--sweep-returns",
            "4,6,8",
            "--format",
            "csv",
        ]);
        assert_eq!(cli.initial_wealth, -1.0);
        assert_eq!(cli.sweep_returns, vec![4.0, 6.0, 8.0]);
        assert_eq!(cli.format, OutputFormat::Csv);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_emit_csv() {
        let cli = Cli::parse_from(["wealth_projection", "--years", "3", "--format", "csv"]);
        let result = ScenarioRunner::new().run(cli.inputs().to_assumptions().unwrap()).unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        emit(&mut buffer, &result, &cli).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 4);
    }

    #[test]
    fn test_sweep_csv_output_is_single_table() {
        let path = std::env::temp_dir().join(format!("sweep_{}.csv", std::process::id()));
        let cli = Cli::parse_from([
            "wealth_projection",
            "--years",
            "2",
            "--sweep-returns",
            "5,8",
            "--format",
            "csv",
            "--output",
            path.to_str().unwrap(),
        ]);
        run(&cli).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(&reader.headers().unwrap()[0], "scenario");
        let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "return 5.00%");
        assert_eq!(&rows[2][0], "return 8.00%");
        assert_eq!(&rows[3][1], "2");
    }

    #[test]
    fn test_named_json_output_parses() {
        let cli = Cli::parse_from(["wealth_projection", "--years", "2", "--format", "json"]);
        let runner = ScenarioRunner::new();
        let runs: Vec<(String, ProjectionResult)> = runner
            .sweep_return_rates(cli.inputs().to_assumptions().unwrap(), &[0.05, 0.08])
            .unwrap()
            .into_iter()
            .map(|r| ("x".to_string(), r))
            .collect();

        let mut buffer: Vec<u8> = Vec::new();
        emit_named(&mut buffer, &runs, &cli).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
