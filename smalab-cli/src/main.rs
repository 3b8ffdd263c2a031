//! SmaLab CLI — enrich price tables and run the pullback analysis.
//!
//! Commands:
//! - `enrich` — compute SMA columns for a price CSV and write the enriched table
//! - `analyze` — run the signal/trade/statistics pipeline and write the report

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use smalab_runner::{
    run_analysis, run_enrichment, save_artifacts, AnalysisConfig, AnalysisResult, DataConfig,
    DirectionMode, OutputConfig, StrategyConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smalab", about = "SmaLab CLI — SMA pullback backtesting utility")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute SMA columns for a price table and write the enriched CSV.
    Enrich {
        /// Input price CSV (Date, Open, High, Low, Close).
        input: PathBuf,

        /// Output directory.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Enriched table name (written as <name>.csv).
        #[arg(long, default_value = "prices_with_sma")]
        table: String,

        /// Fast SMA window.
        #[arg(long, default_value_t = 20)]
        fast: usize,

        /// Slow SMA window.
        #[arg(long, default_value_t = 50)]
        slow: usize,
    },
    /// Run the full analysis and write the statistics report.
    Analyze {
        /// Path to a TOML config file. Mutually exclusive with --input.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Input price CSV (required without --config).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Setup directions to scan: bullish, bearish, or both.
        #[arg(long, default_value = "bullish")]
        directions: String,

        /// Use SMA_20/SMA_50 columns from the input when present.
        #[arg(long, default_value_t = false)]
        precomputed_sma: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Enrich {
            input,
            output_dir,
            table,
            fast,
            slow,
        } => run_enrich_cmd(input, output_dir, table, fast, slow),
        Commands::Analyze {
            config,
            input,
            output_dir,
            directions,
            precomputed_sma,
        } => run_analyze_cmd(config, input, output_dir, directions, precomputed_sma),
    }
}

fn run_enrich_cmd(
    input: PathBuf,
    output_dir: PathBuf,
    table: String,
    fast: usize,
    slow: usize,
) -> Result<()> {
    let config = AnalysisConfig {
        data: DataConfig {
            input,
            use_precomputed_sma: false,
        },
        strategy: StrategyConfig {
            fast_period: fast,
            slow_period: slow,
            ..StrategyConfig::default()
        },
        output: OutputConfig {
            dir: output_dir,
            enriched_table: table,
            report_file: "trade_stats.txt".into(),
            report_title: default_title(),
        },
    };

    let path = run_enrichment(&config)?;
    println!("Enriched table written to: {}", path.display());
    Ok(())
}

fn run_analyze_cmd(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    output_dir: PathBuf,
    directions: String,
    precomputed_sma: bool,
) -> Result<()> {
    let config = match (config_path, input) {
        (Some(_), Some(_)) => bail!("--config and --input are mutually exclusive"),
        (None, None) => bail!("one of --config or --input is required"),
        (Some(path), None) => AnalysisConfig::from_file(&path)?,
        (None, Some(input)) => AnalysisConfig {
            data: DataConfig {
                input,
                use_precomputed_sma: precomputed_sma,
            },
            strategy: StrategyConfig {
                directions: parse_directions(&directions)?,
                ..StrategyConfig::default()
            },
            output: OutputConfig {
                dir: output_dir,
                enriched_table: "prices_with_sma".into(),
                report_file: "trade_stats.txt".into(),
                report_title: default_title(),
            },
        },
    };

    let result = run_analysis(&config)?;
    print_summary(&result);

    let saved = save_artifacts(&result, &config)?;
    println!("Report saved to: {}", saved.report.display());
    println!("Trade tape saved to: {}", saved.trades.display());

    Ok(())
}

fn parse_directions(value: &str) -> Result<DirectionMode> {
    match value {
        "bullish" => Ok(DirectionMode::Bullish),
        "bearish" => Ok(DirectionMode::Bearish),
        "both" => Ok(DirectionMode::Both),
        _ => bail!("unknown directions '{value}'. Valid: bullish, bearish, both"),
    }
}

fn default_title() -> String {
    "* BULLISH SMA TRADE STATISTICAL ANALYSIS RESULTS *".into()
}

fn print_summary(result: &AnalysisResult) {
    println!();
    println!("=== Analysis Result ===");
    println!("Run:            {}", &result.run_id[..12]);
    println!(
        "Bars:           {} ({} with both SMAs)",
        result.bar_count, result.enriched_count
    );
    if result.used_precomputed_sma {
        println!("SMA source:     input table");
    } else {
        println!("SMA source:     computed");
    }
    println!("Signals:        {}", result.signals.len());
    println!("Trades:         {}", result.stats.total_trades);
    println!();
    println!("--- Statistics ---");
    println!(
        "Profitable:     {} ({:.2}%)",
        result.stats.profitable_trades, result.stats.pct_profitable
    );
    println!(
        "Loss-making:    {} ({:.2}%)",
        result.stats.loss_making_trades, result.stats.pct_loss_making
    );
    println!("Avg Profit %:   {:.2}%", result.stats.avg_profit_pct);
    println!("Avg Loss %:     {:.2}%", result.stats.avg_loss_pct);
    println!("Avg Duration:   {:.1} days", result.stats.avg_duration_days);
    println!(
        "Avg Win Days:   {:.1}",
        result.stats.avg_profit_duration_days
    );
    println!(
        "Avg Loss Days:  {:.1}",
        result.stats.avg_loss_duration_days
    );
    for warn in &result.data_quality_warnings {
        println!("WARNING: {warn}");
    }
    println!();
}
