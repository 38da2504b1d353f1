use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current gold/silver price table
    Prices,
    /// Show a synthesized price-history series
    History {
        #[arg(long, default_value = "gold")]
        metal: String,
        /// week, month, 3month or year
        #[arg(long, default_value = "month")]
        interval: String,
    },
    /// Appraise a quantity at a caller-supplied base price
    Calc {
        #[arg(long)]
        quantity: f64,
        #[arg(long, default_value = "don")]
        unit: String,
        #[arg(long, default_value = "gold_24k")]
        purity: String,
        /// Pure-metal base price in KRW/g; defaults to the fallback price
        #[arg(long)]
        base_price: Option<f64>,
    },
    /// Quote a buy or sell at current prices
    Trade {
        #[arg(long)]
        quantity: f64,
        #[arg(long, default_value = "don")]
        unit: String,
        #[arg(long, default_value = "gold_24k")]
        purity: String,
        #[arg(long, default_value = "buy")]
        side: String,
    },
    /// Search nearby bullion stores
    Stores {
        #[arg(long)]
        latitude: f64,
        #[arg(long)]
        longitude: f64,
    },
    /// Manage price alerts
    Alerts {
        #[command(subcommand)]
        action: AlertAction,
    },
    /// Show the portfolio summary
    Portfolio,
    /// Show the daily recommendation report
    Recommend,
}

#[derive(Subcommand, Debug)]
pub enum AlertAction {
    /// List configured alerts
    List,
    /// Add an alert for a purity at a target price
    Add {
        #[arg(long)]
        purity: String,
        #[arg(long)]
        target: f64,
        /// above or below
        #[arg(long, default_value = "above")]
        direction: String,
    },
    /// Flip an alert on or off
    Toggle { id: String },
    /// Delete an alert
    Remove { id: String },
    /// Evaluate alerts against the current price table
    Check,
}
