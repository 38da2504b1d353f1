use anyhow::Result;
use clap::Parser;
use log::{info, Level};

use bullion::alerts::{self, AlertBook, AlertDirection};
use bullion::api::MarketDataCollector;
use bullion::cli::{AlertAction, Cli, Command};
use bullion::config::Config;
use bullion::models::market::Interval;
use bullion::models::{Metal, TradeSide, Unit};
use bullion::storage::Store;
use bullion::utils::{format_distance, format_krw, format_number, format_percent};
use bullion::{logging, portfolio, recommend, trade, validation};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => {
            let level = if cli.debug { Level::Debug } else { Level::Info };
            logging::init(path, level)?;
        }
        None => {
            env_logger::Builder::from_default_env()
                .filter_level(logging::level_filter(cli.debug))
                .init();
        }
    }

    // Missing config file is fine: everything has a usable default and the
    // API keys can come from the environment.
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => {
            let default_path = std::path::Path::new("config.toml");
            if default_path.exists() {
                Config::load(default_path)?
            } else {
                Config::default()
            }
        }
    };
    config.apply_env();

    let collector = MarketDataCollector::from_config(&config);
    let store = Store::open(&config.storage.path);

    match cli.command {
        Command::Prices => {
            let quotes = collector.latest_quotes().await;
            info!("serving {} quotes", quotes.len());
            for quote in &quotes {
                println!(
                    "{:<6} {:>4}  buy {:>12}  sell {:>12}  {} ({})",
                    quote.metal,
                    quote.purity.short_name,
                    format_krw(quote.buy_price),
                    format_krw(quote.sell_price),
                    format_percent(quote.change_percent),
                    format_krw(quote.change_amount),
                );
            }
        }

        Command::History { metal, interval } => {
            let metal: Metal = metal.parse()?;
            let interval = Interval::parse(&interval);
            let series = collector.price_history(metal, interval).await;
            for point in &series {
                println!(
                    "{:>8}  {:>10}  (high {:>10} / low {:>10})",
                    point.label,
                    format_number(point.price as f64),
                    format_number(point.high as f64),
                    format_number(point.low as f64),
                );
            }
        }

        Command::Calc {
            quantity,
            unit,
            purity,
            base_price,
        } => {
            validation::validate_quantity(quantity)?;
            let unit: Unit = unit.parse()?;
            let market = collector.market();
            let purity = market
                .find_purity(&purity)
                .ok_or_else(|| anyhow::anyhow!("unknown purity: {}", purity))?
                .clone();
            let base = base_price.unwrap_or_else(|| market.base_price_for(purity.metal));

            let breakdown = trade::appraise(base, &purity, quantity, unit, &config.trade);
            println!("{} x {} {}", purity.short_name, quantity, unit);
            println!("  weight    {:.2}g", breakdown.grams);
            println!("  unit      {}/g", format_krw(breakdown.unit_price));
            println!("  subtotal  {}", format_krw(breakdown.subtotal));
            println!("  vat       {}", format_krw(breakdown.vat));
            println!("  total     {}", format_krw(breakdown.total));
        }

        Command::Trade {
            quantity,
            unit,
            purity,
            side,
        } => {
            validation::validate_quantity(quantity)?;
            let unit: Unit = unit.parse()?;
            let side: TradeSide = side.parse()?;
            let quotes = collector.latest_quotes().await;
            let quote = quotes
                .iter()
                .find(|q| q.purity.id == purity)
                .ok_or_else(|| anyhow::anyhow!("unknown purity: {}", purity))?;

            let breakdown = trade::quote_trade(quote, quantity, unit, side, &config.trade);
            println!("{} {} x {} {}", side, quote.purity.short_name, quantity, unit);
            println!("  price     {}/{}", format_krw(breakdown.unit_price), unit);
            println!("  subtotal  {}", format_krw(breakdown.subtotal));
            println!("  vat       {}", format_krw(breakdown.vat));
            println!("  total     {}", format_krw(breakdown.total));
        }

        Command::Stores {
            latitude,
            longitude,
        } => {
            validation::validate_coordinates(latitude, longitude)?;
            let stores = collector.nearby_stores(latitude, longitude).await;
            for shop in &stores {
                println!(
                    "{:<24} {:>7}  {}  {}  ({}, 리뷰 {})",
                    shop.name,
                    format_distance(shop.distance_m),
                    if shop.is_open { "영업중" } else { "영업종료" },
                    shop.address,
                    shop.rating,
                    shop.review_count,
                );
            }
        }

        Command::Alerts { action } => {
            let book = AlertBook::new(store.clone());
            match action {
                AlertAction::List => {
                    let alerts = book.list();
                    if alerts.is_empty() {
                        println!("no alerts configured");
                    }
                    for alert in alerts {
                        println!(
                            "{}  {:>4} {} {}  [{}]",
                            alert.id,
                            alert.purity.short_name,
                            match alert.direction {
                                AlertDirection::Above => ">=",
                                AlertDirection::Below => "<=",
                            },
                            format_krw(alert.target_price),
                            if alert.is_enabled { "on" } else { "off" },
                        );
                    }
                }
                AlertAction::Add {
                    purity,
                    target,
                    direction,
                } => {
                    validation::validate_target_price(target)?;
                    let direction: AlertDirection = direction.parse()?;
                    let purity = collector
                        .market()
                        .find_purity(&purity)
                        .ok_or_else(|| anyhow::anyhow!("unknown purity: {}", purity))?
                        .clone();
                    let alert = book.create(purity, target, direction)?;
                    println!("alert {} created", alert.id);
                }
                AlertAction::Toggle { id } => match book.toggle(&id)? {
                    Some(enabled) => {
                        println!("alert {} {}", id, if enabled { "enabled" } else { "disabled" })
                    }
                    None => println!("no alert with id {}", id),
                },
                AlertAction::Remove { id } => {
                    if book.remove(&id)? {
                        println!("alert {} removed", id);
                    } else {
                        println!("no alert with id {}", id);
                    }
                }
                AlertAction::Check => {
                    let quotes = collector.latest_quotes().await;
                    let alerts = book.list();
                    let fired = alerts::triggered(&alerts, &quotes);
                    if fired.is_empty() {
                        println!("no alerts triggered");
                    }
                    for alert in fired {
                        println!(
                            "TRIGGERED {}: {} {} {}",
                            alert.id,
                            alert.purity.short_name,
                            match alert.direction {
                                AlertDirection::Above => "reached",
                                AlertDirection::Below => "fell to",
                            },
                            format_krw(alert.target_price),
                        );
                    }
                }
            }
        }

        Command::Portfolio => {
            let holdings = store.get_or(
                portfolio::HOLDINGS_KEY,
                portfolio::dummy_holdings(collector.market()),
            );
            let summary = portfolio::summarize(&holdings);
            let weights = portfolio::weights(&holdings);

            println!("total     {}", format_krw(summary.total_value));
            println!("invested  {}", format_krw(summary.total_invested));
            println!(
                "pnl       {} ({})",
                format_krw(summary.pnl),
                format_percent(summary.pnl_percent)
            );
            for (holding, weight) in holdings.iter().zip(weights) {
                println!(
                    "  {:<12} {:>8.2}g  {:>12}  {:.1}%",
                    holding.purity.short_name,
                    holding.quantity,
                    format_krw(holding.value()),
                    weight * 100.0,
                );
            }
        }

        Command::Recommend => {
            let report = recommend::daily_report();
            println!("AI 분석 리포트 ({})", report.generated_at.format("%Y-%m-%d"));
            for rec in &report.recommendations {
                println!(
                    "\n[{:?}] {} (신뢰도 {}%)",
                    rec.action, rec.title, rec.confidence
                );
                println!("  {}", rec.description);
                for reason in &rec.reasoning {
                    println!("  - {}", reason);
                }
                if let Some(target) = rec.target_price {
                    println!("  목표가 {}", format_krw(target));
                }
            }
            println!();
            for indicator in &report.indicators {
                println!(
                    "{:<12} {:>8}  {}",
                    indicator.name,
                    indicator.value,
                    format_percent(indicator.change)
                );
            }
        }
    }

    Ok(())
}
