//! GameStore CLI
//!
//! Thin wrapper around gamestore-core for browsing the catalog and building
//! a cart from the terminal. Cart state lives only for one invocation.
//!
//! ## Usage
//!
//! ```bash
//! # Show store information
//! gamestore info
//!
//! # List the catalog, optionally by category
//! gamestore catalog
//! gamestore catalog --category vip
//!
//! # List promo codes / FAQ
//! gamestore promos
//! gamestore faq
//!
//! # Price a cart in one go
//! gamestore quote --add 1 --add 3 --add 3 --promo vip50
//!
//! # Interactive cart session
//! gamestore shell
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gamestore_core::content;
use gamestore_core::{
    logging, CartEngine, CartEvent, CartEventReceiver, CategoryFilter, ItemId, Severity,
    StoreConfig, TryRecvError,
};

/// GameStore - game currency and item shop
#[derive(Parser)]
#[command(name = "gamestore")]
#[command(version = "0.1.0")]
#[command(about = "GameStore - game currency and item shop")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Store config file (default: <config dir>/gamestore/store.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show store information
    Info,

    /// List catalog items
    Catalog {
        /// all, vip, currency, items or special
        #[arg(short = 'k', long, default_value = "all")]
        category: String,
    },

    /// List promo codes
    Promos,

    /// Show frequently asked questions
    Faq,

    /// Build a cart and print its total
    ///
    /// Adds are applied first, then removes, then the promo code.
    Quote {
        /// Item id to add (repeat to add more units)
        #[arg(short, long = "add")]
        add: Vec<String>,
        /// Item id whose line to remove
        #[arg(short, long = "remove")]
        remove: Vec<String>,
        /// Promo code to apply
        #[arg(short, long)]
        promo: Option<String>,
    },

    /// Interactive cart session on stdin
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let (config, source) = StoreConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(%source, "Store config resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Info => {
            writeln!(out, "{}", config.store_name)?;
            writeln!(out, "  Items: {}", config.catalog.len())?;
            writeln!(out, "  Promo codes: {}", config.promo_codes.len())?;
            writeln!(out, "  Currency: {}", config.currency_symbol)?;
            writeln!(out, "  Config: {}", source)?;
        }

        Commands::Catalog { category } => {
            let filter: CategoryFilter = category.parse()?;
            print_catalog(&mut out, &config, filter)?;
        }

        Commands::Promos => {
            writeln!(out, "Active promo codes:")?;
            for card in content::promo_showcase(&config.promo_codes) {
                writeln!(out, "  {} {:<10} {}", card.glyph, card.code, card.blurb)?;
            }
        }

        Commands::Faq => {
            for entry in content::FAQ {
                writeln!(out, "Q: {}", entry.question)?;
                writeln!(out, "A: {}", entry.answer)?;
                writeln!(out)?;
            }
        }

        Commands::Quote { add, remove, promo } => {
            let mut cart = config.new_cart();
            let mut events = cart.subscribe_events();

            for raw in &add {
                let id: ItemId = raw.parse()?;
                cart.add_item_by_id(id)?;
            }
            for raw in &remove {
                let id: ItemId = raw.parse()?;
                cart.remove_item(id);
            }
            if let Some(code) = promo {
                cart.apply_promo_code(&code);
            }

            drain_notifications(&mut out, &mut events)?;
            print_cart(&mut out, &config, &cart)?;
        }

        Commands::Shell => {
            let stdin = io::stdin();
            run_shell(stdin.lock(), &mut out, &config)?;
        }
    }

    Ok(())
}

fn print_catalog(out: &mut impl Write, config: &StoreConfig, filter: CategoryFilter) -> Result<()> {
    let items = config.catalog.filter_by_category(filter);
    if items.is_empty() {
        writeln!(out, "No items in '{}'", filter)?;
        return Ok(());
    }

    for item in items {
        let price = config.format_price(item.unit_price());
        match item.active_discount() {
            Some(discount) => writeln!(
                out,
                "{:>4}  {} {:<18} [{}] {} (was {}, -{}%)",
                item.id.to_string(),
                item.image,
                item.name,
                item.category,
                price,
                config.format_price(f64::from(item.price)),
                discount
            )?,
            None => writeln!(
                out,
                "{:>4}  {} {:<18} [{}] {}",
                item.id.to_string(),
                item.image,
                item.name,
                item.category,
                price
            )?,
        }
    }
    Ok(())
}

fn print_cart(out: &mut impl Write, config: &StoreConfig, cart: &CartEngine) -> Result<()> {
    if cart.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    writeln!(out, "Cart ({} lines):", cart.line_count())?;
    for line in cart.lines() {
        writeln!(
            out,
            "  {} {} x{}  {}",
            line.item.image,
            line.item.name,
            line.quantity,
            config.format_price(line.line_total())
        )?;
    }
    if let Some(code) = cart.active_promo() {
        writeln!(out, "Discount {}% active! ({})", cart.promo_discount(), code)?;
    }
    writeln!(out, "Total: {}", config.format_price(cart.compute_total()))?;
    Ok(())
}

/// Print every pending notification from the cart's event stream
fn drain_notifications(out: &mut impl Write, events: &mut CartEventReceiver) -> Result<()> {
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Lagged(skipped)) => {
                // The receiver resumes at the oldest event still buffered
                tracing::warn!("Skipped {} cart events", skipped);
                continue;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        };
        if let Some(note) = event.notification() {
            let marker = match note.severity {
                Severity::Info => "[+]",
                Severity::Destructive => "[!]",
            };
            writeln!(out, "{} {}", marker, note)?;
        }
        if let CartEvent::ItemRemoved { name, .. } = &event {
            writeln!(out, "[-] {} removed", name)?;
        }
    }
    Ok(())
}

const SHELL_HELP: &str = "\
Commands:
  add <id>          add one unit of an item
  remove <id>       remove an item's line
  promo <code>      apply a promo code
  cart              show the cart
  catalog [cat]     list items (all, vip, currency, items, special)
  clear             empty the cart
  help              show this help
  quit              leave the shell";

/// Read commands line by line until `quit` or end of input
///
/// Bad input is reported and the session carries on.
fn run_shell(input: impl BufRead, out: &mut impl Write, config: &StoreConfig) -> Result<()> {
    let mut cart = config.new_cart();
    let mut events = cart.subscribe_events();

    writeln!(out, "{} shell. Type 'help' for commands.", config.store_name)?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let arg = words.collect::<Vec<_>>().join(" ");

        match command {
            "add" => match arg.parse::<ItemId>() {
                Ok(id) => {
                    if let Err(e) = cart.add_item_by_id(id) {
                        writeln!(out, "error: {}", e)?;
                    }
                }
                Err(_) => writeln!(out, "error: expected an item id")?,
            },
            "remove" | "rm" => match arg.parse::<ItemId>() {
                Ok(id) => {
                    if cart.remove_item(id).is_none() {
                        writeln!(out, "{} is not in the cart", id)?;
                    }
                }
                Err(_) => writeln!(out, "error: expected an item id")?,
            },
            "promo" => {
                cart.apply_promo_code(&arg);
            }
            "cart" => print_cart(out, config, &cart)?,
            "catalog" => {
                let raw = if arg.is_empty() { "all" } else { arg.as_str() };
                match raw.parse::<CategoryFilter>() {
                    Ok(filter) => print_catalog(out, config, filter)?,
                    Err(e) => writeln!(out, "error: {}", e)?,
                }
            }
            "clear" => cart.clear(),
            "help" => writeln!(out, "{}", SHELL_HELP)?,
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command '{}', try 'help'", other)?,
        }

        drain_notifications(out, &mut events)?;
    }

    Ok(())
}
