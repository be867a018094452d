use clap::{Args, Subcommand};
use shopvibe::{cart::MergePolicy, money::format_price};
use shopvibe_app::config::AppConfig;

use super::{StoredCart, load_catalog, open_cart, require_product, warn_if_unsaved};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Print the cart contents and totals
    Show,

    /// Add a catalog product to the cart
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(ProductArgs),

    /// Set the quantity of a product; zero or less removes it
    Set(SetArgs),

    /// Empty the cart
    Clear,

    /// Open the cart panel
    Open,

    /// Close the cart panel
    Close,

    /// Toggle the cart panel
    Toggle,
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Product id
    product_id: String,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product id
    product_id: String,

    /// Quantity to add
    #[arg(short, long, default_value_t = 1)]
    quantity: u32,

    /// Replace the stored name and price of an existing line with the catalog's
    #[arg(long)]
    refresh: bool,
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Product id
    product_id: String,

    /// New quantity
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

pub(crate) fn run(command: CartCommand, config: &AppConfig) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show => {
            print_cart(&open_cart(config, MergePolicy::default()));
            return Ok(());
        }
        CartSubcommand::Add(args) => {
            let products = load_catalog(config)?;
            let product = require_product(&products, &args.product_id)?;
            let policy = if args.refresh {
                MergePolicy::RefreshSnapshot
            } else {
                MergePolicy::KeepSnapshot
            };

            let mut cart = open_cart(config, policy);
            cart.add_item(product, args.quantity);
            finish(&cart);
        }
        CartSubcommand::Remove(args) => {
            let mut cart = open_cart(config, MergePolicy::default());
            cart.remove_item(&args.product_id.as_str().into());
            finish(&cart);
        }
        CartSubcommand::Set(args) => {
            let mut cart = open_cart(config, MergePolicy::default());
            cart.update_quantity(&args.product_id.as_str().into(), args.quantity);
            finish(&cart);
        }
        CartSubcommand::Clear => {
            let mut cart = open_cart(config, MergePolicy::default());
            cart.clear_cart();
            finish(&cart);
        }
        CartSubcommand::Open => {
            let mut cart = open_cart(config, MergePolicy::default());
            cart.open_cart();
            finish(&cart);
        }
        CartSubcommand::Close => {
            let mut cart = open_cart(config, MergePolicy::default());
            cart.close_cart();
            finish(&cart);
        }
        CartSubcommand::Toggle => {
            let mut cart = open_cart(config, MergePolicy::default());
            cart.toggle_cart();
            finish(&cart);
        }
    }

    Ok(())
}

fn finish(cart: &StoredCart) {
    warn_if_unsaved(cart);
    print_cart(cart);
}

fn print_cart(cart: &StoredCart) {
    println!("panel: {}", if cart.is_open() { "open" } else { "closed" });

    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    for line in cart.lines() {
        let currency = line.currency.as_deref();

        println!(
            "{:<24} {:>4} x {:>14} = {:>14}",
            line.name.as_deref().unwrap_or(line.product_id.as_str()),
            line.quantity,
            format_price(line.unit_price_or_zero(), currency),
            format_price(line.line_total(), currency),
        );
    }

    let currency = cart.lines().first().and_then(|line| line.currency.as_deref());

    println!("items: {}", cart.total_items());
    println!("total: {}", format_price(cart.total_price(), currency));
}
