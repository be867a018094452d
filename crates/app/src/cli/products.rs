use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use shopvibe::{money::format_price, products::Product};
use shopvibe_app::{
    config::AppConfig,
    domain::catalog::{self, ProductQuery, RELATED_PRODUCTS_LIMIT, SortOrder},
};

use super::{load_catalog, require_product};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List catalog products
    List(ListArgs),

    /// List featured products
    Featured,

    /// Show one product and related products
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Match against name and short description
    #[arg(long)]
    search: Option<String>,

    /// Category slug, or "all"
    #[arg(long)]
    category: Option<String>,

    /// Minimum price
    #[arg(long)]
    min_price: Option<Decimal>,

    /// Maximum price
    #[arg(long)]
    max_price: Option<Decimal>,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortOrder::Name)]
    sort: SortOrder,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Product id
    product_id: String,
}

pub(crate) fn run(command: ProductsCommand, config: &AppConfig) -> Result<(), String> {
    let products = load_catalog(config)?;

    match command.command {
        ProductsSubcommand::List(args) => {
            let query = ProductQuery {
                search: args.search,
                category: args.category,
                min_price: args.min_price,
                max_price: args.max_price,
                sort: args.sort,
            };

            let matched = query.apply(&products);

            if matched.is_empty() {
                println!("no products match");
            }

            matched.into_iter().for_each(print_product);
        }
        ProductsSubcommand::Featured => {
            catalog::featured(&products).into_iter().for_each(print_product);
        }
        ProductsSubcommand::Show(args) => {
            let product = require_product(&products, &args.product_id)?;

            print_product(product);

            if let Some(description) = &product.long_description {
                println!("\n{description}\n");
            }

            let related = catalog::related(&products, &product.id, RELATED_PRODUCTS_LIMIT);

            if !related.is_empty() {
                println!("related:");
                related.into_iter().for_each(print_product);
            }
        }
    }

    Ok(())
}

fn print_product(product: &Product) {
    let price = product
        .price
        .map_or_else(|| "-".to_string(), |price| format_price(price, product.currency.as_deref()));

    println!(
        "{:<24} {:<32} {:<14} {:>14}",
        product.id,
        product.name.as_deref().unwrap_or(""),
        product.category.as_deref().unwrap_or(""),
        price,
    );
}
