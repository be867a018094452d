use clap::{Parser, Subcommand};
use shopvibe::prelude::{Cart, FileStore, MergePolicy, PersistedCart, Product};
use shopvibe_app::{
    config::AppConfig,
    domain::catalog::{self, CatalogError},
    observability::init_subscriber,
};

mod cart;
mod checkout;
mod orders;
mod products;

type StoredCart = Cart<PersistedCart<FileStore>>;

#[derive(Debug, Parser)]
#[command(name = "shopvibe", about = "ShopVibe storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(cart::CartCommand),
    Products(products::ProductsCommand),
    Checkout(checkout::CheckoutArgs),
    Orders(orders::OrdersCommand),
}

impl Cli {
    /// Load settings from `.env`, the environment and the command line.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let Self { config, command } = self;

        init_subscriber(&config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        match command {
            Commands::Cart(command) => cart::run(command, &config),
            Commands::Products(command) => products::run(command, &config),
            Commands::Checkout(args) => checkout::run(args, &config).await,
            Commands::Orders(command) => orders::run(command, &config).await,
        }
    }
}

fn open_cart(config: &AppConfig, policy: MergePolicy) -> StoredCart {
    let cart = Cart::with_policy(
        PersistedCart::new(FileStore::new(config.storage.cart_dir())),
        policy,
    );

    if cart.is_degraded() {
        eprintln!("warning: saved cart could not be read; starting with an empty cart");
    }

    cart
}

fn load_catalog(config: &AppConfig) -> Result<Vec<Product>, String> {
    catalog::fixtures::load_catalog(&config.checkout.catalog).map_err(|error| {
        format!(
            "failed to load catalog {}: {error}",
            config.checkout.catalog.display()
        )
    })
}

fn require_product<'a>(products: &'a [Product], id: &str) -> Result<&'a Product, String> {
    catalog::find(products, &id.into())
        .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()).to_string())
}

fn warn_if_unsaved(cart: &StoredCart) {
    if cart.is_degraded() {
        eprintln!("warning: cart changes could not be saved and will be lost on exit");
    }
}
