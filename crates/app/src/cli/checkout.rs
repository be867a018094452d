use std::sync::Arc;

use clap::Args;
use shopvibe::{cart::MergePolicy, money::format_price};
use shopvibe_app::{
    config::AppConfig,
    domain::{
        checkout::{
            CheckoutService,
            shipping::{DEFAULT_COUNTRY, ShippingDetails},
        },
        orders::file::FileRecordStore,
    },
};

use super::open_cart;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    /// Contact email for the order
    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    /// Street address
    #[arg(long)]
    address: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    state: String,

    #[arg(long)]
    pincode: String,

    #[arg(long, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Signed-in member email; orders are recorded for a guest when omitted
    #[arg(long, env = "SHOPVIBE_MEMBER_EMAIL")]
    member: Option<String>,

    /// Print the order summary without placing the order
    #[arg(long)]
    dry_run: bool,
}

pub(crate) async fn run(args: CheckoutArgs, config: &AppConfig) -> Result<(), String> {
    let service = CheckoutService::new(
        Arc::new(FileRecordStore::new(config.storage.records_dir())),
        config.checkout.pricing(),
    );

    let mut cart = open_cart(config, MergePolicy::default());
    let summary = service.summarize(&cart);
    let currency = Some(summary.currency.as_str());

    println!("subtotal: {}", format_price(summary.subtotal, currency));
    println!("shipping: {}", format_price(summary.shipping, currency));
    println!("tax:      {}", format_price(summary.tax, currency));
    println!("total:    {}", format_price(summary.total, currency));

    if args.dry_run {
        return Ok(());
    }

    let shipping = ShippingDetails {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        city: args.city,
        state: args.state,
        pincode: args.pincode,
        country: args.country,
    };

    let placed = service
        .place_order(&mut cart, &shipping, args.member.as_deref())
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    if cart.is_degraded() {
        eprintln!("warning: order placed but the cart could not be cleared");
    }

    println!("order_number: {}", placed.order.order_number);
    println!("order_uuid: {}", placed.order.uuid);
    println!("items: {}", placed.items.len());

    Ok(())
}
