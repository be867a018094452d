use clap::{Args, Subcommand};
use shopvibe::money::{DEFAULT_CURRENCY, format_price};
use shopvibe_app::{
    config::AppConfig,
    domain::orders::{
        file::FileRecordStore,
        history::{GUEST_USER_ID, order_history},
    },
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List a member's orders, newest first
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Member email; guest orders are always included
    #[arg(long, env = "SHOPVIBE_MEMBER_EMAIL", default_value = GUEST_USER_ID)]
    member: String,
}

pub(crate) async fn run(command: OrdersCommand, config: &AppConfig) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List(args) => {
            let store = FileRecordStore::new(config.storage.records_dir());

            let history = order_history(&store, &args.member)
                .await
                .map_err(|error| format!("failed to read orders: {error}"))?;

            if history.is_empty() {
                println!("no orders");
            }

            let currency = Some(DEFAULT_CURRENCY);

            for entry in history {
                let order = entry.order;

                println!(
                    "{} {} {:?} {} items {}",
                    order.order_number,
                    order.order_date,
                    order.order_status,
                    order.item_count,
                    format_price(order.total_amount, currency),
                );

                for item in entry.items {
                    println!(
                        "  {:<24} {:>4} x {:>14}",
                        item.product_name.as_deref().unwrap_or("-"),
                        item.quantity,
                        format_price(item.unit_price, currency),
                    );
                }
            }
        }
    }

    Ok(())
}
