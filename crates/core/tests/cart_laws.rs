//! Property tests for cart quantity and total invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use shopvibe::{
    cart::Cart,
    persistence::Ephemeral,
    products::{Product, ProductId},
};

#[derive(Debug, Clone)]
enum Op {
    Add { id: u8, price: Option<u16>, quantity: u32 },
    Remove { id: u8 },
    Update { id: u8, quantity: i64 },
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..5_u8, proptest::option::of(0..500_u16), 1..20_u32)
            .prop_map(|(id, price, quantity)| Op::Add { id, price, quantity }),
        1 => (0..5_u8).prop_map(|id| Op::Remove { id }),
        2 => (0..5_u8, -3..20_i64).prop_map(|(id, quantity)| Op::Update { id, quantity }),
        1 => Just(Op::Clear),
    ]
}

fn product(id: u8, price: Option<u16>) -> Product {
    let mut product = Product::new(format!("p{id}"));
    product.price = price.map(Decimal::from);
    product
}

proptest! {
    #[test]
    fn repeated_adds_sum_quantities(quantities in proptest::collection::vec(1..50_u32, 1..10)) {
        let mut cart = Cart::new(Ephemeral);
        let item = product(1, Some(3));

        for quantity in &quantities {
            cart.add_item(&item, *quantity);
        }

        let expected: u32 = quantities.iter().sum();

        prop_assert_eq!(cart.lines().len(), 1);
        prop_assert_eq!(cart.line(&item.id).map(|line| line.quantity), Some(expected));
    }

    #[test]
    fn invariants_hold_after_any_sequence(ops in proptest::collection::vec(op(), 0..40)) {
        let mut cart = Cart::new(Ephemeral);

        for op in ops {
            match op {
                Op::Add { id, price, quantity } => cart.add_item(&product(id, price), quantity),
                Op::Remove { id } => cart.remove_item(&ProductId::new(format!("p{id}"))),
                Op::Update { id, quantity } => {
                    cart.update_quantity(&ProductId::new(format!("p{id}")), quantity);
                }
                Op::Clear => cart.clear_cart(),
            }
        }

        let mut ids: Vec<&ProductId> = cart.lines().iter().map(|line| &line.product_id).collect();
        ids.sort();
        ids.dedup();

        prop_assert_eq!(ids.len(), cart.lines().len());
        prop_assert!(cart.lines().iter().all(|line| line.quantity >= 1));

        let items: u64 = cart.lines().iter().map(|line| u64::from(line.quantity)).sum();
        let price: Decimal = cart
            .lines()
            .iter()
            .map(|line| line.unit_price.unwrap_or_default() * Decimal::from(line.quantity))
            .sum();

        prop_assert_eq!(cart.total_items(), items);
        prop_assert_eq!(cart.total_price(), price);
    }
}
