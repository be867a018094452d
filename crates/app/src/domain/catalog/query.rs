//! Product queries.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use shopvibe::products::{Product, ProductId};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Number of related products shown next to a product.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Product list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Alphabetical by name; products without a name sort first.
    #[default]
    Name,

    /// Cheapest first; products without a price count as free.
    PriceLow,

    /// Most expensive first; products without a price count as free.
    PriceHigh,
}

/// Filters and ordering for a product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive text matched against the name and short description, as typed. An
    /// empty term matches everything.
    pub search: Option<String>,

    /// Category slug to restrict to.
    pub category: Option<String>,

    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,

    pub sort: SortOrder,
}

impl ProductQuery {
    /// Check a single product against the filters.
    pub fn matches(&self, product: &Product) -> bool {
        let price = product.price.unwrap_or(Decimal::ZERO);

        let search_matches = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                let contains = |field: &Option<String>| {
                    field
                        .as_deref()
                        .is_some_and(|value| value.to_lowercase().contains(&term))
                };

                contains(&product.name) || contains(&product.short_description)
            }
        };

        let category_matches = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => product.category.as_deref() == Some(category),
        };

        search_matches
            && category_matches
            && self.min_price.is_none_or(|min| price >= min)
            && self.max_price.is_none_or(|max| price <= max)
    }

    /// Filter and sort a product list. Sorting is stable.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .collect();

        matched.sort_by(|a, b| compare(self.sort, a, b));

        matched
    }
}

fn compare(sort: SortOrder, a: &Product, b: &Product) -> Ordering {
    let price = |product: &Product| product.price.unwrap_or(Decimal::ZERO);

    match sort {
        SortOrder::Name => {
            let name = |product: &Product| product.name.as_deref().unwrap_or("").to_lowercase();
            name(a).cmp(&name(b))
        }
        SortOrder::PriceLow => price(a).cmp(&price(b)),
        SortOrder::PriceHigh => price(b).cmp(&price(a)),
    }
}

/// Products flagged as featured, in catalog order.
pub fn featured(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|product| product.featured).collect()
}

/// Look up a product by id.
pub fn find<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|product| &product.id == id)
}

/// The first `limit` products other than `id`, in catalog order.
pub fn related<'a>(products: &'a [Product], id: &ProductId, limit: usize) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| &product.id != id)
        .take(limit)
        .collect()
}
