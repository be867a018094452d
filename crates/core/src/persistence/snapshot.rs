//! Cart snapshots
//!
//! Persisted carts are wrapped in a `{"version": N, "state": ...}` envelope. Version 0 is the
//! camel-cased layout of the unversioned storefront cart (`items`, `isOpen`, `_id`); it is
//! migrated to the current layout on load.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    cart::{CartState, MergePolicy},
    products::{Product, ProductId},
};

/// Snapshot layout version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not valid JSON or does not match the expected layout.
    #[error("malformed cart snapshot")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by a newer version.
    #[error("cart snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the snapshot
        found: u32,

        /// Newest version this crate reads
        supported: u32,
    },
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    state: &'a CartState,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    version: u32,
    state: Value,
}

/// Encode a state as a current-version snapshot.
///
/// # Errors
///
/// Returns a [`SnapshotError`] if serialization fails.
pub fn encode(state: &CartState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&EnvelopeRef {
        version: SNAPSHOT_VERSION,
        state,
    })?)
}

/// Decode a snapshot of any supported version.
///
/// # Errors
///
/// Returns a [`SnapshotError`] if the snapshot is malformed or from a newer version.
pub fn decode(raw: &str) -> Result<CartState, SnapshotError> {
    let envelope: Envelope = serde_json::from_str(raw)?;

    migrate(envelope.version, envelope.state)
}

/// Bring a versioned state payload up to the current layout.
///
/// # Errors
///
/// Returns a [`SnapshotError`] if the payload does not match its version's layout or the version
/// is newer than [`SNAPSHOT_VERSION`].
pub fn migrate(version: u32, state: Value) -> Result<CartState, SnapshotError> {
    match version {
        0 => Ok(serde_json::from_value::<LegacyState>(state)?.into_state()),
        SNAPSHOT_VERSION => Ok(serde_json::from_value(state)?),
        found => Err(SnapshotError::UnsupportedVersion {
            found,
            supported: SNAPSHOT_VERSION,
        }),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyState {
    #[serde(default)]
    items: Vec<LegacyItem>,

    #[serde(default)]
    is_open: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyItem {
    #[serde(rename = "_id")]
    id: ProductId,
    product_name: Option<String>,
    main_image: Option<String>,
    price: Option<Decimal>,
    currency: Option<String>,
    sku: Option<String>,
    short_description: Option<String>,
    #[serde(default)]
    quantity: i64,
}

impl LegacyState {
    /// Lines with a quantity below one are dropped and duplicate ids merged.
    fn into_state(self) -> CartState {
        let mut state = CartState {
            lines: Vec::with_capacity(self.items.len()),
            is_open: self.is_open,
        };

        for item in self.items {
            if item.quantity < 1 {
                continue;
            }

            let quantity = u32::try_from(item.quantity).unwrap_or(u32::MAX);
            let product = Product {
                id: item.id,
                name: item.product_name,
                image: item.main_image,
                price: item.price,
                currency: item.currency,
                sku: item.sku,
                short_description: item.short_description,
                ..Product::default()
            };

            state.add_item(&product, quantity, MergePolicy::KeepSnapshot);
        }

        state
    }
}
