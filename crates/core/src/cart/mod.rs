//! Cart

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    persistence::CartPersistence,
    products::{Product, ProductId},
};

mod line;
mod state;

pub use line::CartLine;
pub use state::CartState;

/// What happens to a line's snapshot when a product already in the cart is added again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Only the quantity changes; the price and display fields from the first add are kept.
    #[default]
    KeepSnapshot,

    /// The quantity changes and the snapshot is replaced with the newly passed product.
    RefreshSnapshot,
}

/// Cart store
///
/// Owns a [`CartState`] and saves it through its persistence adapter after every mutation.
/// Persistence failures never surface to callers: the in-memory state is still updated and the
/// cart is marked as degraded until a later save succeeds.
#[derive(Debug)]
pub struct Cart<P: CartPersistence> {
    state: CartState,
    persistence: P,
    policy: MergePolicy,
    degraded: bool,
}

impl<P: CartPersistence> Cart<P> {
    /// Create a cart, restoring any previously persisted state.
    pub fn new(persistence: P) -> Self {
        Self::with_policy(persistence, MergePolicy::default())
    }

    /// Create a cart with an explicit merge policy, restoring any previously persisted state.
    pub fn with_policy(persistence: P, policy: MergePolicy) -> Self {
        let (state, degraded) = match persistence.load() {
            Ok(Some(state)) => {
                debug!(lines = state.len(), "restored persisted cart");
                (state, false)
            }
            Ok(None) => (CartState::default(), false),
            Err(error) => {
                warn!(%error, "failed to restore persisted cart; starting empty");
                (CartState::default(), true)
            }
        };

        Self {
            state,
            persistence,
            policy,
            degraded,
        }
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// Re-adding a product already in the cart increases its quantity; see [`MergePolicy`] for
    /// what happens to the stored snapshot. A zero quantity is treated as one.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        self.state.add_item(product, quantity, self.policy);
        self.persist();
    }

    /// Remove the line for `product_id`. Unknown ids are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.state.remove_item(product_id);
        self.persist();
    }

    /// Set a line's quantity. A quantity of zero or less removes the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        self.state.update_quantity(product_id, quantity);
        self.persist();
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.state.clear();
        self.persist();
    }

    /// Show the cart drawer.
    pub fn open_cart(&mut self) {
        self.state.is_open = true;
        self.persist();
    }

    /// Hide the cart drawer.
    pub fn close_cart(&mut self) {
        self.state.is_open = false;
        self.persist();
    }

    /// Flip the cart drawer visibility.
    pub fn toggle_cart(&mut self) {
        self.state.is_open = !self.state.is_open;
        self.persist();
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.state.total_items()
    }

    /// Sum of snapshot unit price times quantity, with missing prices counted as zero.
    pub fn total_price(&self) -> Decimal {
        self.state.total_price()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    /// Look up the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.state.line(product_id)
    }

    /// Whether the cart drawer is shown.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The full cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Merge policy in effect.
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Whether the last load or save failed, meaning the cart may not survive a restart.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Release the persistence adapter.
    pub fn into_persistence(self) -> P {
        self.persistence
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.state) {
            Ok(()) => self.degraded = false,
            Err(error) => {
                warn!(%error, "failed to persist cart; changes are kept in memory only");
                self.degraded = true;
            }
        }
    }
}
