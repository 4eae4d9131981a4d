// In crates/journal/src/store.rs

use crate::summary::JournalSummary;
use crate::{Error, Result};
use core_types::{Risk, Trade};
use events::JournalEvent;
use risk::RiskClassifier;
use std::collections::BTreeSet;
use std::fmt;

/// Handle returned by [`TradeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&JournalEvent)>;

/// The session's ordered collection of trades.
///
/// Insertion order is display order. The store owns every mutation and after
/// each successful one it bumps `version` and notifies all subscribers, so a
/// reader can either poll `version()` or subscribe to events. Failed mutations
/// leave the trades, the version and the subscribers untouched.
#[derive(Default)]
pub struct TradeStore {
    trades: Vec<Trade>,
    version: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl TradeStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current trades, in display order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn get(&self, index: usize) -> Option<&Trade> {
        self.trades.get(index)
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Number of successful mutations since the store was created.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Sum of every trade's risk, recomputed on each call.
    pub fn total_risk(&self) -> Risk {
        self.trades.iter().map(Trade::risk).sum()
    }

    pub fn summary(&self, classifier: &dyn RiskClassifier) -> JournalSummary {
        JournalSummary::from_trades(&self.trades, classifier)
    }

    /// Appends a trade to the end of the journal.
    pub fn add_trade(&mut self, trade: Trade) {
        let index = self.trades.len();
        self.trades.push(trade.clone());
        self.version += 1;

        tracing::debug!(
            ticker = %trade.ticker(),
            index,
            version = self.version,
            "Trade added"
        );
        self.notify(JournalEvent::added(self.version, index, trade));
    }

    /// Removes the trades at the given positions in one atomic update.
    ///
    /// Positions refer to the journal as it is before the call; duplicates are
    /// ignored. If any position is out of range nothing is removed.
    ///
    /// # Returns
    ///
    /// The removed trades in ascending position order. Deleting an empty set of
    /// positions is a no-op that neither bumps the version nor notifies.
    pub fn delete_trades<I>(&mut self, indices: I) -> Result<Vec<Trade>>
    where
        I: IntoIterator<Item = usize>,
    {
        let positions: BTreeSet<usize> = indices.into_iter().collect();
        let len = self.trades.len();

        if let Some(&index) = positions.iter().find(|&&index| index >= len) {
            tracing::warn!(index, len, "Rejected delete of an out-of-range position");
            return Err(Error::IndexOutOfRange { index, len });
        }
        if positions.is_empty() {
            return Ok(Vec::new());
        }

        let mut removed = Vec::with_capacity(positions.len());
        let mut kept = Vec::with_capacity(len - positions.len());
        for (index, trade) in std::mem::take(&mut self.trades).into_iter().enumerate() {
            if positions.contains(&index) {
                removed.push(trade);
            } else {
                kept.push(trade);
            }
        }
        self.trades = kept;
        self.version += 1;

        tracing::debug!(
            removed = removed.len(),
            remaining = self.trades.len(),
            version = self.version,
            "Trades deleted"
        );
        self.notify(JournalEvent::removed(
            self.version,
            positions.into_iter().collect(),
            removed.clone(),
        ));

        Ok(removed)
    }

    /// Registers a callback that receives every event after the mutation completes.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&JournalEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscribed, _)| *subscribed != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, event: JournalEvent) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}

impl fmt::Debug for TradeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradeStore")
            .field("trades", &self.trades)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
