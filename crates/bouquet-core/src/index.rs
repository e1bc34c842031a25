use crate::catalog::BouquetCatalog;
use crate::types::{BouquetId, IndexKey};
use std::collections::{HashMap, VecDeque};

/// Per `(kind, size)` FIFO of bouquets that needed that kind when the index was built.
///
/// Stale fronts are tolerated: a front candidate is only dropped when a new
/// arrival of its kind finds it no longer needs that kind. Each bouquet is
/// passed over at most once per recipe kind, so lookups are amortized O(1).
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    queues: HashMap<IndexKey, VecDeque<BouquetId>>,
}

impl CandidateIndex {
    /// Queue every bouquet under each of its recipe kinds, in catalog order
    #[must_use]
    pub fn build(catalog: &BouquetCatalog) -> Self {
        let mut queues: HashMap<IndexKey, VecDeque<BouquetId>> = HashMap::new();

        for bouquet in catalog.iter() {
            for kind in bouquet.required_kinds() {
                queues
                    .entry(IndexKey::new(kind, bouquet.size()))
                    .or_default()
                    .push_back(bouquet.id());
            }
        }

        log::info!(
            "Built candidate index: {} keys over {} bouquets",
            queues.len(),
            catalog.len()
        );

        Self { queues }
    }

    /// Current candidate for `key`; `None` when the key is absent
    #[must_use]
    pub fn peek(&self, key: IndexKey) -> Option<BouquetId> {
        self.queues.get(&key).and_then(|queue| queue.front().copied())
    }

    /// Drop the front candidate for `key`, removing the key once its queue is empty.
    /// No-op on an absent key.
    pub fn advance(&mut self, key: IndexKey) {
        let Some(queue) = self.queues.get_mut(&key) else {
            return;
        };
        queue.pop_front();
        if queue.is_empty() {
            self.queues.remove(&key);
        }
    }

    #[must_use]
    pub fn contains(&self, key: IndexKey) -> bool {
        self.queues.contains_key(&key)
    }

    /// Remaining candidates for `key`
    #[must_use]
    pub fn queue_len(&self, key: IndexKey) -> usize {
        self.queues.get(&key).map_or(0, VecDeque::len)
    }

    /// Number of live keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}
