use crate::catalog::BouquetCatalog;
use crate::config::{MalformedPolicy, ProcessorConfig};
use crate::error::{BouquetError, Result};
use crate::index::CandidateIndex;
use crate::parser::{decode_line, parse_arrival};
use crate::types::{BouquetId, Flower};
use serde::Serialize;

/// Outcome of one arrival
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Placed in the current index candidate; `completed` holds the canonical
    /// form when the bouquet is ready after the placement
    Placed {
        bouquet: BouquetId,
        completed: Option<String>,
    },

    /// The front candidate no longer needed the kind and was advanced past.
    /// The flower itself is dropped.
    Skipped { bouquet: BouquetId },

    /// No index entry; placed in the first same-size bouquet with free space
    Fallback { bouquet: BouquetId },

    /// Nothing could take the flower
    Discarded,
}

impl Assignment {
    /// Canonical form to emit, if this arrival completed a bouquet
    #[must_use]
    pub fn completed(&self) -> Option<&str> {
        match self {
            Self::Placed {
                completed: Some(line),
                ..
            } => Some(line),
            _ => None,
        }
    }
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub arrivals: usize,
    pub placed_by_index: usize,
    pub stale_advances: usize,
    pub placed_by_fallback: usize,
    pub discarded: usize,
    pub malformed_arrivals: usize,
    pub malformed_specs: usize,
    pub emitted: usize,
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arrivals: {} | Index: {} | Stale: {} | Fallback: {} | Discarded: {} | \
             Malformed arrivals: {} | Malformed specs: {} | Emitted: {}",
            self.arrivals,
            self.placed_by_index,
            self.stale_advances,
            self.placed_by_fallback,
            self.discarded,
            self.malformed_arrivals,
            self.malformed_specs,
            self.emitted
        )
    }
}

/// Greedy streaming assignment of arriving flowers to bouquets
pub struct StreamProcessor {
    catalog: BouquetCatalog,
    index: CandidateIndex,
    config: ProcessorConfig,
    flowers_in_storage: usize,
    stats: RunStats,
}

impl StreamProcessor {
    /// Take ownership of the catalog and build its candidate index
    #[must_use]
    pub fn new(catalog: BouquetCatalog, config: ProcessorConfig) -> Self {
        let index = CandidateIndex::build(&catalog);
        Self {
            catalog,
            index,
            config,
            flowers_in_storage: 0,
            stats: RunStats::default(),
        }
    }

    /// Process one arrival
    pub fn process(&mut self, flower: Flower) -> Result<Assignment> {
        self.admit()?;
        Ok(self.assign(flower))
    }

    /// Process one raw arrival line.
    ///
    /// The line counts against storage before it is parsed. Returns `None`
    /// for a skipped malformed line.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Assignment>> {
        self.process_raw(line.as_bytes())
    }

    /// Process one undecoded arrival line; invalid UTF-8 is a malformed record
    pub fn process_raw(&mut self, line: &[u8]) -> Result<Option<Assignment>> {
        self.admit()?;

        let parsed = decode_line(line)
            .map_err(|lossy| BouquetError::malformed_arrival(lossy, "not valid UTF-8"))
            .and_then(parse_arrival);

        match parsed {
            Ok(flower) => Ok(Some(self.assign(flower))),
            Err(err) => {
                self.stats.malformed_arrivals += 1;
                match self.config.on_malformed_arrival {
                    MalformedPolicy::Skip => {
                        log::warn!("Skipping arrival: {err}");
                        Ok(None)
                    }
                    MalformedPolicy::Abort => Err(err),
                }
            }
        }
    }

    fn admit(&mut self) -> Result<()> {
        self.flowers_in_storage += 1;
        if self.flowers_in_storage > self.config.storage_capacity {
            log::warn!(
                "Storage full after {} arrivals (capacity {})",
                self.flowers_in_storage - 1,
                self.config.storage_capacity
            );
            return Err(BouquetError::StorageExhausted {
                capacity: self.config.storage_capacity,
            });
        }
        self.stats.arrivals += 1;
        Ok(())
    }

    fn assign(&mut self, flower: Flower) -> Assignment {
        let key = flower.key();

        if let Some(id) = self.index.peek(key) {
            let Some(candidate) = self.catalog.get_mut(id) else {
                log::warn!("Index candidate {id} missing from catalog; advancing {key}");
                self.index.advance(key);
                self.stats.stale_advances += 1;
                return Assignment::Skipped { bouquet: id };
            };

            if !candidate.is_flower_needed(flower.kind) {
                log::debug!("{key}: candidate {id} satisfied, advancing");
                self.index.advance(key);
                self.stats.stale_advances += 1;
                return Assignment::Skipped { bouquet: id };
            }

            candidate.add_flower(flower.kind);
            self.stats.placed_by_index += 1;

            let completed = candidate.is_ready().then(|| candidate.to_string());
            if let Some(line) = &completed {
                log::debug!("{key}: completed {line}");
                self.stats.emitted += 1;
            } else {
                log::debug!("{key}: placed in {id}");
            }
            return Assignment::Placed {
                bouquet: id,
                completed,
            };
        }

        let fallback = self
            .catalog
            .iter_mut()
            .find(|b| b.size() == flower.size && b.has_free_space());

        match fallback {
            Some(bouquet) => {
                bouquet.add_flower(flower.kind);
                self.stats.placed_by_fallback += 1;
                log::debug!("{key}: no candidates, placed in {}", bouquet.id());
                Assignment::Fallback {
                    bouquet: bouquet.id(),
                }
            }
            None => {
                self.stats.discarded += 1;
                log::debug!("{key}: no bouquet can take it, discarded");
                Assignment::Discarded
            }
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &BouquetCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn index(&self) -> &CandidateIndex {
        &self.index
    }

    #[must_use]
    pub const fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Arrival records counted so far, including the one that overflowed
    #[must_use]
    pub const fn flowers_in_storage(&self) -> usize {
        self.flowers_in_storage
    }

    #[must_use]
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    #[must_use]
    pub fn into_stats(self) -> RunStats {
        self.stats
    }
}
