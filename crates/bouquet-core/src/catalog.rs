use crate::bouquet::Bouquet;
use crate::types::{BouquetId, BouquetSpec};
use std::collections::HashMap;

/// All bouquets of a run, in definition order, keyed by `name+size`
#[derive(Debug, Clone, Default)]
pub struct BouquetCatalog {
    bouquets: Vec<Bouquet>,
    positions: HashMap<BouquetId, usize>,
}

impl BouquetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs<'a>(specs: impl IntoIterator<Item = &'a BouquetSpec>) -> Self {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.insert(spec);
        }
        catalog
    }

    /// Add a bouquet built from `spec`.
    ///
    /// Redefining an existing id replaces the bouquet in its original slot.
    pub fn insert(&mut self, spec: &BouquetSpec) {
        let bouquet = Bouquet::from_spec(spec);
        let id = bouquet.id();

        if let Some(&pos) = self.positions.get(&id) {
            log::warn!("Bouquet {id} redefined; keeping its original position");
            self.bouquets[pos] = bouquet;
        } else {
            self.positions.insert(id, self.bouquets.len());
            self.bouquets.push(bouquet);
        }
    }

    #[must_use]
    pub fn get(&self, id: BouquetId) -> Option<&Bouquet> {
        self.positions.get(&id).map(|&pos| &self.bouquets[pos])
    }

    pub fn get_mut(&mut self, id: BouquetId) -> Option<&mut Bouquet> {
        let pos = *self.positions.get(&id)?;
        self.bouquets.get_mut(pos)
    }

    /// Bouquets in definition order
    pub fn iter(&self) -> impl Iterator<Item = &Bouquet> {
        self.bouquets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Bouquet> {
        self.bouquets.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bouquets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bouquets.is_empty()
    }
}
