use crate::types::{BouquetId, BouquetName, BouquetSpec, FlowerKind, SizeBucket};
use std::collections::BTreeMap;
use std::fmt;

/// A sized container with a fixed recipe and a total capacity.
///
/// Recipe slots are reserved up front; flowers beyond a recipe quantity, and
/// flowers of kinds the recipe does not name, draw from the shared remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bouquet {
    name: BouquetName,
    size: SizeBucket,
    capacity: u32,
    required: BTreeMap<FlowerKind, u32>,
    contents: BTreeMap<FlowerKind, u32>,
}

impl Bouquet {
    /// Create an empty bouquet. A kind listed twice keeps its last quantity.
    pub fn new(
        name: BouquetName,
        size: SizeBucket,
        capacity: u32,
        recipe: impl IntoIterator<Item = (FlowerKind, u32)>,
    ) -> Self {
        Self {
            name,
            size,
            capacity,
            required: recipe.into_iter().collect(),
            contents: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_spec(spec: &BouquetSpec) -> Self {
        Self::new(spec.name, spec.size, spec.capacity, spec.recipe.iter().copied())
    }

    #[must_use]
    pub const fn id(&self) -> BouquetId {
        BouquetId::new(self.name, self.size)
    }

    #[must_use]
    pub const fn size(&self) -> SizeBucket {
        self.size
    }

    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Kinds named by the recipe, ascending
    pub fn required_kinds(&self) -> impl Iterator<Item = FlowerKind> + '_ {
        self.required.keys().copied()
    }

    /// Quantity of `kind` placed so far
    #[must_use]
    pub fn quantity(&self, kind: FlowerKind) -> u32 {
        self.contents.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of flowers placed so far
    #[must_use]
    pub fn total_flowers(&self) -> u64 {
        self.contents.values().map(|&q| u64::from(q)).sum()
    }

    /// Every recipe quantity is met (vacuously true for an empty recipe)
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.required
            .iter()
            .all(|(&kind, &qty)| self.quantity(kind) >= qty)
    }

    /// The recipe names `kind` and its quantity is not yet met
    #[must_use]
    pub fn is_flower_needed(&self, kind: FlowerKind) -> bool {
        self.required
            .get(&kind)
            .is_some_and(|&qty| self.quantity(kind) < qty)
    }

    /// `capacity - reserved - used`; negative when the recipe alone exceeds capacity
    #[must_use]
    pub fn free_space(&self) -> i64 {
        let reserved: i64 = self.required.values().map(|&q| i64::from(q)).sum();
        let used: i64 = self
            .contents
            .iter()
            .map(|(kind, &qty)| match self.required.get(kind) {
                Some(&req) => i64::from(qty.saturating_sub(req)),
                None => i64::from(qty),
            })
            .sum();

        i64::from(self.capacity) - reserved - used
    }

    #[must_use]
    pub fn has_free_space(&self) -> bool {
        self.free_space() > 0
    }

    /// Place one flower. Callers decide whether the placement is allowed.
    pub fn add_flower(&mut self, kind: FlowerKind) {
        let qty = self.contents.entry(kind).or_insert(0);
        *qty = qty.saturating_add(1);
    }
}

/// Canonical form: name, size, then `<qty><kind>` for every placed kind, ascending by kind.
impl fmt::Display for Bouquet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.size)?;
        for (kind, qty) in &self.contents {
            write!(f, "{qty}{kind}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(c: char) -> FlowerKind {
        FlowerKind::new(c).unwrap()
    }

    fn bouquet(recipe: &[(char, u32)], capacity: u32) -> Bouquet {
        Bouquet::new(
            BouquetName::new('A').unwrap(),
            SizeBucket::new('S').unwrap(),
            capacity,
            recipe.iter().map(|&(c, q)| (kind(c), q)),
        )
    }

    #[test]
    fn test_ready_flips_on_last_shortfall() {
        let mut b = bouquet(&[('a', 2), ('b', 1)], 10);
        assert!(!b.is_ready());

        b.add_flower(kind('a'));
        b.add_flower(kind('b'));
        assert!(!b.is_ready());

        b.add_flower(kind('a'));
        assert!(b.is_ready());
    }

    #[test]
    fn test_empty_recipe_is_ready() {
        let b = bouquet(&[], 3);
        assert!(b.is_ready());
        assert_eq!(b.required_kinds().count(), 0);
    }

    #[test]
    fn test_flower_needed() {
        let mut b = bouquet(&[('a', 1)], 5);
        assert!(b.is_flower_needed(kind('a')));
        assert!(!b.is_flower_needed(kind('z')));

        b.add_flower(kind('a'));
        assert!(!b.is_flower_needed(kind('a')));
    }

    #[test]
    fn test_free_space_counts_surplus_and_decorative() {
        let mut b = bouquet(&[('a', 2), ('b', 1)], 6);
        // 6 - 3 reserved
        assert_eq!(b.free_space(), 3);

        // filling recipe slots does not consume shared space
        b.add_flower(kind('a'));
        b.add_flower(kind('a'));
        assert_eq!(b.free_space(), 3);

        // surplus of a required kind does
        b.add_flower(kind('a'));
        assert_eq!(b.free_space(), 2);

        // decorative kinds count fully
        b.add_flower(kind('x'));
        b.add_flower(kind('x'));
        assert_eq!(b.free_space(), 0);
        assert!(!b.has_free_space());
    }

    #[test]
    fn test_free_space_never_increases() {
        let mut b = bouquet(&[('a', 1)], 4);
        let mut last = b.free_space();
        for c in ['a', 'b', 'a', 'c'] {
            b.add_flower(kind(c));
            let now = b.free_space();
            assert!(now <= last);
            last = now;
        }
    }

    #[test]
    fn test_free_space_negative_when_recipe_exceeds_capacity() {
        let b = bouquet(&[('a', 5)], 3);
        assert_eq!(b.free_space(), -2);
        assert!(!b.has_free_space());
    }

    #[test]
    fn test_canonical_string_sorted_by_kind() {
        let mut b = bouquet(&[('b', 1), ('a', 1)], 10);
        b.add_flower(kind('c'));
        b.add_flower(kind('b'));
        b.add_flower(kind('a'));
        b.add_flower(kind('c'));

        assert_eq!(b.to_string(), "AS1a1b2c");
        assert_eq!(b.to_string(), b.to_string());
    }

    #[test]
    fn test_canonical_string_empty_contents() {
        let b = bouquet(&[('a', 1)], 1);
        assert_eq!(b.to_string(), "AS");
    }

    #[test]
    fn test_last_recipe_quantity_wins() {
        let b = bouquet(&[('a', 1), ('a', 4)], 10);
        assert_eq!(b.free_space(), 6);
    }
}
