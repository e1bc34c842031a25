use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a flower (single lowercase ASCII letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlowerKind(char);

impl FlowerKind {
    /// Accepts `a..=z` only
    #[must_use]
    pub const fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_lowercase() {
            Some(Self(letter))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

/// Size bucket shared by bouquets and arriving flowers (single uppercase ASCII letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SizeBucket(char);

impl SizeBucket {
    /// Accepts `A..=Z` only
    #[must_use]
    pub const fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self(letter))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

/// Bouquet design name (single uppercase ASCII letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BouquetName(char);

impl BouquetName {
    /// Accepts `A..=Z` only
    #[must_use]
    pub const fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self(letter))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for FlowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BouquetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique key of a bouquet in the catalog (e.g. `AS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BouquetId {
    pub name: BouquetName,
    pub size: SizeBucket,
}

impl BouquetId {
    #[must_use]
    pub const fn new(name: BouquetName, size: SizeBucket) -> Self {
        Self { name, size }
    }
}

impl fmt::Display for BouquetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.size)
    }
}

/// Candidate index key: a flower kind within a size bucket (e.g. `aS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexKey {
    pub kind: FlowerKind,
    pub size: SizeBucket,
}

impl IndexKey {
    #[must_use]
    pub const fn new(kind: FlowerKind, size: SizeBucket) -> Self {
        Self { kind, size }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.size)
    }
}

/// One arriving flower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flower {
    pub kind: FlowerKind,
    pub size: SizeBucket,
}

impl Flower {
    #[must_use]
    pub const fn new(kind: FlowerKind, size: SizeBucket) -> Self {
        Self { kind, size }
    }

    /// Index key this flower is looked up under
    #[must_use]
    pub const fn key(&self) -> IndexKey {
        IndexKey::new(self.kind, self.size)
    }
}

/// A parsed bouquet specification record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BouquetSpec {
    pub name: BouquetName,
    pub size: SizeBucket,

    /// Recipe pairs in the order they were written
    pub recipe: Vec<(FlowerKind, u32)>,

    /// Maximum number of flowers the bouquet may hold
    pub capacity: u32,
}

impl BouquetSpec {
    #[must_use]
    pub const fn id(&self) -> BouquetId {
        BouquetId::new(self.name, self.size)
    }
}
