//! Typed parsers for the two line formats of a run.
//!
//! ```text
//! specification:  <Name><Size>(<qty><kind>)+<capacity>    AS3a2b10
//! arrival:        <kind><Size>                            aS
//! ```

use crate::error::{BouquetError, Result};
use crate::types::{BouquetName, BouquetSpec, Flower, FlowerKind, SizeBucket};
use once_cell::sync::Lazy;
use regex::Regex;

static SPEC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z])([A-Z])((?:[0-9]+[a-z])+)([0-9]+)$").expect("valid spec regex")
});

static RECIPE_PAIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)([a-z])").expect("valid recipe regex"));

static ARRIVAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z])([A-Z])$").expect("valid arrival regex"));

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn record_text(line: &str) -> &str {
    strip_terminator(line).trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Decode one raw input line; on failure returns a lossy rendering for diagnostics
pub fn decode_line(line: &[u8]) -> std::result::Result<&str, String> {
    std::str::from_utf8(line).map_err(|_| String::from_utf8_lossy(line).into_owned())
}

/// True for the line that separates specifications from arrivals
#[must_use]
pub fn is_section_break(line: &str) -> bool {
    strip_terminator(line).is_empty()
}

fn first_char(text: &str) -> Option<char> {
    text.chars().next()
}

/// Parse one bouquet specification line
pub fn parse_spec(line: &str) -> Result<BouquetSpec> {
    let text = record_text(line);
    let caps = SPEC_RE.captures(text).ok_or_else(|| {
        BouquetError::malformed_spec(text, "expected <Name><Size>(<qty><kind>)+<capacity>")
    })?;

    // The regex guarantees one uppercase letter in each of these groups.
    let name = first_char(&caps[1])
        .and_then(BouquetName::new)
        .ok_or_else(|| BouquetError::malformed_spec(text, "invalid bouquet name"))?;
    let size = first_char(&caps[2])
        .and_then(SizeBucket::new)
        .ok_or_else(|| BouquetError::malformed_spec(text, "invalid size bucket"))?;

    let mut recipe: Vec<(FlowerKind, u32)> = Vec::new();
    for pair in RECIPE_PAIR_RE.captures_iter(&caps[3]) {
        let qty: u32 = pair[1].parse().map_err(|_| {
            BouquetError::malformed_spec(text, format!("quantity {} out of range", &pair[1]))
        })?;
        if qty == 0 {
            return Err(BouquetError::malformed_spec(
                text,
                "recipe quantities must be positive",
            ));
        }
        let kind = first_char(&pair[2])
            .and_then(FlowerKind::new)
            .ok_or_else(|| BouquetError::malformed_spec(text, "invalid flower kind"))?;

        if recipe.iter().any(|&(seen, _)| seen == kind) {
            log::warn!(
                "Bouquet {name}{size} lists kind '{kind}' more than once; last quantity wins"
            );
        }
        recipe.push((kind, qty));
    }

    let capacity: u32 = caps[4].parse().map_err(|_| {
        BouquetError::malformed_spec(text, format!("capacity {} out of range", &caps[4]))
    })?;

    Ok(BouquetSpec {
        name,
        size,
        recipe,
        capacity,
    })
}

/// Parse one flower arrival line
pub fn parse_arrival(line: &str) -> Result<Flower> {
    let text = record_text(line);
    let caps = ARRIVAL_RE
        .captures(text)
        .ok_or_else(|| BouquetError::malformed_arrival(text, "expected <kind><Size>"))?;

    let kind = first_char(&caps[1])
        .and_then(FlowerKind::new)
        .ok_or_else(|| BouquetError::malformed_arrival(text, "invalid flower kind"))?;
    let size = first_char(&caps[2])
        .and_then(SizeBucket::new)
        .ok_or_else(|| BouquetError::malformed_arrival(text, "invalid size bucket"))?;

    Ok(Flower::new(kind, size))
}
