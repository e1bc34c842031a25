use crate::catalog::BouquetCatalog;
use crate::config::{MalformedPolicy, ProcessorConfig};
use crate::error::{BouquetError, Result};
use crate::parser::{decode_line, is_section_break, parse_spec};
use crate::processor::{RunStats, StreamProcessor};
use std::io::{BufRead, Write};

/// Read specification lines up to the first blank line (or end of input).
///
/// `lines` yields raw lines without their `\n`. Returns the catalog and the
/// number of skipped malformed lines.
pub fn read_catalog<I>(lines: &mut I, config: &ProcessorConfig) -> Result<(BouquetCatalog, usize)>
where
    I: Iterator<Item = std::io::Result<Vec<u8>>>,
{
    let mut catalog = BouquetCatalog::new();
    let mut malformed = 0usize;

    for line in lines.by_ref() {
        let line = line?;
        let parsed = decode_line(&line)
            .map_err(|lossy| BouquetError::malformed_spec(lossy, "not valid UTF-8"))
            .and_then(|text| {
                if is_section_break(text) {
                    Ok(None)
                } else {
                    parse_spec(text).map(Some)
                }
            });

        match parsed {
            Ok(None) => break,
            Ok(Some(spec)) => catalog.insert(&spec),
            Err(err) => match config.on_malformed_spec {
                MalformedPolicy::Skip => {
                    log::warn!("Skipping specification: {err}");
                    malformed += 1;
                }
                MalformedPolicy::Abort => return Err(err),
            },
        }
    }

    log::info!(
        "Loaded {} bouquets ({} malformed specifications skipped)",
        catalog.len(),
        malformed
    );
    Ok((catalog, malformed))
}

/// Run both phases over `input`, writing and flushing each completed bouquet to
/// `output` before the next line is read.
pub fn run<R, W>(input: R, output: &mut W, config: &ProcessorConfig) -> Result<RunStats>
where
    R: BufRead,
    W: Write,
{
    config.validate().map_err(BouquetError::invalid_config)?;

    let mut lines = input.split(b'\n');
    let (catalog, malformed_specs) = read_catalog(&mut lines, config)?;
    let mut processor = StreamProcessor::new(catalog, config.clone());

    for line in lines {
        let line = line?;
        if let Some(assignment) = processor.process_raw(&line)? {
            if let Some(completed) = assignment.completed() {
                writeln!(output, "{completed}")?;
                output.flush()?;
            }
        }
    }
    output.flush()?;

    let mut stats = processor.into_stats();
    stats.malformed_specs = malformed_specs;
    log::info!("Run finished: {stats}");
    Ok(stats)
}
