//! Command implementations

use crate::diff::{diff, Discrepancy};
use crate::error::{Error, Result};
use crate::extract::{synthetic_unit, InterfaceExtractor, SignatureMap};
use std::path::Path;
use tracing::debug;

/// Origin label used for the documentation-side compilation unit in
/// parse error messages
const SYNTHETIC_ORIGIN: &str = "<documentation blocks>";

/// Run the full check: extract the actual interface from the source
/// file and the documented one from the README, then diff them.
///
/// Every failure on the source side is fatal. On the documentation
/// side, an absent (or wrong-kind) interface degrades to an empty
/// signature map so each actual method reports as missing from the
/// docs; a syntax error inside the matched blocks stays fatal.
pub fn check(docs: &Path, source: &Path, interface_name: &str) -> Result<Vec<Discrepancy>> {
    let mut extractor = InterfaceExtractor::new()?;

    let source_text = read_input(source)?;
    let actual = extractor.extract(
        &source.display().to_string(),
        &source_text,
        interface_name,
    )?;

    let docs_text = read_input(docs)?;
    let unit = synthetic_unit(&docs_text, interface_name);

    let documented = match extractor.extract(SYNTHETIC_ORIGIN, unit.source(), interface_name) {
        Ok(map) => map,
        Err(Error::InterfaceNotFound(_)) | Err(Error::NotAnInterface(_)) => {
            debug!(
                interface = interface_name,
                "interface absent from documentation blocks"
            );
            SignatureMap::new()
        }
        Err(err) => return Err(err),
    };

    Ok(diff(&actual, &documented))
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::file_read(path, source))
}

/// Print discrepancies in the two-line report format
pub fn print_discrepancies_text(records: &[Discrepancy]) {
    for record in records {
        println!("Actual: {}", record.actual_rendered());
        println!("Readme: {}", record.documented_rendered());
        println!();
    }
}

/// Print discrepancies in JSON format
pub fn print_discrepancies_json(records: &[Discrepancy]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{}", json);
    Ok(())
}
