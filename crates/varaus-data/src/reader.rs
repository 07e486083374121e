//! Reading the reservation export file from disk.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;
use varaus_core::error::{Result, VarausError};
use varaus_core::models::Reservation;

use crate::parser;

/// Load every reservation from the export file at `path`.
///
/// Lines are parsed in file order. Blank (whitespace-only) lines are
/// skipped but still counted, so errors report the line number an editor
/// would show. The first malformed line aborts the load, as does a
/// duplicate reservation id.
pub fn load_reservations(path: &Path) -> Result<Vec<Reservation>> {
    let file = std::fs::File::open(path).map_err(|source| VarausError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut reservations: Vec<Reservation> = Vec::new();
    let mut seen_ids: HashSet<u32> = HashSet::new();

    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let reservation = parser::parse_line(&line, line_number)?;
        if !seen_ids.insert(reservation.id) {
            return Err(VarausError::DuplicateId {
                line: line_number,
                id: reservation.id,
            });
        }
        reservations.push(reservation);
    }

    debug!(
        "Loaded {} reservations from {}",
        reservations.len(),
        path.display()
    );

    Ok(reservations)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
