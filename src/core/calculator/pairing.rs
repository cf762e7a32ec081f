//! Entry/Exit pairing strategies.
//!
//! A strategy receives the events of one `(user, date)` group, already sorted
//! by timestamp, and returns candidate `(entry, exit)` pairs. Validity
//! (`exit > entry`) is checked by the reconstructor, not here.

use crate::config::PairingKind;
use crate::models::access_event::AccessEvent;
use chrono::NaiveDateTime;

pub trait PairingStrategy {
    fn pair(&self, sorted: &[&AccessEvent]) -> Vec<(NaiveDateTime, NaiveDateTime)>;
}

/// i-th Entry with i-th Exit; surplus Entries or Exits are dropped.
///
/// Mis-pairs when the two counts differ or events interleave (e.g. an Exit
/// before the first Entry shifts every following pair).
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalPairing;

impl PairingStrategy for PositionalPairing {
    fn pair(&self, sorted: &[&AccessEvent]) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        let entries = sorted
            .iter()
            .filter(|e| e.direction.is_entry())
            .map(|e| e.timestamp);
        let exits = sorted
            .iter()
            .filter(|e| e.direction.is_exit())
            .map(|e| e.timestamp);

        entries.zip(exits).collect()
    }
}

/// An Entry pairs only with the Exit immediately following it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialPairing;

impl PairingStrategy for SequentialPairing {
    fn pair(&self, sorted: &[&AccessEvent]) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        let mut pairs = Vec::new();
        let mut i = 0;

        while i < sorted.len() {
            // Case: Entry followed by Exit → pair
            if sorted[i].direction.is_entry()
                && i + 1 < sorted.len()
                && sorted[i + 1].direction.is_exit()
            {
                pairs.push((sorted[i].timestamp, sorted[i + 1].timestamp));
                i += 2;
                continue;
            }

            // Entry without Exit, or stray Exit → skip
            i += 1;
        }

        pairs
    }
}

/// Strategy selected in the configuration.
pub fn strategy_for(kind: PairingKind) -> Box<dyn PairingStrategy> {
    match kind {
        PairingKind::Positional => Box::new(PositionalPairing),
        PairingKind::Sequential => Box::new(SequentialPairing),
    }
}
