use tracing::{debug, warn};

use super::{
    AppliedChange, INVENTORY_MARKER, MovedObject, ParsedUpdate, UpdateFailure, UpdateReport,
    decode,
};
use crate::world::World;

impl World {
    /// Decode update text from the narrative model and apply it.
    pub fn parse_updates(&mut self, text: &str) -> UpdateReport {
        self.apply_update(&decode(text))
    }

    /// Apply a decoded update: moved objects, then unblocked passages, then
    /// the location change.
    ///
    /// The order lets a passage opened by this update be walked through in
    /// the same update. Each clause is applied on its own; failures are
    /// logged, collected in the report, and never stop later clauses.
    pub fn apply_update(&mut self, update: &ParsedUpdate) -> UpdateReport {
        let mut report = UpdateReport {
            narration: update.narration.clone(),
            ..UpdateReport::default()
        };
        for line in &update.malformed {
            report.failures.push(UpdateFailure::Malformed { line: line.clone() });
        }

        for moved in &update.moved {
            let outcome = self.apply_moved_object(moved);
            record(&mut report, outcome);
        }
        for target in &update.unblocked {
            let outcome = self.apply_unblock(target);
            record(&mut report, outcome);
        }
        if let Some(target) = &update.location_change {
            if let Some(outcome) = self.apply_location_change(target) {
                record(&mut report, outcome);
            }
        }

        for failure in &report.failures {
            warn!(%failure, "update clause skipped");
        }
        debug!(
            applied = report.applied.len(),
            failed = report.failures.len(),
            "update applied"
        );
        report
    }

    fn apply_moved_object(&mut self, moved: &MovedObject) -> Result<AppliedChange, UpdateFailure> {
        let Some(item) = self.items.get(&moved.item) else {
            return Err(UpdateFailure::UnknownItem {
                name: moved.item.clone(),
                suggestion: self.items.suggest(&moved.item).map(str::to_string),
            });
        };
        let item = item.name.clone();
        let player = self.player.name.clone();
        let destination = moved.destination.as_str();
        let clause = format!("<{item}> now is in <{destination}>");
        let rejected = |error| UpdateFailure::Rejected {
            clause: clause.clone(),
            error,
        };

        if destination.eq_ignore_ascii_case(INVENTORY_MARKER) || self.is_player(destination) {
            self.take(&player, &item).map_err(rejected)?;
            Ok(AppliedChange::Taken { item })
        } else if let Some(receiver) = self.characters.get(destination) {
            let receiver = receiver.name.clone();
            self.give(&player, &item, &receiver).map_err(rejected)?;
            Ok(AppliedChange::Given { item, to: receiver })
        } else {
            // Dropped items land where the player stands, whatever place the
            // model named.
            self.drop(&player, &item).map_err(rejected)?;
            Ok(AppliedChange::Dropped {
                item,
                at: self.player.location.clone(),
            })
        }
    }

    fn apply_unblock(&mut self, target: &str) -> Result<AppliedChange, UpdateFailure> {
        let to = self.resolve_location(target)?;
        let from = self.player.location.clone();
        self.unblock_passage(&from, &to)
            .map_err(|error| UpdateFailure::Rejected {
                clause: format!("unblock <{from}> -> <{to}>"),
                error,
            })?;
        Ok(AppliedChange::Unblocked { from, to })
    }

    fn apply_location_change(
        &mut self,
        target: &str,
    ) -> Option<Result<AppliedChange, UpdateFailure>> {
        let to = match self.resolve_location(target) {
            Ok(to) => to,
            Err(failure) => return Some(Err(failure)),
        };
        let from = self.player.location.clone();
        if from == to {
            debug!(location = %to, "player already there");
            return None;
        }
        let player = self.player.name.clone();
        let outcome = self
            .move_character(&player, &to)
            .map(|()| AppliedChange::Moved {
                from,
                to: to.clone(),
            })
            .map_err(|error| UpdateFailure::Rejected {
                clause: format!("move to <{to}>"),
                error,
            });
        Some(outcome)
    }

    fn resolve_location(&self, name: &str) -> Result<String, UpdateFailure> {
        self.locations
            .get(name)
            .map(|location| location.name.clone())
            .ok_or_else(|| UpdateFailure::UnknownLocation {
                name: name.to_string(),
                suggestion: self.locations.suggest(name).map(str::to_string),
            })
    }
}

fn record(report: &mut UpdateReport, outcome: Result<AppliedChange, UpdateFailure>) {
    match outcome {
        Ok(change) => report.applied.push(change),
        Err(failure) => report.failures.push(failure),
    }
}
