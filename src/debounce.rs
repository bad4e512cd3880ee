//! Debounced resolution of six switches into one selected position.
//!
//! Each position has a saturating confidence counter. A counter that reaches
//! the debounce limit selects its position; the selection then sticks until
//! another counter saturates. Short or bouncing presses decay back to zero
//! without ever touching the output.

use crate::config::{DEBOUNCE_LIMIT, POSITION_COUNT};
use crate::types::{Position, SwitchStates};

/// How concurrent presses affect each other's confidence counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arbitration {
    /// Each counter follows only its own switch: pressed counts up, released
    /// counts down.
    #[default]
    Independent,

    /// A pressed switch counts its own counter up and every other counter
    /// down. Two switches held together cancel out and never select.
    Suppressing,
}

/// Saturating-counter debouncer with sticky selection.
#[derive(Debug, Clone)]
pub struct DebounceResolver {
    confidence: [u8; POSITION_COUNT],
    selected: Position,
    limit: u8,
    arbitration: Arbitration,
}

impl DebounceResolver {
    /// Resolver with the reference limit and independent counters.
    pub const fn new() -> Self {
        Self::with_limit(DEBOUNCE_LIMIT, Arbitration::Independent)
    }

    /// Resolver with a custom limit and arbitration rule.
    ///
    /// All counters start at zero and position 1 is selected. A zero limit
    /// is raised to 1 so an idle counter never counts as saturated.
    pub const fn with_limit(limit: u8, arbitration: Arbitration) -> Self {
        let limit = if limit == 0 { 1 } else { limit };
        Self {
            confidence: [0; POSITION_COUNT],
            selected: Position::FIRST,
            limit,
            arbitration,
        }
    }

    /// Feeds one tick of switch readings and returns the selected position.
    ///
    /// Counters are updated first, then positions are scanned 1 to 6 and every
    /// saturated one overwrites the selection, so the highest saturated
    /// position wins. With nothing saturated the previous selection stays.
    pub fn resolve(&mut self, switches: SwitchStates) -> Position {
        let mut next = self.confidence.map(i16::from);

        for position in Position::ALL {
            if !switches.is_active(position) {
                next[position.index()] -= 1;
            }
        }

        for position in switches.active_positions() {
            let own = position.index();
            match self.arbitration {
                Arbitration::Independent => next[own] += 1,
                Arbitration::Suppressing => {
                    for (index, counter) in next.iter_mut().enumerate() {
                        if index == own {
                            *counter += 1;
                        } else {
                            *counter -= 1;
                        }
                    }
                }
            }
        }

        let limit = i16::from(self.limit);
        for (counter, value) in self.confidence.iter_mut().zip(next) {
            *counter = value.clamp(0, limit) as u8;
        }

        #[cfg(feature = "defmt")]
        let previous = self.selected;
        for position in Position::ALL {
            if self.confidence[position.index()] == self.limit {
                self.selected = position;
            }
        }

        #[cfg(feature = "defmt")]
        if self.selected != previous {
            defmt::debug!("position {} -> {}", previous, self.selected);
        }

        self.selected
    }

    /// Currently selected position.
    #[inline]
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Confidence counter of `position`.
    #[inline]
    pub fn confidence(&self, position: Position) -> u8 {
        self.confidence[position.index()]
    }

    /// Debounce limit.
    #[inline]
    pub fn limit(&self) -> u8 {
        self.limit
    }

    /// Active arbitration rule.
    #[inline]
    pub fn arbitration(&self) -> Arbitration {
        self.arbitration
    }
}

impl Default for DebounceResolver {
    fn default() -> Self {
        Self::new()
    }
}
