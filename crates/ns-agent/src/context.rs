//! Read-only world state passed to every decision and update call.

use ns_core::{SanctionMethod, SimConfig, Tick};
use ns_spatial::{GridMap, TrashField};

/// A read-only snapshot of the world shared by all agents within one phase.
///
/// Built by the step engine for the decide phase and again for the update
/// phase; the trash field may differ between the two.  The engine never
/// mutates these structures while a context is live.
pub struct DecisionContext<'a> {
    pub tick:   Tick,
    pub config: &'a SimConfig,
    pub map:    &'a GridMap,
    pub trash:  &'a TrashField,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(
        tick:   Tick,
        config: &'a SimConfig,
        map:    &'a GridMap,
        trash:  &'a TrashField,
    ) -> Self {
        Self { tick, config, map, trash }
    }

    #[inline]
    pub fn method(&self) -> SanctionMethod {
        self.config.method
    }
}
