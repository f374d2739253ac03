//! Stale-response rejection for query-driven fetches
//!
//! Every query change begins a new fetch generation. A response may only
//! be applied while its ticket is still the current generation, so results
//! always land in the order the user issued them, never in arrival order.
//! The underlying network call is not cancelled; a superseded response is
//! simply ignored when it finally settles.

use std::cell::Cell;
use std::rc::Rc;

/// Hands out one [`FetchTicket`] per dispatched request and remembers
/// which generation currently owns the view.
#[derive(Clone, Default)]
pub struct FetchCoordinator {
    current: Rc<Cell<u64>>,
}

impl FetchCoordinator {
    /// Start a new fetch generation, invalidating every earlier ticket.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.current.get() + 1;
        self.current.set(generation);
        FetchTicket {
            generation,
            current: Rc::clone(&self.current),
        }
    }
}

/// Proof of which fetch generation a response belongs to.
pub struct FetchTicket {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl FetchTicket {
    /// Whether this ticket's request is still the one the view is
    /// waiting for. Checked at the point of applying a response.
    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }
}

/// One page of results, replacing the previous page atomically.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchResult<T> {
    pub items: Vec<T>,
    pub total_count: u32,
}

/// View state of a query-driven list.
///
/// `Idle -> Loading -> {Loaded | Failed}`, and back to `Loading` on any
/// query change. An empty `Loaded` page is the empty state; which empty
/// message to render depends on whether filters are active.
#[derive(Clone, Debug, PartialEq)]
pub enum ListPhase<T> {
    Idle,
    Loading,
    Loaded(FetchResult<T>),
    Failed(String),
}

impl<T> ListPhase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListPhase::Idle | ListPhase::Loading)
    }

    pub fn total_count(&self) -> u32 {
        match self {
            ListPhase::Loaded(result) => result.total_count,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let coordinator = FetchCoordinator::default();
        let ticket = coordinator.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn newer_fetch_invalidates_older_ticket() {
        let coordinator = FetchCoordinator::default();
        let first = coordinator.begin();
        let second = coordinator.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn late_arrival_of_superseded_response_is_discarded() {
        // S1 is issued, then S2; S2's response lands first. When S1's
        // response finally arrives it must not overwrite the view.
        let coordinator = FetchCoordinator::default();
        let mut shown: Option<&str> = None;

        let t1 = coordinator.begin();
        let t2 = coordinator.begin();

        // S2 resolves first and is applied.
        if t2.is_current() {
            shown = Some("s2");
        }
        // S1 resolves later and must be rejected.
        if t1.is_current() {
            shown = Some("s1");
        }

        assert_eq!(shown, Some("s2"));
    }

    #[test]
    fn separate_coordinators_do_not_invalidate_each_other() {
        // One coordinator per lookup key: beginning a district fetch must
        // not discard an in-flight state fetch.
        let state_lookup = FetchCoordinator::default();
        let district_lookup = FetchCoordinator::default();

        let state_ticket = state_lookup.begin();
        district_lookup.begin();
        assert!(state_ticket.is_current());
    }

    #[test]
    fn clones_share_one_generation_counter() {
        let coordinator = FetchCoordinator::default();
        let ticket = coordinator.begin();
        let elsewhere = coordinator.clone();
        elsewhere.begin();
        assert!(!ticket.is_current());
    }

    #[test]
    fn phase_loading_states() {
        assert!(ListPhase::<u32>::Idle.is_loading());
        assert!(ListPhase::<u32>::Loading.is_loading());
        assert!(!ListPhase::<u32>::Failed("boom".into()).is_loading());
        let loaded = ListPhase::Loaded(FetchResult {
            items: vec![1u32],
            total_count: 9,
        });
        assert!(!loaded.is_loading());
        assert_eq!(loaded.total_count(), 9);
    }
}
