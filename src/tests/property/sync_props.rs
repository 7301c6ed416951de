//! Property-based tests for the URL synchronizer
//!
//! Tests invariants:
//! - The history always shows the encoding of the current state
//! - Each state-changing action pushes exactly one entry
//! - External navigation never pushes

use proptest::prelude::*;

use crate::core::query_string::{decode, encode};
use crate::core::selection::{apply, Action};
use crate::core::{History, MemoryHistory, UrlSync};
use crate::tests::common::fixtures::{arb_sort_mode, GENRES};

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(GENRES.to_vec()).prop_map(|g| Action::ToggleGenre(g.to_string())),
        prop::option::of(1990i32..1995).prop_map(Action::SetYear),
        arb_sort_mode().prop_map(Action::SetSort),
        (0u32..5).prop_map(Action::GoToPage),
    ]
}

proptest! {
    /// Property: after any action sequence, the history shows the current state
    #[test]
    fn prop_history_tracks_state(actions in prop::collection::vec(arb_action(), 0..20)) {
        let mut sync = UrlSync::new(MemoryHistory::new(""));
        let mut pushes = 0;
        for action in actions {
            let expected = apply(sync.state(), &action);
            let changed = expected != *sync.state();
            prop_assert_eq!(sync.dispatch(action), changed);
            if changed {
                pushes += 1;
            }
            prop_assert_eq!(sync.state(), &expected);
            prop_assert_eq!(sync.history().current_query(), encode(&expected));
        }
        prop_assert_eq!(sync.history().len(), pushes + 1);
    }

    /// Property: re-synchronizing from any query lands on its decoding without pushing
    #[test]
    fn prop_external_navigation_never_pushes(
        actions in prop::collection::vec(arb_action(), 0..10),
        query in "[a-z=&0-9]{0,30}",
    ) {
        let mut sync = UrlSync::new(MemoryHistory::new(""));
        for action in actions {
            sync.dispatch(action);
        }
        let len = sync.history().len();
        sync.on_external_navigation(&query);
        prop_assert_eq!(sync.state(), &decode(&query));
        prop_assert_eq!(sync.history().len(), len);
    }
}
