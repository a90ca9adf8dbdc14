//! Proptest generators for transcripts

use super::{Role, Transcript, Turn};
use proptest::prelude::*;

pub fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::System), Just(Role::User), Just(Role::Assistant)]
}

/// Turn whose content mixes quotes, markup and non-ASCII text
pub fn arb_turn() -> impl Strategy<Value = Turn> {
    (
        arb_role(),
        "[a-zA-Z0-9 \"'<>&;#=/\\\\\n\t{}\\[\\]é日本🙂]{0,80}",
    )
        .prop_map(|(role, content)| Turn::new(role, content))
}

pub fn arb_transcript() -> impl Strategy<Value = Transcript> {
    proptest::collection::vec(arb_turn(), 1..12)
        .prop_map(|turns| Transcript::from_turns(turns).expect("vec strategy is non-empty"))
}
