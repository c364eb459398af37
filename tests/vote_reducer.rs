use forumkit::ui::mvi::Reducer;
use forumkit::ui::vote::{
    PostVoteState, Ticket, VoteIntent, VoteReducer, VoteSnapshot, VoteState, VoteType,
};

fn cast(state: PostVoteState, vote_type: VoteType) -> (PostVoteState, Ticket) {
    let ticket = state.next_ticket();
    (VoteReducer::reduce(state, VoteIntent::Cast { vote_type }), ticket)
}

fn confirm(state: PostVoteState, ticket: Ticket) -> PostVoteState {
    VoteReducer::reduce(state, VoteIntent::Confirmed { ticket })
}

fn reject(state: PostVoteState, ticket: Ticket) -> PostVoteState {
    VoteReducer::reduce(state, VoteIntent::Rejected { ticket })
}

#[test]
fn transition_table() {
    let cases = [
        (VoteState::None, VoteType::Up, VoteState::Up, 1),
        (VoteState::None, VoteType::Down, VoteState::Down, -1),
        (VoteState::Up, VoteType::Up, VoteState::None, -1),
        (VoteState::Down, VoteType::Down, VoteState::None, 1),
        (VoteState::Up, VoteType::Down, VoteState::Down, -2),
        (VoteState::Down, VoteType::Up, VoteState::Up, 2),
    ];

    for (from, intent, to, delta) in cases {
        let (state, _) = cast(PostVoteState::seeded(10, Some(from)), intent);
        assert_eq!(
            state.snapshot(),
            VoteSnapshot::new(to, 10 + delta),
            "{from} + {intent}"
        );
    }
}

#[test]
fn sequence_matches_table_applied_in_order() {
    let intents = [
        VoteType::Up,
        VoteType::Down,
        VoteType::Down,
        VoteType::Up,
        VoteType::Up,
        VoteType::Down,
    ];

    let mut state = PostVoteState::seeded(3, None);
    let mut expected = VoteSnapshot::new(VoteState::None, 3);
    for intent in intents {
        let (next, ticket) = cast(state, intent);
        state = confirm(next, ticket);

        let (vote, delta) = expected.vote.transition(intent);
        expected = VoteSnapshot::new(vote, expected.score + delta);
        assert_eq!(state.snapshot(), expected);
    }
    assert_eq!(state.unsettled(), 0);
}

#[test]
fn same_vote_twice_is_net_zero() {
    let (state, _) = cast(PostVoteState::seeded(42, None), VoteType::Up);
    let (state, _) = cast(state, VoteType::Up);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::None, 42));
}

#[test]
fn rejection_restores_exact_prior_state() {
    let (state, ticket) = cast(PostVoteState::seeded(7, Some(VoteState::Up)), VoteType::Down);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Down, 5));

    let state = reject(state, ticket);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Up, 7));
    assert_eq!(state.ledger().count(), 0);
}

#[test]
fn out_of_order_rejection_keeps_only_later_effect() {
    let start = 20;
    let (state, a) = cast(PostVoteState::seeded(start, None), VoteType::Up);
    let (state, b) = cast(state, VoteType::Down);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Down, start - 1));

    let state = confirm(state, b);
    let state = reject(state, a);

    // As if only the DOWN had ever been sent from NONE.
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Down, start - 1));
    assert_eq!(state.ledger().count(), 0);
}

#[test]
fn newer_rejection_then_older_rejection_unwinds_fully() {
    let (state, a) = cast(PostVoteState::seeded(0, None), VoteType::Up);
    let (state, b) = cast(state, VoteType::Down);

    let state = reject(state, b);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Up, 1));

    let state = reject(state, a);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::None, 0));
}

#[test]
fn older_confirmed_then_newer_rejected() {
    let (state, a) = cast(PostVoteState::seeded(0, None), VoteType::Up);
    let (state, b) = cast(state, VoteType::Down);

    let state = confirm(state, a);
    let state = reject(state, b);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Up, 1));
}

#[test]
fn duplicate_outcomes_are_ignored() {
    let (state, ticket) = cast(PostVoteState::seeded(5, None), VoteType::Down);
    let state = reject(state, ticket);
    let settled = state.clone();

    assert_eq!(reject(state.clone(), ticket), settled);
    assert_eq!(confirm(state, ticket), settled);
}

#[test]
fn confirmed_ticket_cannot_be_rejected_later() {
    let (state, ticket) = cast(PostVoteState::seeded(5, None), VoteType::Up);
    let state = confirm(state, ticket);
    let state = reject(state, ticket);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Up, 6));
}

#[test]
fn sync_changes_vote_but_not_score() {
    let state = PostVoteState::seeded(12, Some(VoteState::Down));
    let state = VoteReducer::reduce(state, VoteIntent::Sync { vote: VoteState::Up });
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Up, 12));
}

#[test]
fn pending_rejection_after_sync_restores_click_time_vote() {
    let (state, ticket) = cast(PostVoteState::seeded(1, None), VoteType::Up);
    let state = VoteReducer::reduce(state, VoteIntent::Sync { vote: VoteState::Up });

    let state = reject(state, ticket);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::None, 1));
}

#[test]
fn cast_past_score_bounds_is_ignored() {
    for (score, vote, intent) in [
        (i64::MAX, None, VoteType::Up),
        (i64::MAX - 1, Some(VoteState::Down), VoteType::Up),
        (i64::MIN, None, VoteType::Down),
        (i64::MIN + 1, Some(VoteState::Up), VoteType::Down),
    ] {
        let seeded = PostVoteState::seeded(score, vote);
        let issued = seeded.next_ticket();

        let state = VoteReducer::reduce(seeded.clone(), VoteIntent::Cast { vote_type: intent });
        assert_eq!(state, seeded, "{score} + {intent}");
        assert_eq!(state.next_ticket(), issued);
        assert!(!state.is_pending(issued));
    }
}

#[test]
fn rollback_at_score_bounds_is_exact() {
    let (state, ticket) = cast(PostVoteState::seeded(i64::MAX, None), VoteType::Down);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Down, i64::MAX - 1));
    let state = reject(state, ticket);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::None, i64::MAX));

    let (state, ticket) = cast(PostVoteState::seeded(i64::MIN, Some(VoteState::Down)), VoteType::Up);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Up, i64::MIN + 2));
    let state = reject(state, ticket);
    assert_eq!(state.snapshot(), VoteSnapshot::new(VoteState::Down, i64::MIN));
}
