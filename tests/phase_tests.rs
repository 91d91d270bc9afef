use battleship_client::{GameState, Phase};

fn state(placing: bool, over: bool) -> GameState {
    GameState {
        placing,
        over,
        ..GameState::default()
    }
}

#[test]
fn test_phase_projection() {
    assert_eq!(Phase::of(&state(true, false)), Phase::Placing);
    assert_eq!(Phase::of(&state(false, false)), Phase::Battle);
    // `over` wins regardless of the placing flag.
    assert_eq!(Phase::of(&state(false, true)), Phase::Over);
    assert_eq!(Phase::of(&state(true, true)), Phase::Over);
}

#[test]
fn test_permitted_actions_by_phase() {
    assert!(!Phase::Placing.allows_fire());
    assert!(Phase::Placing.allows_place());

    assert!(Phase::Battle.allows_fire());
    assert!(!Phase::Battle.allows_place());

    assert!(!Phase::Over.allows_fire());
    assert!(!Phase::Over.allows_place());

    for phase in [Phase::Placing, Phase::Battle, Phase::Over] {
        assert!(phase.allows_new_game());
    }
}
