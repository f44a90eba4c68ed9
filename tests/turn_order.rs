use holdem_engine::table::{Action, Phase, PlayerId, Table, TableConfig, TableError, TableView, TurnController};

fn four_handed() -> TurnController {
    let config = TableConfig {
        small_blind: 10,
        big_blind: 20,
        ..TableConfig::default()
    };
    let mut table = Table::with_seed(config, 420).unwrap();
    table.seat_players(4).unwrap();
    table.set_dealer_index(0).unwrap();
    let mut controller = TurnController::new(table);
    controller.start_hand().unwrap();
    controller
}

#[test_log::test]
fn test_first_to_act_is_left_of_big_blind() {
    let c = four_handed();
    assert_eq!(0, c.dealer_index());
    assert_eq!(10, c.contribution(PlayerId(1)));
    assert_eq!(20, c.contribution(PlayerId(2)));
    assert_eq!(Some(PlayerId(3)), c.current_player());
}

#[test_log::test]
fn test_round_waits_for_big_blind() {
    let mut c = four_handed();
    for player in [3, 0, 1] {
        c.player_action(PlayerId(player), Action::Call).unwrap();
        assert!(!c.round_complete());
        assert_eq!(Some(Phase::Preflop), c.phase());
    }
    assert_eq!(Some(PlayerId(2)), c.current_player());

    // The big blind can still raise.
    c.player_action(PlayerId(2), Action::Raise(40)).unwrap();
    assert_eq!(Some(Phase::Preflop), c.phase());
    assert_eq!(Some(PlayerId(3)), c.current_player());
    for player in [3, 0, 1] {
        c.player_action(PlayerId(player), Action::Call).unwrap();
    }
    assert_eq!(Some(Phase::Flop), c.phase());
    assert_eq!(240, c.pot_total());
}

#[test_log::test]
fn test_folded_player_stays_out() {
    let mut c = four_handed();
    c.player_action(PlayerId(3), Action::Call).unwrap();
    c.player_action(PlayerId(0), Action::Fold).unwrap();
    c.player_action(PlayerId(1), Action::Call).unwrap();
    c.player_action(PlayerId(2), Action::Check).unwrap();

    let mut order = vec![];
    while c.is_round_active() {
        let player = c.current_player().unwrap();
        assert_ne!(PlayerId(0), player);
        assert!(!c.active_players().contains(&PlayerId(0)));
        order.push(player);
        c.player_action(player, Action::Check).unwrap();
    }
    // Flop, turn and river, three players each.
    assert_eq!(9, order.len());
    assert_eq!(&order[..3], &[PlayerId(1), PlayerId(2), PlayerId(3)]);
    assert_eq!(
        Err(TableError::RoundClosed),
        c.player_action(PlayerId(1), Action::Check)
    );

    let summary = c.conclude_hand().unwrap();
    assert_eq!(vec![PlayerId(0)], summary.folded);
    assert!(!summary.is_winner(PlayerId(0)));
    // The dealer folded before putting anything in.
    assert_eq!(0, summary.contributions[&PlayerId(0)]);
    assert_eq!(Some(1_000), c.bankroll(PlayerId(0)));
    assert_eq!(60, summary.total_pot);
    let paid: u64 = summary.winners.iter().map(|w| summary.payouts[w]).sum();
    assert_eq!(60, paid);
}

#[test_log::test]
fn test_all_but_one_fold_on_the_flop() {
    let mut c = four_handed();
    for player in [3, 0, 1] {
        c.player_action(PlayerId(player), Action::Call).unwrap();
    }
    c.player_action(PlayerId(2), Action::Check).unwrap();
    assert_eq!(3, c.community_cards().len());
    let deck_before = c.deck_len();

    c.player_action(PlayerId(1), Action::Raise(100)).unwrap();
    c.player_action(PlayerId(2), Action::Fold).unwrap();
    c.player_action(PlayerId(3), Action::Fold).unwrap();
    c.player_action(PlayerId(0), Action::Fold).unwrap();

    // Nothing more is dealt once the hand is decided.
    assert!(!c.is_round_active());
    assert_eq!(3, c.community_cards().len());
    assert_eq!(deck_before, c.deck_len());

    let summary = c.conclude_hand().unwrap();
    assert_eq!(vec![PlayerId(1)], summary.winners);
    assert_eq!(None, summary.winning_rank);
    assert_eq!(180, summary.total_pot);
    assert_eq!(Some(1_060), c.bankroll(PlayerId(1)));
}

#[test_log::test]
fn test_chips_are_conserved_over_many_hands() {
    let mut table = Table::with_seed(TableConfig::default(), 7).unwrap();
    table.seat_players(5).unwrap();
    let mut c = TurnController::new(table);

    for hand in 0..10 {
        c.start_hand().unwrap();
        let mut actions = 0;
        while let Some(player) = c.current_player() {
            // Raise once a street from the first seat, everyone else calls.
            let action = if c.current_bet() == 0 && (hand + actions) % 3 == 0 {
                Action::Raise(20)
            } else if c.to_call(player) > 0 {
                Action::Call
            } else {
                Action::Check
            };
            c.player_action(player, action).unwrap();
            actions += 1;
        }
        let summary = c.conclude_hand().unwrap();
        let paid: u64 = summary.payouts.values().sum();
        assert_eq!(summary.total_pot, paid);
        let contributed: u64 = summary.contributions.values().sum();
        assert_eq!(summary.total_pot, contributed);

        let total: u64 = c.players().iter().map(|p| p.bankroll()).sum();
        assert_eq!(5_000, total);
    }
}

#[test_log::test]
fn test_every_card_is_accounted_for() {
    let mut c = four_handed();
    while let Some(player) = c.current_player() {
        let action = if c.to_call(player) > 0 {
            Action::Call
        } else {
            Action::Check
        };
        c.player_action(player, action).unwrap();
    }
    assert_eq!(5, c.community_cards().len());

    let mut seen = std::collections::HashSet::new();
    for player in c.players() {
        assert_eq!(2, c.hole_cards(player.id()).len());
        for card in c.hole_cards(player.id()) {
            assert!(seen.insert(*card), "{card} dealt twice");
        }
    }
    for card in c.community_cards() {
        assert!(seen.insert(*card), "{card} dealt twice");
    }
    assert_eq!(52, seen.len() + c.deck_len() + c.table().burned());
}
