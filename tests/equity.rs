use holdem_engine::core::Card;
use holdem_engine::holdem::EquityEvaluator;

#[test_log::test]
fn test_pocket_aces_heads_up() {
    let hero = Card::parse_many("AsAc").unwrap();
    let mut evaluator = EquityEvaluator::with_seed(85);
    let equity = evaluator.evaluate(2, &hero, &[], 5_000).unwrap();
    assert!((equity - 0.85).abs() < 0.03, "got {equity}");
}

#[test_log::test]
fn test_lone_player_is_certain() {
    let hero = Card::parse_many("7c2d").unwrap();
    let board = Card::parse_many("AsKsQs").unwrap();
    let mut evaluator = EquityEvaluator::with_seed(1);
    assert_eq!(1.0, evaluator.evaluate(1, &hero, &board, 1).unwrap());
}

#[test_log::test]
fn test_dominated_hand() {
    let mut evaluator = EquityEvaluator::with_seed(2);
    let strong = evaluator
        .evaluate(2, &Card::parse_many("AhKh").unwrap(), &[], 2_000)
        .unwrap();
    let weak = evaluator
        .evaluate(2, &Card::parse_many("7c2d").unwrap(), &[], 2_000)
        .unwrap();
    assert!(strong > 0.6, "got {strong}");
    assert!(weak < 0.4, "got {weak}");
}
