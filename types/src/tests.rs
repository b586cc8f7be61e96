use super::*;
use commonware_codec::{DecodeExt, Encode, Error, ReadExt};

#[test]
fn test_outcome_roundtrip() {
    for outcome in Outcome::ALL {
        let encoded = outcome.encode();
        assert_eq!(encoded.len(), 1);
        let decoded = Outcome::read(&mut &encoded[..]).unwrap();
        assert_eq!(outcome, decoded);
    }
}

#[test]
fn test_outcome_invalid_byte() {
    let result = Outcome::read(&mut &[3u8][..]);
    assert!(matches!(result, Err(Error::InvalidEnum(3))));
}

#[test]
fn test_outcome_parse() {
    assert_eq!("P".parse::<Outcome>().unwrap(), Outcome::Player);
    assert_eq!("b".parse::<Outcome>().unwrap(), Outcome::Banker);
    assert_eq!(" tie ".parse::<Outcome>().unwrap(), Outcome::Tie);
    assert_eq!("Banker".parse::<Outcome>().unwrap(), Outcome::Banker);
    assert_eq!(Outcome::try_from('t').unwrap(), Outcome::Tie);

    let err = "X".parse::<Outcome>().unwrap_err();
    assert_eq!(err, ParseOutcomeError("X".to_string()));
    assert!("".parse::<Outcome>().is_err());
}

#[test]
fn test_hand_log_roundtrip() {
    let log = HandLog::new(vec![
        Outcome::Banker,
        Outcome::Tie,
        Outcome::Player,
        Outcome::Player,
    ]);
    let encoded = log.encode();
    // One length byte plus one byte per hand.
    assert_eq!(encoded.len(), 5);
    let decoded = HandLog::decode(encoded.as_ref()).unwrap();
    assert_eq!(log, decoded);
}

#[test]
fn test_hand_log_rejects_trailing_garbage() {
    let mut bytes = HandLog::new(vec![Outcome::Player]).encode().to_vec();
    bytes.push(9);
    assert!(HandLog::decode(bytes.as_ref()).is_err());
}

#[test]
fn test_hand_log_json() {
    let log = HandLog::new(vec![Outcome::Player, Outcome::Tie]);
    let json = serde_json::to_string(&log).unwrap();
    assert_eq!(
        json,
        r#"[{"hand":1,"outcome":"P"},{"hand":2,"outcome":"T"}]"#
    );
    let decoded: HandLog = serde_json::from_str(&json).unwrap();
    assert_eq!(log, decoded);
}

#[test]
fn test_rate_rounding() {
    assert_eq!(Rate::of(1, 3).to_string(), "33.33");
    assert_eq!(Rate::of(2, 3).to_string(), "66.67");
    assert_eq!(Rate::of(0, 0), Rate::default());
    assert_eq!(Rate::of(5, 5).to_string(), "100.00");
    // 1/8 = 12.5% exactly, 1/16 = 6.25%, 1/32 = 3.125% rounds half-up.
    assert_eq!(Rate::of(1, 8).basis_points(), 1250);
    assert_eq!(Rate::of(1, 32).basis_points(), 313);
    assert_eq!(Rate::of(1, 3).percent(), 33.33);
}

#[test]
fn test_tallies() {
    let mut tallies = Tallies::default();
    tallies.add(Outcome::Player);
    tallies.add(Outcome::Tie);
    tallies.add(Outcome::Player);
    assert_eq!(tallies.get(Outcome::Player), 2);
    assert_eq!(tallies.total(), 3);

    tallies.remove(Outcome::Player);
    tallies.remove(Outcome::Player);
    tallies.remove(Outcome::Tie);
    assert_eq!(tallies, Tallies::default());
}

#[test]
#[should_panic]
fn test_tallies_remove_underflow() {
    let mut tallies = Tallies::default();
    tallies.remove(Outcome::Banker);
}

#[test]
fn test_snapshot_json_shape() {
    let snapshot = Snapshot {
        hands: 3,
        tallies: Tallies {
            player: 1,
            banker: 1,
            tie: 1,
        },
        strategies: vec![StrategySnapshot {
            name: "The Cake".to_string(),
            wins: 1,
            losses: 2,
            max_win_streak: 1,
            max_loss_streak: 2,
            current_win_streak: 0,
            current_loss_streak: 2,
            win_rate: Rate::of(1, 3),
            loss_rate: Rate::of(2, 3),
            prediction: Prediction::Guess(Outcome::Banker),
        }],
    };

    let value = serde_json::to_value(&snapshot).unwrap();
    let strategy = &value["strategies"][0];
    assert_eq!(strategy["maxLossStreak"], 2);
    assert_eq!(strategy["winRate"], 33.33);
    assert_eq!(strategy["lossRate"], 66.67);
    assert_eq!(strategy["prediction"], "B");
    assert_eq!(value["tallies"]["tie"], 1);

    let decoded: Snapshot = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_prediction_serde() {
    let waiting = serde_json::to_string(&Prediction::Waiting).unwrap();
    assert_eq!(waiting, r#""Waiting""#);
    let parsed: Prediction = serde_json::from_str(r#""P""#).unwrap();
    assert_eq!(parsed, Prediction::Guess(Outcome::Player));
    assert!(serde_json::from_str::<Prediction>(r#""T""#).is_err());
}

#[test]
fn test_cold_strategy_flag() {
    let mut strategy = StrategySnapshot {
        name: "Mr. Toad".to_string(),
        wins: 0,
        losses: 3,
        max_win_streak: 0,
        max_loss_streak: 3,
        current_win_streak: 0,
        current_loss_streak: 3,
        win_rate: Rate::of(0, 3),
        loss_rate: Rate::of(3, 3),
        prediction: Prediction::Guess(Outcome::Player),
    };
    assert!(!strategy.is_cold());
    strategy.current_loss_streak = ALERT_LOSS_STREAK;
    assert!(strategy.is_cold());
}
