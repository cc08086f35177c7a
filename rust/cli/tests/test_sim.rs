mod common;

use common::{field, run_cli};
use sixmax_engine::chips::Chips;
use sixmax_engine::logger::HandRecord;

#[test]
fn summary_keeps_table_total() {
    let res = run_cli(&["sim", "--hands", "20", "--seed", "9"]);
    assert_eq!(res.code, 0, "{}", res.stderr);
    assert!(res.stdout.starts_with("Simulated: "));
    assert_eq!(field(&res.stdout, "Seed"), Some("9"));
    assert_eq!(field(&res.stdout, "Policy"), Some("random"));
    assert_eq!(field(&res.stdout, "Table total"), Some("600.00"));
    for seat in 1..=6 {
        assert!(field(&res.stdout, &format!("Seat {seat}")).is_some());
    }
}

#[test]
fn same_seed_same_summary() {
    let a = run_cli(&["sim", "--hands", "15", "--seed", "1234", "--policy", "baseline"]);
    let b = run_cli(&["sim", "--hands", "15", "--seed", "1234", "--policy", "baseline"]);
    assert_eq!(a.code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn unset_seed_is_reported() {
    let res = run_cli(&["sim", "--hands", "1", "--policy", "passive"]);
    assert_eq!(res.code, 0);
    let seed = field(&res.stdout, "Seed").expect("seed line");
    assert!(seed.parse::<u64>().is_ok());
}

#[test]
fn passive_hand_goes_to_showdown() {
    let res = run_cli(&["sim", "--hands", "1", "--seed", "3", "--policy", "passive"]);
    assert_eq!(res.code, 0);
    assert_eq!(field(&res.stdout, "Simulated"), Some("1 hands"));
    assert_eq!(field(&res.stdout, "Showdowns"), Some("1"));
}

#[test]
fn text_log_appends_under_one_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("hands.txt");
    let p = path.to_str().unwrap();

    let first = run_cli(&["sim", "--hands", "2", "--seed", "5", "--policy", "passive", "-o", p]);
    assert_eq!(first.code, 0, "{}", first.stderr);
    assert!(first.stdout.contains(&format!("Wrote 2 hands to {p}")));
    let second = run_cli(&["sim", "--hands", "1", "--seed", "6", "--policy", "passive", "-o", p]);
    assert_eq!(second.code, 0);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Poker Hand Log\n"));
    assert_eq!(text.matches("Poker Hand Log").count(), 1);
    assert_eq!(text.matches("Hand #").count(), 3);
    assert!(text.contains("posts small blind 0.50"));
}

#[test]
fn jsonl_log_has_one_record_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let res = run_cli(&[
        "sim",
        "--hands",
        "4",
        "--seed",
        "77",
        "--format",
        "jsonl",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(res.code, 0, "{}", res.stderr);

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<HandRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert_eq!(records.len(), 4);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.hand_id, format!("77-{:06}", i + 1));
        assert_eq!(r.seed, Some(77));
        assert!(r.pot > Chips::ZERO);
        assert!(!r.winners.is_empty());
        assert!(!r.history.is_empty());
    }
}

#[test]
fn custom_stack_and_policy_list() {
    let res = run_cli(&[
        "sim",
        "--hands",
        "5",
        "--seed",
        "2",
        "--stack",
        "40",
        "--policy",
        "random,passive,aggressive,baseline,random,passive",
    ]);
    assert_eq!(res.code, 0, "{}", res.stderr);
    assert_eq!(field(&res.stdout, "Table total"), Some("240.00"));
}

#[test]
fn aggressive_table_stops_when_one_player_is_left() {
    let res = run_cli(&["sim", "--hands", "500", "--seed", "11", "--policy", "aggressive"]);
    assert_eq!(res.code, 0, "{}", res.stderr);
    let played: u64 = field(&res.stdout, "Simulated")
        .and_then(|s| s.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .unwrap();
    assert!(played < 500);
    let stacks: Vec<&str> = (1..=6)
        .filter_map(|s| field(&res.stdout, &format!("Seat {s}")))
        .filter(|v| !v.starts_with("0.00"))
        .collect();
    assert_eq!(stacks.len(), 1);
}
