mod common;

use common::run_cli;

#[test]
fn hole_cards_with_board() {
    let res = run_cli(&["eval", "As", "Kd", "--board", "Qh Jc Ts"]);
    assert_eq!(res.code, 0, "{}", res.stderr);
    assert_eq!(res.stdout, "[As Kd] [Qh Jc Ts]: Straight, Ace high\n");
}

#[test]
fn seven_cards_pick_the_best_five() {
    let res = run_cli(&["eval", "2c", "7d", "Ah", "Kh", "Qh", "Jh", "Th"]);
    assert_eq!(res.code, 0);
    assert!(res.stdout.ends_with(": Royal flush\n"));
}

#[test]
fn wheel_is_five_high() {
    let res = run_cli(&["eval", "Ac", "2d", "--board", "3h 4s 5c Kd Kh"]);
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Straight, Five high"), "{}", res.stdout);
}

#[test]
fn bad_cards_fail_with_a_message() {
    for args in [
        vec!["eval", "As", "Zz", "--board", "Qh Jc Ts"],
        vec!["eval", "As", "Kd", "--board", "Qh Jc"],
        vec!["eval", "As", "Kd", "Qh", "--board", "Jc Ts 9d"],
        vec!["eval", "As", "Kd", "--board", "As Jc Ts"],
    ] {
        let res = run_cli(&args);
        assert_eq!(res.code, 2, "{args:?}");
        assert!(res.stdout.is_empty());
        assert!(res.stderr.starts_with("Error: "), "{}", res.stderr);
    }
}
