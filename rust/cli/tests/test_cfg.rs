mod common;

use std::env;
use std::fs;

use common::run_cli;
use serial_test::serial;

const VARS: &[&str] = &[
    "SIXMAX_CONFIG",
    "SIXMAX_SEED",
    "SIXMAX_HANDS",
    "SIXMAX_STACK",
    "SIXMAX_POLICY",
];

/// Sets the given variables for the duration of one test.
struct EnvGuard;

impl EnvGuard {
    fn set(pairs: &[(&str, &str)]) -> Self {
        for v in VARS {
            unsafe { env::remove_var(v) };
        }
        for (k, v) in pairs {
            unsafe { env::set_var(k, v) };
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for v in VARS {
            unsafe { env::remove_var(v) };
        }
    }
}

fn cfg_json(args: &[&str]) -> serde_json::Value {
    let mut argv = vec!["cfg"];
    argv.extend_from_slice(args);
    let res = run_cli(&argv);
    assert_eq!(res.code, 0, "{}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints json")
}

#[test]
#[serial]
fn defaults() {
    let _env = EnvGuard::set(&[]);
    let json = cfg_json(&[]);
    assert_eq!(json["seed"]["value"], serde_json::Value::Null);
    assert_eq!(json["hands"]["value"], 10);
    assert_eq!(json["starting_stack"]["value"], "100.00");
    assert_eq!(json["big_blind"]["value"], "1.00");
    assert_eq!(json["policy"]["value"], "random");
    assert_eq!(json["button"]["value"], 0);
    for key in ["seed", "hands", "starting_stack", "small_blind", "big_blind", "policy", "button"] {
        assert_eq!(json[key]["source"], "default", "{key}");
    }
}

#[test]
#[serial]
fn file_then_env_then_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sixmax.toml");
    fs::write(
        &path,
        "seed = 1\nhands = 50\nstarting_stack = 200\nsmall_blind = \"1.00\"\nbig_blind = 2\npolicy = \"passive\"\n",
    )
    .unwrap();
    let _env = EnvGuard::set(&[
        ("SIXMAX_CONFIG", path.to_str().unwrap()),
        ("SIXMAX_SEED", "2"),
        ("SIXMAX_HANDS", "60"),
    ]);

    let json = cfg_json(&["--seed", "3"]);
    assert_eq!(json["seed"]["value"], 3);
    assert_eq!(json["seed"]["source"], "flag");
    assert_eq!(json["hands"]["value"], 60);
    assert_eq!(json["hands"]["source"], "env");
    assert_eq!(json["starting_stack"]["value"], "200.00");
    assert_eq!(json["starting_stack"]["source"], "file");
    assert_eq!(json["small_blind"]["value"], "1.00");
    assert_eq!(json["big_blind"]["value"], "2.00");
    assert_eq!(json["policy"]["value"], "passive");
    assert_eq!(json["policy"]["source"], "file");
    assert_eq!(json["button"]["source"], "default");
}

#[test]
#[serial]
fn config_flag_beats_env_path() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join("env.toml");
    let flag_file = dir.path().join("flag.toml");
    fs::write(&env_file, "hands = 5\n").unwrap();
    fs::write(&flag_file, "hands = 7\n").unwrap();
    let _env = EnvGuard::set(&[("SIXMAX_CONFIG", env_file.to_str().unwrap())]);

    let json = cfg_json(&["--config", flag_file.to_str().unwrap()]);
    assert_eq!(json["hands"]["value"], 7);
    assert_eq!(json["hands"]["source"], "file");
}

#[test]
#[serial]
fn env_stack_and_policy() {
    let _env = EnvGuard::set(&[("SIXMAX_STACK", "25.5"), ("SIXMAX_POLICY", "Baseline")]);
    let json = cfg_json(&[]);
    assert_eq!(json["starting_stack"]["value"], "25.50");
    assert_eq!(json["starting_stack"]["source"], "env");
    assert_eq!(json["policy"]["source"], "env");
}

#[test]
#[serial]
fn invalid_values_exit_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let unknown_key = dir.path().join("unknown.toml");
    fs::write(&unknown_key, "players = 9\n").unwrap();
    let blinds = dir.path().join("blinds.toml");
    fs::write(&blinds, "small_blind = 2\nbig_blind = 1\n").unwrap();
    let missing = dir.path().join("missing.toml");

    let _env = EnvGuard::set(&[]);
    for path in [&unknown_key, &blinds, &missing] {
        let res = run_cli(&["cfg", "--config", path.to_str().unwrap()]);
        assert_eq!(res.code, 2, "{}", path.display());
        assert!(res.stdout.is_empty());
        assert!(res.stderr.starts_with("Error: Invalid configuration"), "{}", res.stderr);
    }

    let _env = EnvGuard::set(&[("SIXMAX_SEED", "abc")]);
    assert_eq!(run_cli(&["cfg"]).code, 2);
    let _env = EnvGuard::set(&[("SIXMAX_POLICY", "nit")]);
    assert_eq!(run_cli(&["cfg"]).code, 2);
}

#[test]
#[serial]
fn env_seed_drives_the_simulation() {
    let _env = EnvGuard::set(&[("SIXMAX_SEED", "31"), ("SIXMAX_HANDS", "3")]);
    let from_env = run_cli(&["sim"]);
    drop(_env);
    let from_flags = run_cli(&["sim", "--seed", "31", "--hands", "3"]);
    assert_eq!(from_env.code, 0);
    assert_eq!(from_env.stdout, from_flags.stdout);
}
