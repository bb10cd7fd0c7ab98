use std::io::Write;

use serial_test::serial;
use sushigo_cli::run;

const KEYS: [&str; 4] = [
    "SUSHIGO_CONFIG",
    "SUSHIGO_SEED",
    "SUSHIGO_PLAYERS",
    "SUSHIGO_PRETTY",
];

/// Sets the given variables and clears the other SUSHIGO_* ones; restores
/// everything on drop.
struct TempEnv {
    previous: Vec<(&'static str, Option<String>)>,
}

impl TempEnv {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        let previous = KEYS.iter().map(|&k| (k, std::env::var(k).ok())).collect();
        for k in KEYS {
            std::env::remove_var(k);
        }
        for (k, v) in vars {
            std::env::set_var(k, v);
        }
        Self { previous }
    }
}

impl Drop for TempEnv {
    fn drop(&mut self) {
        for (k, prev) in &self.previous {
            match prev {
                Some(v) => std::env::set_var(k, v),
                None => std::env::remove_var(k),
            }
        }
    }
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn cfg_reports_defaults() {
    let _env = TempEnv::set(&[]);
    let (code, stdout, stderr) = run_cli(&["sushigo", "cfg"]);
    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["players"]["value"], 4);
    assert_eq!(v["players"]["source"], "default");
    assert!(v["seed"]["value"].is_null());
    assert_eq!(v["pretty"]["value"], false);
}

#[test]
#[serial]
fn env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 7\nplayers = 3").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let _env = TempEnv::set(&[("SUSHIGO_CONFIG", &path), ("SUSHIGO_PLAYERS", "5")]);

    let (code, stdout, _) = run_cli(&["sushigo", "cfg"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["seed"]["value"], 7);
    assert_eq!(v["seed"]["source"], "file");
    assert_eq!(v["players"]["value"], 5);
    assert_eq!(v["players"]["source"], "env");
}

#[test]
#[serial]
fn deal_uses_configured_table_and_seed() {
    let _env = TempEnv::set(&[("SUSHIGO_SEED", "99"), ("SUSHIGO_PLAYERS", "2")]);
    let (code, stdout, _) = run_cli(&["sushigo", "deal"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Seed: 99");
    assert_eq!(lines.len(), 3);

    // Flags win over the environment
    let (_, flagged, _) = run_cli(&["sushigo", "deal", "--players", "4", "--seed", "1"]);
    assert!(flagged.starts_with("Seed: 1\n"));
    assert_eq!(flagged.lines().count(), 5);
}

#[test]
#[serial]
fn pretty_from_env() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, r#"[["pudding"], []]"#).unwrap();
    let path = input.path().to_str().unwrap().to_string();
    let _env = TempEnv::set(&[("SUSHIGO_PRETTY", "yes")]);

    let (code, stdout, _) = run_cli(&["sushigo", "puddings", "--input", &path]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\n  6,"), "{stdout}");
}

#[test]
#[serial]
fn invalid_config_fails_commands_that_need_it() {
    let _env = TempEnv::set(&[("SUSHIGO_PLAYERS", "9")]);
    let (code, stdout, stderr) = run_cli(&["sushigo", "deal"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("players must be 2 to 5"), "{stderr}");

    // hand-size does not read the configuration
    let (code, _, _) = run_cli(&["sushigo", "hand-size", "--players", "2"]);
    assert_eq!(code, 0);

    let (code, _, stderr) = run_cli(&["sushigo", "cfg"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Configuration error"));
}

#[test]
#[serial]
fn invalid_seed_is_reported() {
    let _env = TempEnv::set(&[("SUSHIGO_SEED", "abc")]);
    let (code, _, stderr) = run_cli(&["sushigo", "deck"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid seed: abc"), "{stderr}");
}
