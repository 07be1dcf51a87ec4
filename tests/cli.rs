//! End-to-end tests for the `studytime` binary.
//!
//! Each test runs the binary inside its own temporary directory, which is
//! both the working directory (where the study log lives) and `$HOME`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LOG: &str = "registro_estudo.txt";

fn studytime(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studytime").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn history_without_log() {
    let dir = TempDir::new().unwrap();

    studytime(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma sessão de estudo registrada."));

    assert!(!dir.path().join(LOG).exists());
}

#[test]
fn record_then_history() {
    let dir = TempDir::new().unwrap();

    studytime(&dir)
        .args(["record", "30m", "--at", "12/03/2024 09:15:02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 horas, 30 minutos e 0 segundos"));

    studytime(&dir)
        .args(["record", "1h30m", "--at", "12/03/2024 14:00:00"])
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join(LOG)).unwrap();
    assert_eq!(
        log,
        "12/03/2024 09:15:02 | 1800.0\n12/03/2024 14:00:00 | 5400.0\n"
    );

    studytime(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            " Sessão 1: 12/03/2024 09:15:02 - 0 horas, 30 minutos e 0 segundos",
        ))
        .stdout(predicate::str::contains(
            " Sessão 2: 12/03/2024 14:00:00 - 1 horas, 30 minutos e 0 segundos",
        ))
        .stdout(predicate::str::contains(
            "Tempo total de estudo: 2 horas, 0 minutos e 0 segundos",
        ));
}

#[test]
fn history_reads_log_written_elsewhere() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOG),
        concat!(
            "12/03/2024 09:15:02 | 2712.5033178329468\n",
            "oops | not-a-number\n",
            "13/03/2024 10:00:00 | 0.75\n",
        ),
    )
    .unwrap();

    let output = studytime(&dir)
        .args(["--output", "json", "history"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["sessions"][0]["started_at"], "12/03/2024 09:15:02");
    assert_eq!(value["sessions"][1]["duration_seconds"], 0.75);
    assert_eq!(value["total"], "0 horas, 45 minutos e 13 segundos");
}

#[test]
fn clear_twice() {
    let dir = TempDir::new().unwrap();

    studytime(&dir).args(["record", "10m"]).assert().success();
    assert!(dir.path().join(LOG).exists());

    studytime(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Histórico de tempo de estudo apagado com sucesso!",
        ));
    assert!(!dir.path().join(LOG).exists());

    studytime(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Não há histórico para apagar."));
}

#[test]
fn record_rejects_bad_input() {
    let dir = TempDir::new().unwrap();

    studytime(&dir)
        .args(["record", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));

    studytime(&dir)
        .args(["record", "10m", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DD/MM/YYYY HH:MM:SS"));

    assert!(!dir.path().join(LOG).exists());
}

#[test]
fn unwritable_log_is_reported() {
    let dir = TempDir::new().unwrap();
    // A directory in the log's place cannot be appended to.
    std::fs::create_dir(dir.path().join(LOG)).unwrap();

    studytime(&dir)
        .args(["record", "10m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn menu_session_flow() {
    let dir = TempDir::new().unwrap();

    studytime(&dir)
        .write_stdin("1\n\n\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessão iniciada em"))
        .stdout(predicate::str::contains(" Sessão 1: "))
        .stdout(predicate::str::contains("Saindo do monitor. Bom aprendizado!"));

    let log = std::fs::read_to_string(dir.path().join(LOG)).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains(" | "));
}

#[test]
fn start_records_one_session() {
    let dir = TempDir::new().unwrap();

    studytime(&dir)
        .arg("start")
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sessão finalizada. Você estudou por 0 horas, 0 minutos e",
        ));

    let log = std::fs::read_to_string(dir.path().join(LOG)).unwrap();
    assert_eq!(log.lines().count(), 1);
}

#[test]
fn config_file_sets_default_output() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".studytime");
    std::fs::create_dir(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    studytime(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nothing_to_clear\""));

    studytime(&dir)
        .args(["--output", "pretty", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Não há histórico para apagar."));
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".studytime");
    std::fs::create_dir(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.yaml"), "general: [").unwrap();

    studytime(&dir)
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();

    studytime(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join(".studytime").join("config.yaml").is_file());

    studytime(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    studytime(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_output: pretty"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();

    studytime(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studytime"));
}
