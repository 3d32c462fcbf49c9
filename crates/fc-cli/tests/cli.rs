//! CLI command integration tests.
//! Each test uses a temp directory via FC_DATA_DIR for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fc_cmd(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("fc").unwrap();
    cmd.env("FC_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn dreams_list_shows_sample_journal() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flying Over Mountains"))
        .stdout(predicate::str::contains("Lost in a Maze"))
        .stdout(predicate::str::contains("May 4, 2025"));
}

#[test]
fn dreams_search_filters() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "list", "--search", "MAZE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lost in a Maze"))
        .stdout(predicate::str::contains("Flying").not());

    fc_cmd(&dir)
        .args(["dreams", "list", "--search", "submarine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Try a different search term"));
}

#[test]
fn dreams_show_analysis() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Symbol Interpretation"))
        .stdout(predicate::str::contains("Maze dreams typically symbolize"))
        .stdout(predicate::str::contains("anxiety, confusion, frustration"));
}

#[test]
fn dreams_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dream with id '99'"));
}

#[test]
fn dreams_stats_report() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Common Symbols"))
        .stdout(predicate::str::contains("Emotional Themes"))
        .stdout(predicate::str::contains("Anxiety appears consistently"));
}

#[test]
fn dreams_add_rejects_one_char_title() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "add", "--title", "A", "--content", "A long enough description."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dream title must be at least 2 characters."));
}

#[test]
fn dreams_add_reports_every_field() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "add", "--title", "A", "--content", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dream title must be at least 2 characters."))
        .stderr(predicate::str::contains(
            "Dream description must be at least 10 characters.",
        ));
}

#[test]
fn dreams_add_accepts_two_char_title() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["dreams", "add", "--title", "Ok", "--content", "A long enough description."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dream recorded: dream-"))
        .stdout(predicate::str::contains("[analyzing, processing]"))
        .stdout(predicate::str::contains("Lost in a Maze"));
}

#[test]
fn dreams_record_fills_form() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["--instant", "dreams", "record", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dream Title: Dream About Water"))
        .stdout(predicate::str::contains("coral reefs"))
        .stdout(predicate::str::contains("Dream recorded"));
}

#[test]
fn settings_save_requires_openai_key() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["settings", "save", "--voice-cloning"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API Key is required"));

    fc_cmd(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voice cloning:   off"));
}

#[test]
fn settings_save_then_show() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args([
            "settings",
            "save",
            "--openai-api-key",
            "sk-test",
            "--voice-cloning",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings updated"));

    fc_cmd(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voice cloning:   on"))
        .stdout(predicate::str::contains("dream images:    off"))
        .stdout(predicate::str::contains("sk-test").not());
}

#[test]
fn theme_toggle_persists() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout("light\n");

    fc_cmd(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout("dark\n");

    fc_cmd(&dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn theme_follows_configured_system_preference() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[appearance]\nprefers_dark = true\n",
    )
    .unwrap();

    fc_cmd(&dir).arg("theme").assert().success().stdout("dark\n");

    // a saved theme wins over the system preference
    fc_cmd(&dir).args(["theme", "light"]).assert().success();
    fc_cmd(&dir).arg("theme").assert().success().stdout("light\n");
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[latency\n").unwrap();
    fc_cmd(&dir)
        .arg("theme")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn open_known_route() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["open", "/dream-chain/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DreamChain]"))
        .stdout(predicate::str::contains("Analysis (locked)"))
        .stdout(predicate::str::contains("Lost in a Maze"));
}

#[test]
fn open_unknown_route_is_404() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["open", "/nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page Not Found"))
        .stdout(predicate::str::contains("/persona-forge"));
}

#[test]
fn persona_session_chat() {
    let dir = TempDir::new().unwrap();
    let output = fc_cmd(&dir)
        .args(["--instant", "persona"])
        .write_stdin("/upload email\n/create\nHow would I reply to my boss?\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("uploaded "));
    assert!(stdout.contains("Digital Twin Created"));
    assert!(stdout.contains("twin is typing..."));
    // greeting plus the delivered reply
    assert_eq!(stdout.matches("twin> ").count(), 2, "stdout: {stdout}");
}

#[test]
fn persona_chat_locked_before_create() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["--instant", "persona"])
        .write_stdin("/tab chat\nhello\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat is locked"))
        .stdout(predicate::str::contains("twin> ").not());
}

#[test]
fn dreams_session_add_then_select() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .arg("dreams")
        .write_stdin("/title Ocean\n/content Swimming with whales all night.\n/submit\n/select #1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dream recorded: dream-"))
        .stdout(predicate::str::contains("[Analysis]"))
        .stdout(predicate::str::contains("Symbol Interpretation"))
        .stdout(predicate::str::contains("The symbols in this dream suggest"))
        .stdout(predicate::str::contains("Dream analysis is being processed..."));
}

#[test]
fn dreams_session_add_then_stats() {
    let dir = TempDir::new().unwrap();
    let output = fc_cmd(&dir)
        .arg("dreams")
        .write_stdin("/title Ocean\n/content Swimming with whales all night.\n/submit\n/stats\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stats = stdout
        .split("[Patterns]")
        .nth(1)
        .unwrap_or_else(|| panic!("no stats view in: {stdout}"));
    assert!(stats.contains("Common Symbols"));
    // the new entry's pending tags are charted alongside the sample ones
    assert!(
        stats.lines().any(|l| l.trim_start().starts_with("analyzing")),
        "stdout: {stdout}"
    );
    assert!(stats.contains("flying"));
}

#[test]
fn dreams_session_analysis_locked() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .arg("dreams")
        .write_stdin("/tab analysis\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Analysis is locked: select a dream first",
        ))
        .stdout(predicate::str::contains("Symbol Interpretation").not());
}

#[test]
fn dreams_session_record_waits_for_transcript() {
    let dir = TempDir::new().unwrap();
    fc_cmd(&dir)
        .args(["--instant", "dreams"])
        .write_stdin("/record\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recording... speak now"))
        .stdout(predicate::str::contains("Transcription complete"))
        .stdout(predicate::str::contains("Dream Title: Dream About Water"));
}
