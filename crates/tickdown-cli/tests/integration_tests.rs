use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that gives each test its own data directory
struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".tickdown");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Run tickdown with this fixture's data directory
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tickdown").expect("Failed to find tickdown binary");
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.env_remove("TICKDOWN_PATH");
        cmd
    }

    fn write_config(&self, contents: &str) {
        fs::write(self.data_dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// Mint a share token for a fixed interval
    fn share(&self, start: &str, end: &str) -> String {
        let output = self
            .command()
            .arg("share")
            .arg("--start")
            .arg(start)
            .arg("--end")
            .arg(end)
            .output()
            .expect("Failed to run share");

        assert!(
            output.status.success(),
            "share failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .expect("share printed nothing")
            .trim()
            .to_string()
    }
}

#[test]
fn test_share_then_inspect_round_trip() {
    let fixture = TestFixture::new();

    // Step 1: Mint a token for a known window
    let token = fixture.share("2020-01-01T00:00:00Z", "2020-01-02T00:00:00Z");
    assert!(
        token.starts_with("tickdown:"),
        "Expected a tickdown: token, got: {}",
        token
    );

    // Step 2: Inspect it as JSON and verify the window survived
    let output = fixture
        .command()
        .arg("inspect")
        .arg(&token)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run inspect");

    assert!(
        output.status.success(),
        "inspect failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("Failed to parse JSON output");

    assert_eq!(report["token"], token.as_str());
    assert_eq!(report["startTime"], "2020-01-01T00:00:00.000Z");
    assert_eq!(report["endTime"], "2020-01-02T00:00:00.000Z");
    assert_eq!(report["valid"], true);

    // The window is long past, so it reads as fully elapsed
    assert_eq!(report["status"], "finished");
    assert_eq!(report["percentageComplete"].as_f64(), Some(100.0));
    assert_eq!(report["remaining"]["seconds"].as_i64(), Some(0));
}

#[test]
fn test_share_duration_sets_the_end() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("share")
        .arg("--start")
        .arg("2020-01-01T00:00:00Z")
        .arg("--duration")
        .arg("90")
        .output()
        .expect("Failed to run share");

    assert!(output.status.success());
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();

    let output = fixture
        .command()
        .arg("inspect")
        .arg(&token)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run inspect");

    let report: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Failed to parse JSON output");
    assert_eq!(report["endTime"], "2020-01-01T00:01:30.000Z");
}

#[test]
fn test_share_reads_the_default_duration_from_config() {
    let fixture = TestFixture::new();
    fixture.write_config("[defaults]\nduration_secs = 120\n");

    let output = fixture
        .command()
        .arg("share")
        .arg("--start")
        .arg("2020-01-01T00:00:00Z")
        .output()
        .expect("Failed to run share");

    assert!(output.status.success());
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();

    let output = fixture
        .command()
        .arg("inspect")
        .arg(&token)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run inspect");

    let report: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Failed to parse JSON output");
    assert_eq!(report["endTime"], "2020-01-01T00:02:00.000Z");
}

#[test]
fn test_share_rejects_unparseable_timestamps() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("share")
        .arg("--start")
        .arg("tomorrow")
        .output()
        .expect("Failed to run share");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("is not an RFC 3339 timestamp"),
        "Expected a format hint, got: {}",
        stderr
    );
}

#[test]
fn test_share_warns_on_inverted_interval_but_still_mints() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("share")
        .arg("--start")
        .arg("2020-01-02T00:00:00Z")
        .arg("--end")
        .arg("2020-01-01T00:00:00Z")
        .output()
        .expect("Failed to run share");

    // Inverted windows are shareable; only the rendering flags them
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("start is after end"), "stderr: {}", stderr);

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let output = fixture
        .command()
        .arg("inspect")
        .arg(&token)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run inspect");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Failed to parse JSON output");
    assert_eq!(report["valid"], false);
    assert_eq!(report["status"], "invalid");
    assert_eq!(report["percentageComplete"].as_f64(), Some(0.0));
}

#[test]
fn test_inspect_plain_reports_a_running_countdown() {
    let fixture = TestFixture::new();
    let token = fixture.share("2020-01-01T00:00:00Z", "2099-01-01T00:00:00Z");

    let output = fixture
        .command()
        .arg("inspect")
        .arg(&token)
        .output()
        .expect("Failed to run inspect");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Share link"), "stdout: {}", stdout);
    assert!(stdout.contains("counting"), "stdout: {}", stdout);
}

#[test]
fn test_inspect_rejects_garbage() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("inspect")
        .arg("definitely-not-a-link")
        .output()
        .expect("Failed to run inspect");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not a valid share link"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_open_prints_a_snapshot_when_piped() {
    let fixture = TestFixture::new();
    let token = fixture.share("2020-01-01T00:00:00Z", "2020-01-02T00:00:00Z");

    let output = fixture
        .command()
        .arg("open")
        .arg(&token)
        .output()
        .expect("Failed to run open");

    assert!(
        output.status.success(),
        "open failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Start     2020-01-01T00:00:00.000Z"));
    assert!(stdout.contains("100.00%"));
    // Mounting republished the same canonical token
    assert!(stdout.contains(&token));
}

#[test]
fn test_bare_link_argument_opens_the_widget() {
    let fixture = TestFixture::new();
    let token = fixture.share("2020-01-01T00:00:00Z", "2020-01-02T00:00:00Z");

    let output = fixture
        .command()
        .arg(&token)
        .output()
        .expect("Failed to run tickdown");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("End       2020-01-02T00:00:00.000Z"));
}

#[test]
fn test_open_falls_back_to_the_default_window_on_garbage() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("open")
        .arg("corrupted-beyond-repair")
        .output()
        .expect("Failed to run open");

    assert!(
        output.status.success(),
        "open failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Remaining 0d 0h 1m 0s"), "stdout: {}", stdout);
    assert!(stdout.contains("tickdown:"), "stdout: {}", stdout);
}

#[test]
fn test_open_uses_the_configured_default_duration() {
    let fixture = TestFixture::new();
    fixture.write_config("[defaults]\nduration_secs = 120\n");

    let output = fixture
        .command()
        .output()
        .expect("Failed to run tickdown");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Remaining 0d 0h 2m 0s"), "stdout: {}", stdout);
    assert!(stdout.contains("0.00%"), "stdout: {}", stdout);
}

#[test]
fn test_display_config_shapes_the_snapshot() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\nunicode = false\nfinished_text = \"DONE\"\n");

    let token = fixture.share("2020-01-01T00:00:00Z", "2020-01-02T00:00:00Z");
    let output = fixture
        .command()
        .arg("open")
        .arg(&token)
        .output()
        .expect("Failed to run open");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Remaining DONE"), "stdout: {}", stdout);
    assert!(
        stdout.contains(&format!("[{}]", "#".repeat(40))),
        "stdout: {}",
        stdout
    );
}
