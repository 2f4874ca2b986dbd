use std::process::Command;

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_junction_signals"))
        .args(args)
        .env("RUST_LOG", "warn,junction_signals=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Parse the number following `label` on the first log line that has it
fn logged_value(stderr: &str, label: &str) -> u64 {
    stderr
        .lines()
        .filter(|line| line.contains(label))
        .last()
        .and_then(|line| line.split(label).nth(1))
        .and_then(|rest| rest.trim().parse().ok())
        .unwrap_or_else(|| panic!("Could not find '{}' in output:\n{}", label, stderr))
}

/// Test that the simulation runs headless and reports its statistics
#[test]
fn test_headless_simulation_runs() {
    let output = run_binary(&["--ticks", "100", "--seed", "3", "--all-green"]);

    assert!(
        output.status.success(),
        "Simulation failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SIMULATION COMPLETE"));
    assert!(stderr.contains("Average wait:"));
    assert!(logged_value(&stderr, "Total vehicles spawned:") > 0);
    assert!(logged_value(&stderr, "Total vehicles exited:") > 0);
}

/// Test that red lights keep every vehicle in place
#[test]
fn test_all_red_run_has_no_exits() {
    let output = run_binary(&["--ticks", "60", "--seed", "3"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(logged_value(&stderr, "Total vehicles exited:"), 0);
}

/// Test that --status prints the published grid
#[test]
fn test_status_output() {
    let output = run_binary(&["--ticks", "1", "--green", "N:S", "--green", "e:l", "--status"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let status: serde_json::Value =
        serde_json::from_str(&stdout).expect("status output should be JSON");
    assert_eq!(status["data"]["signals"]["N"]["S"], "green");
    assert_eq!(status["data"]["signals"]["E"]["L"], "green");
    assert_eq!(status["data"]["signals"]["W"]["L"], "red");
}

/// Test that malformed light arguments are rejected
#[test]
fn test_bad_green_argument_fails() {
    let output = run_binary(&["--ticks", "1", "--green", "X:S"]);
    assert!(!output.status.success());
}

/// Test that non-finite or negative timing arguments are rejected up front
#[test]
fn test_bad_timing_arguments_fail() {
    for args in [
        ["--ticks", "1", "--delta", "inf"],
        ["--ticks", "1", "--delta", "NaN"],
        ["--ticks", "1", "--delta", "0"],
        ["--ticks", "1", "--spawn-interval", "inf"],
        ["--ticks", "1", "--spawn-interval=-1", "--all-green"],
    ] {
        let output = run_binary(&args);
        assert!(!output.status.success(), "Expected failure for {:?}", args);
    }
}
