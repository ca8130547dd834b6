use std::process::Command;

fn runtime_main() -> Command {
    Command::new(env!("CARGO_BIN_EXE_runtime_main"))
}

fn summaries(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("summary line is JSON"))
        .collect()
}

#[test]
fn push_right_episode_terminates_quickly() {
    let output = runtime_main()
        .args(["--policy", "push-right", "--episodes", "2", "--max-steps", "200"])
        .output()
        .expect("failed to run runtime_main");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let runs = summaries(&output.stdout);
    assert_eq!(runs.len(), 2);
    for run in &runs {
        assert_eq!(run["terminated"], true);
        assert!(run["steps"].as_u64().unwrap() < 50);
    }
    assert_eq!(runs[0]["steps"], runs[1]["steps"]);
}

#[test]
fn bang_bang_survives_cutoff() {
    let output = runtime_main()
        .args(["--policy", "bang-bang", "--max-steps", "150"])
        .output()
        .expect("failed to run runtime_main");
    assert!(output.status.success());
    let runs = summaries(&output.stdout);
    assert_eq!(runs[0]["steps"], 150);
    assert_eq!(runs[0]["terminated"], false);
}

#[test]
fn rejects_three_poles() {
    let output = runtime_main()
        .args(["--poles", "3"])
        .output()
        .expect("failed to run runtime_main");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported pole count 3"), "stderr: {stderr}");
}

#[test]
fn config_file_and_trace_dump() {
    let dir = std::env::temp_dir().join(format!("pole_runtime_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("env.json");
    let trace = dir.join("trace.jsonl");
    std::fs::write(&config, r#"{ "nb_poles": 2, "random_init": true, "seed": 9 }"#).unwrap();

    let output = runtime_main()
        .arg("--config")
        .arg(&config)
        .arg("--trace")
        .arg(&trace)
        .args(["--policy", "random", "--max-steps", "30"])
        .output()
        .expect("failed to run runtime_main");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let steps = summaries(&output.stdout)[0]["steps"].as_u64().unwrap();
    let lines: Vec<serde_json::Value> = std::fs::read_to_string(&trace)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len() as u64, steps + 1);
    assert_eq!(lines[0]["frame"].as_array().unwrap().len(), 6);

    std::fs::remove_dir_all(&dir).ok();
}
