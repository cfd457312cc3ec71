use std::{fs, path::PathBuf, process::Command};

fn run_bin(args: &[&str]) -> (bool, String, String) {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_sirsim"));

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    let stdout_str = String::from_utf8(output.stdout).expect("failed to convert stdout to string");
    let stderr_str = String::from_utf8(output.stderr).expect("failed to convert stderr to string");

    (output.status.success(), stdout_str, stderr_str)
}

fn test_dir(name: &str) -> PathBuf {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir_all(&test_dir).expect("failed to create test directory");
    test_dir
}

#[test]
fn basic_workflow() {
    let test_dir = test_dir("basic_workflow");

    let config_path = test_dir.join("config.toml");
    let config_contents = String::new()
        + "[model]\n"
        + "beta = 0.3\n"
        + "gamma = 0.1\n"
        + "\n"
        + "[init]\n"
        + "susceptible = 99.0\n"
        + "infected = 1.0\n"
        + "resistant = 0.0\n"
        + "\n"
        + "[time]\n"
        + "t0 = 0\n"
        + "t_end = 20\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    let config_str = config_path
        .to_str()
        .expect("failed to convert config path to string");

    let (ok, stdout, stderr) = run_bin(&["--config", config_str, "trajectory"]);
    assert!(ok, "trajectory failed\nstdout:\n{stdout}\nstderr:\n{stderr}\n");
    let rows: Vec<Vec<f64>> = stdout
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|field| field.parse().expect("failed to parse field"))
                .collect()
        })
        .collect();
    assert_eq!(rows.len(), 21);
    assert_eq!(rows[0], vec![0.0, 0.99, 0.01, 0.0]);
    for (t, row) in rows.iter().enumerate() {
        assert_eq!(row[0], t as f64);
        assert!((row[1] + row[2] + row[3] - 1.0).abs() < 1e-9);
    }

    let (ok, stdout, stderr) = run_bin(&["--config", config_str, "final"]);
    assert!(ok, "final failed\nstdout:\n{stdout}\nstderr:\n{stderr}\n");
    let last: Vec<f64> = stdout
        .split_whitespace()
        .map(|field| field.parse().expect("failed to parse field"))
        .collect();
    assert_eq!(last, rows[20][1..]);

    let (ok, stdout, stderr) = run_bin(&["--config", config_str, "summary"]);
    assert!(ok, "summary failed\nstdout:\n{stdout}\nstderr:\n{stderr}\n");
    assert!(stdout.contains("steps = 20"));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn rate_overrides_apply_without_config_file() {
    let (ok, stdout, stderr) = run_bin(&["--beta", "0", "--gamma", "0", "final"]);
    assert!(ok, "final failed\nstdout:\n{stdout}\nstderr:\n{stderr}\n");

    let last: Vec<f64> = stdout
        .split_whitespace()
        .map(|field| field.parse().expect("failed to parse field"))
        .collect();
    assert_eq!(last, vec![89.0 / 90.0, 1.0 / 90.0, 0.0]);
}

#[test]
fn invalid_config_fails() {
    let test_dir = test_dir("invalid_config");

    let config_path = test_dir.join("config.toml");
    fs::write(&config_path, "[time]\nt0 = 10\nt_end = 5\n").expect("failed to write config file");

    let config_str = config_path
        .to_str()
        .expect("failed to convert config path to string");
    let (ok, _, stderr) = run_bin(&["--config", config_str, "final"]);
    assert!(!ok);
    assert!(stderr.contains("invalid end time"));

    let (ok, _, _) = run_bin(&["--config", "/nonexistent/config.toml", "final"]);
    assert!(!ok);

    fs::remove_dir_all(&test_dir).ok();
}
