use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

const HEADER: &str = "ReplicaSet,Solution,Experiment,SmocId,RestoreDurationInSec,VmPeak,VmSize,VmHWM,VmRSS,VmData,DeltaMemoryUsageInKbFromTop\n";

fn test_dir(name: &str) -> PathBuf {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir_all(&test_dir).expect("failed to create test directory");
    test_dir
}

fn run_bin(args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_restore-bench"));
    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command")
}

fn describe(output: &Output) -> String {
    format!(
        "stdout:\n{}\nstderr:\n{}\n",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("failed to convert path to string")
}

fn read_svg(out_dir: &Path, file: &str) -> String {
    fs::read_to_string(out_dir.join(file)).expect("failed to read chart")
}

fn count_bars(svg: &str) -> usize {
    svg.matches("#0000FF").count()
}

fn write_input(test_dir: &Path, rows: &str) -> PathBuf {
    let input = test_dir.join("6000Msg.csv");
    fs::write(&input, format!("{HEADER}{rows}")).expect("failed to write input file");
    input
}

#[test]
fn basic_workflow() {
    let test_dir = test_dir("basic_workflow");
    let out_dir = test_dir.join("out");

    let input = write_input(
        &test_dir,
        "\
rs0,distributed,1,smoc1,0,9,9,9,100,9,0
rs0,distributed,1,smoc2,0,9,9,9,200,9,0
rs0,distributed,1,smoc5,5,9,9,9,0,9,0
rs0,distributed,2,smoc1,0,9,9,9,50,9,0
rs0,distributed,2,smoc5,7,9,9,9,0,9,0
rs0,centralized,1,smoc1,0,9,9,9,400,9,0
rs0,centralized,1,smoc5,5,9,9,9,0,9,0
rs0,centralized,1,smoc5,9,9,9,9,0,9,0
rs0,conventional,1,smoc1,0,9,9,9,1000,9,0
rs0,conventional,1,smoc5,12,9,9,9,0,9,0
rs0,conventional,2,smoc1,0,9,9,9,3000,9,0
rs0,conventional,2,smoc5,14,9,9,9,0,9,0
",
    );

    let config = test_dir.join("config.toml");
    fs::write(&config, "[chart]\nx_label = \"#replicas=4\"\n").expect("failed to write config");

    let output = run_bin(&[
        "--input",
        path_str(&input),
        "--out-dir",
        path_str(&out_dir),
        "--config",
        path_str(&config),
    ]);
    assert!(output.status.success(), "failed to run binary\n{}", describe(&output));

    let stderr = String::from_utf8_lossy(&output.stderr);
    for summary in [
        "distributed: duration 6.000 ± 1.000 sec over 2 experiments, footprint 175.0 ± 125.0 KiB over 2 experiments",
        "centralized: duration 9.000 ± 0.000 sec over 1 experiments, footprint 400.0 ± 0.0 KiB over 1 experiments",
        "conventional: duration 13.000 ± 1.000 sec over 2 experiments, footprint 2000.0 ± 1000.0 KiB over 2 experiments",
    ] {
        assert!(stderr.contains(summary), "missing {summary:?}\n{}", describe(&output));
    }

    let mut written: Vec<_> = fs::read_dir(&out_dir)
        .expect("failed to read output directory")
        .map(|entry| {
            let entry = entry.expect("failed to read entry");
            entry.file_name().to_string_lossy().into_owned()
        })
        .collect();
    written.sort();
    assert_eq!(written, ["Memory_Footprint.svg", "Restore_Duration.svg"]);

    for (file, y_desc) in [
        ("Restore_Duration.svg", "Restore Duration(sec)"),
        ("Memory_Footprint.svg", "Memory Footprint(KiB)"),
    ] {
        let svg = read_svg(&out_dir, file);
        assert!(svg.contains(y_desc));
        assert!(svg.contains("#replicas=4"));
        for label in ["Distributed", "Centralized", "Conventional"] {
            assert!(svg.contains(label), "{file} is missing {label}");
        }
        assert_eq!(count_bars(&svg), 3, "{file} should have three bars");
    }

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn solution_without_samples_has_no_bar() {
    let test_dir = test_dir("solution_without_samples");
    let out_dir = test_dir.join("out");
    let input = write_input(&test_dir, "rs0,centralized,3,smoc5,4.5,9,9,9,0,9,0\n");

    let output = run_bin(&["--input", path_str(&input), "--out-dir", path_str(&out_dir)]);
    assert!(output.status.success(), "failed to run binary\n{}", describe(&output));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("distributed: duration NaN"));
    assert!(stderr.contains("centralized: duration 4.500 ± 0.000 sec over 1 experiments"));

    assert_eq!(count_bars(&read_svg(&out_dir, "Restore_Duration.svg")), 1);
    assert_eq!(count_bars(&read_svg(&out_dir, "Memory_Footprint.svg")), 0);

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn unknown_option_is_rejected() {
    let output = run_bin(&["--no-charts"]);
    assert!(!output.status.success(), "binary should fail\n{}", describe(&output));
}

#[test]
fn unknown_solution_fails_without_output() {
    let test_dir = test_dir("unknown_solution");
    let out_dir = test_dir.join("out");
    let input = write_input(
        &test_dir,
        "rs0,distributed,1,smoc5,5,9,9,9,0,9,0\nrs0,hybrid,1,smoc5,5,9,9,9,0,9,0\n",
    );

    let output = run_bin(&["--input", path_str(&input), "--out-dir", path_str(&out_dir)]);
    assert!(!output.status.success(), "binary should fail\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown solution"));
    assert!(!out_dir.exists());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn missing_input_fails() {
    let test_dir = test_dir("missing_input");
    let out_dir = test_dir.join("out");
    let input = test_dir.join("missing.csv");

    let output = run_bin(&["--input", path_str(&input), "--out-dir", path_str(&out_dir)]);
    assert!(!output.status.success(), "binary should fail\n{}", describe(&output));
    assert!(!out_dir.exists());

    fs::remove_dir_all(&test_dir).ok();
}
