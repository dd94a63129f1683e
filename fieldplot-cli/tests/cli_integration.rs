use std::process::{Command, Output};

fn run_fieldplot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fieldplot"))
        .args(args)
        .output()
        .expect("run fieldplot")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn eval_prints_the_value() {
    let output = run_fieldplot(&["-e", "(2+3)*4"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output).trim(), "20");
}

#[test]
fn eval_uses_defines() {
    let output = run_fieldplot(&["-e", "x+y", "-D", "x=3", "-D", "y=4"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output).trim(), "7");
}

#[test]
fn eval_division_by_zero_fails() {
    let output = run_fieldplot(&["-e", "1/0"]);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("division by zero"),
        "expected division error on stderr, got: {stderr}"
    );
}

#[test]
fn eval_malformed_formula_fails() {
    let output = run_fieldplot(&["-e", "(2+3"]);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Error:"),
        "expected error line on stderr, got: {stderr}"
    );
}

#[test]
fn field_sample_at_point() {
    let output = run_fieldplot(&["--fx", "y", "--fy", "0-x", "--at", "1,2"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output).trim(), "2 -1");
}

#[test]
fn field_region_sweep_lists_samples() {
    let output = run_fieldplot(&[
        "--fx", "1", "--fy", "0", "--region", "0,0,1,1", "--step", "1",
    ]);

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 4, "expected 4 samples: {stdout}");
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("max magnitude: 1"),
        "expected magnitude summary on stderr, got: {stderr}"
    );
}

#[test]
fn field_time_binding() {
    let output = run_fieldplot(&["--fx", "t*x", "--fy", "0", "--at", "2,0", "--time", "1.5"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output).trim(), "3 0");
}

#[test]
fn no_formula_is_an_error() {
    let output = run_fieldplot(&[]);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("No formula"),
        "expected usage hint on stderr, got: {stderr}"
    );
}
