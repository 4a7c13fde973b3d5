use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("bmi").unwrap();
    // Keep any bmi.toml in the checkout out of the picture
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn calc_reference_scenario() {
    cmd()
        .args(["calc", "180", "75"])
        .assert()
        .success()
        .stdout(contains("BMI: 23.15"))
        .stdout(contains("Category: Healthy weight"))
        .stdout(contains("59.9 kgs - 80.7 kgs"));
}

#[test]
fn calc_class_2_obesity() {
    cmd()
        .args(["calc", "160", "100"])
        .assert()
        .success()
        .stdout(contains("BMI: 39.06"))
        .stdout(contains("Class 2 obesity"));
}

#[test]
fn calc_zero_weight_shows_placeholder() {
    cmd()
        .args(["calc", "180", "0"])
        .assert()
        .success()
        .stdout(contains("Your BMI Result"))
        .stdout(contains("BMI:").not());
}

#[test]
fn calc_negative_weight_shows_placeholder() {
    cmd()
        .args(["calc", "180", "-5"])
        .assert()
        .success()
        .stdout(contains("Your BMI Result"))
        .stdout(contains("BMI:").not());

    cmd()
        .args(["calc", "-180", "75"])
        .assert()
        .success()
        .stdout(contains("Your BMI Result"));
}

#[test]
fn calc_json() {
    cmd()
        .args(["--json", "calc", "180", "75"])
        .assert()
        .success()
        .stdout(contains("\"state\": \"ready\""))
        .stdout(contains("\"category\": \"healthy\""));
}

#[test]
fn calc_imperial_flag() {
    cmd()
        .args(["--units", "imperial", "calc", "71", "165"])
        .assert()
        .success()
        .stdout(contains("BMI: 23.01"))
        .stdout(contains("lbs"));
}

#[test]
fn calc_with_unit_suffixes() {
    cmd()
        .args(["calc", "5 ft 11 in", "165 lb"])
        .assert()
        .success()
        .stdout(contains("BMI: 23.01"));
}

#[test]
fn calc_rejects_wrong_dimension() {
    cmd()
        .args(["calc", "75 kg", "180"])
        .assert()
        .failure()
        .stderr(contains("Error:"))
        .stderr(contains("not a length unit"));
}

#[test]
fn calc_rejects_garbage() {
    cmd()
        .args(["calc", "tall", "75"])
        .assert()
        .failure()
        .stderr(contains("Invalid number"));
}

#[test]
fn range_metric_and_imperial() {
    cmd()
        .args(["range", "180"])
        .assert()
        .success()
        .stdout(contains("Ideal weight: 59.9 kgs - 80.7 kgs"));

    cmd()
        .args(["--units", "imperial", "range", "180 cm"])
        .assert()
        .success()
        .stdout(contains("132.1 lbs - 177.9 lbs"));
}

#[test]
fn range_rejects_zero_height() {
    cmd().args(["range", "0"]).assert().failure().stderr(contains("positive"));
}

#[test]
fn range_rejects_negative_height() {
    cmd().args(["range", "-180"]).assert().failure().stderr(contains("positive"));
}

#[test]
fn category_rejects_non_finite() {
    for value in ["NaN", "inf"] {
        cmd()
            .args(["category", value])
            .assert()
            .failure()
            .stderr(contains("finite"))
            .stdout(contains("Underweight").not());
    }
}

#[test]
fn category_boundaries() {
    cmd()
        .args(["category", "18.5"])
        .assert()
        .success()
        .stdout(contains("Healthy weight"));
    cmd()
        .args(["category", "25"])
        .assert()
        .success()
        .stdout(contains("Overweight"));
    cmd()
        .args(["category", "40"])
        .assert()
        .success()
        .stdout(contains("Obesity Class 3"));
}

#[test]
fn bands_lists_all_categories() {
    cmd()
        .arg("bands")
        .assert()
        .success()
        .stdout(contains("bmi < 18.5"))
        .stdout(contains("18.5 <= bmi < 25"))
        .stdout(contains("bmi >= 40"));
}

#[test]
fn config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bmi.toml"),
        "[units]\nsystem = \"imperial\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    Command::cargo_bin("bmi")
        .unwrap()
        .current_dir(dir.path())
        .args(["range", "71"])
        .assert()
        .success()
        .stdout(contains("\"unit\": \"lbs\""));
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[units]\nsystem = \"imperial\"\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .args(["--units", "metric", "calc", "180", "75"])
        .assert()
        .success()
        .stdout(contains("BMI: 23.15"));
}

#[test]
fn broken_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[units]\nsystem = \"nautical\"\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .args(["bands"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse config"));
}
