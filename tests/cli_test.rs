use slider_export::SliderData;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    run_command_with_env(args, &[])
}

fn run_command_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_slider-export"));
    command.args(args).env("RUST_LOG", "warn");
    for name in [
        "SLIDER_VIEWPORT",
        "SLIDER_FONT_URL",
        "SLIDER_ARROW_POLICY",
        "SLIDER_SWIPE_POLICY",
        "SLIDER_CLOSE_VISIBILITY",
    ] {
        command.env_remove(name);
    }
    for (name, value) in vars {
        command.env(name, value);
    }
    command.output().expect("Failed to execute command")
}

#[test]
fn test_init_writes_sample_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("nested");

    let output = run_command(&["init", "--dir", dir.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json = fs::read_to_string(dir.join("slider-config.json")).expect("config written");
    let data = SliderData::from_json(&json).expect("valid config");
    assert_eq!(data, SliderData::default());
}

#[test]
fn test_export_html_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let mut data = SliderData::default();
    data.slides[0].title[1] = "Hello <world>".to_string();
    let config_path = temp_path.join("slider-config.json");
    fs::write(&config_path, data.to_json_pretty().unwrap()).expect("write config");

    let output_path = temp_path.join("slider-export.html");
    let output = run_command(&[
        "export-html",
        "-i",
        config_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--viewport",
        "tablet",
        "--title",
        "Promo",
        "--no-font",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html.contains("<title>Promo</title>"));
    assert!(html.contains("Hello &lt;world&gt;"));
    assert!(html.contains("data-viewport=\"tablet\""));
    assert!(!html.contains("<link "), "font should be omitted");
}

#[test]
fn test_export_html_defaults_to_sample_deck() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("out.html");

    let output = run_command(&["export-html", "-o", output_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html.contains("DE FAIRE PLAISIR"));
    assert!(html.contains("fonts.googleapis.com"));
}

#[test]
fn test_export_json_normalises_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    // Compact input without typography, as older exports look
    let input = temp_path.join("in.json");
    fs::write(
        &input,
        r##"{"slides":[{"id":"a","title":["Hi"],"subtitle":[],"imageUrl":"x.png","buttons":[]}],
            "config":{"backgroundColor":"#000","buttonColor":"#111","buttonTextColor":"#222",
            "titleColor":"#333","subtitleColor":"#444","accentColor":"#555","dotColor":"#666",
            "dotActiveColor":"#777","arrowColor":"#888"}}"##,
    )
    .unwrap();

    let output_path = temp_path.join("slider-config.json");
    let output = run_command(&[
        "export-json",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json = fs::read_to_string(&output_path).unwrap();
    assert!(json.contains("\"titleStyle\": {"));
    let data = SliderData::from_json(&json).unwrap();
    assert_eq!(data.slides[0].title, vec!["Hi".to_string()]);
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let mut data = SliderData::default();
    data.slides.clear();
    let input = temp_path.join("empty.json");
    fs::write(&input, data.to_json_pretty().unwrap()).unwrap();

    let output = run_command(&[
        "export-html",
        "-i",
        input.to_str().unwrap(),
        "-o",
        temp_path.join("out.html").to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one slide"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_viewport_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_command(&[
        "export-html",
        "-o",
        temp_dir.path().join("out.html").to_str().unwrap(),
        "--viewport",
        "watch",
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_navigation_flags_reach_the_runtime() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("out.html");

    let output = run_command(&[
        "export-html",
        "-o",
        output_path.to_str().unwrap(),
        "--arrows",
        "wrap",
        "--close",
        "first-two",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("\"arrowPolicy\":\"wrap\""));
    assert!(html.contains("\"swipePolicy\":\"clamp\""));
    assert!(html.contains("\"closeVisibility\":\"first-two\""));
    assert!(html.contains("class=\"sl-close\""));
}

#[test]
fn test_navigation_env_vars_and_flag_precedence() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("out.html");

    let output = run_command_with_env(
        &[
            "export-html",
            "-o",
            output_path.to_str().unwrap(),
            "--close",
            "last-slide",
        ],
        &[
            ("SLIDER_SWIPE_POLICY", "wrap"),
            ("SLIDER_CLOSE_VISIBILITY", "first-two"),
        ],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("\"swipePolicy\":\"wrap\""));
    assert!(html.contains("\"closeVisibility\":\"last-slide\""));
}

#[test]
fn test_unknown_policy_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_command(&[
        "export-html",
        "-o",
        temp_dir.path().join("out.html").to_str().unwrap(),
        "--swipe",
        "bounce",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown navigation policy"), "stderr: {}", stderr);

    let output = run_command_with_env(
        &["export-html", "-o", temp_dir.path().join("out.html").to_str().unwrap()],
        &[("SLIDER_CLOSE_VISIBILITY", "never")],
    );
    assert!(!output.status.success());
}
