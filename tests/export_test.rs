use slider_export::export::{HTML_FILENAME, JSON_FILENAME};
use slider_export::{
    export_bundle, export_json, write_artifact, BundleOptions, CloseVisibility, EditorSession,
    NavPolicy, SliderData, Viewport,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_artifacts_carry_suggested_filenames() {
    let data = SliderData::default();

    let json = export_json(&data).expect("json export");
    assert_eq!(json.filename, JSON_FILENAME);
    assert_eq!(json.filename, "slider-config.json");
    assert!(json.contents.starts_with("{\n  \"slides\": ["));

    let html = export_bundle(&data, &BundleOptions::default());
    assert_eq!(html.filename, HTML_FILENAME);
    assert_eq!(html.filename, "slider-export.html");
}

#[test]
fn test_write_artifact_round_trips_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("exports");

    let mut session = EditorSession::default();
    session.duplicate_slide(1).unwrap();
    session.slide_mut(0).unwrap().add_button();
    let data = session.snapshot();

    let path = write_artifact(&export_json(&data).unwrap(), &out_dir).expect("write json");
    assert_eq!(path, out_dir.join("slider-config.json"));

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(SliderData::from_json(&written).unwrap(), data);
}

#[test]
fn test_bundle_variants_are_explicit() {
    let mut options = BundleOptions {
        viewport: Some(Viewport::Mobile),
        font_stylesheet: None,
        ..Default::default()
    };
    options.runtime.swipe_policy = NavPolicy::Wrap;
    options.runtime.close_visibility = CloseVisibility::FirstTwo;
    options.runtime.host_api = "HostBridge".to_string();

    let html = export_bundle(&SliderData::default(), &options).contents;
    assert!(html.contains("\"swipePolicy\":\"wrap\""));
    assert!(html.contains("\"arrowPolicy\":\"clamp\""));
    assert!(html.contains("\"closeVisibility\":\"first-two\""));
    assert!(html.contains("\"hostApi\":\"HostBridge\""));
    // First-two policy shows the close control at slide 0
    assert!(html.contains("class=\"sl-close\""));
    assert!(html.contains("--sl-width:340px;--sl-height:700px"));
}

#[test]
fn test_write_bundle_to_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let artifact = export_bundle(&SliderData::default(), &BundleOptions::default());
    let path = write_artifact(&artifact, temp_dir.path()).expect("write html");

    let html = fs::read_to_string(path).unwrap();
    assert_eq!(html, artifact.contents);
    assert_eq!(html.matches("sl-button-outline").count(), 2);
}
