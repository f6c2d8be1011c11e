// ABOUTME: Watch module for monitoring a slider config and regenerating the bundle
// ABOUTME: Optionally serves the regenerated bundle over HTTP for live preview

use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;
use tiny_http::{Header, Response, Server, StatusCode};

use crate::bundle::BundleOptions;
use crate::errors::{Result, SliderError};
use crate::export;
use crate::model::SliderData;
use crate::utils;

/// Configuration for watch mode
pub struct WatchConfig {
    /// Path to the JSON slider config to watch
    pub config_path: PathBuf,

    /// Output HTML bundle path
    pub html_output: PathBuf,

    /// Options passed to the bundle generator on every rebuild
    pub bundle: BundleOptions,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,

    /// Whether to serve the bundle using a local web server
    pub serve: bool,

    /// Port for local web server
    pub port: u16,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            html_output: PathBuf::new(),
            bundle: BundleOptions::default(),
            debounce_ms: 500,
            serve: false,
            port: 8080,
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("html") => "text/html; charset=utf-8",
        Some("json") => "application/json",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Start a simple HTTP server that always serves the latest bundle from disk
fn start_server(html_path: PathBuf, port: u16) -> Result<()> {
    let server = Server::http(format!("127.0.0.1:{}", port))
        .map_err(|e| SliderError::WatchError(format!("Failed to start HTTP server: {}", e)))?;

    let html_dir = html_path.parent().unwrap_or(Path::new(".")).to_path_buf();
    let html_file_name = html_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    thread::spawn(move || {
        info!("HTTP server listening on http://localhost:{}", port);
        println!("Preview at http://localhost:{}", port);

        for request in server.incoming_requests() {
            let url_path = request.url().split('?').next().unwrap_or("/").to_string();

            let clean_path = url_path.trim_start_matches('/');
            if clean_path.split('/').any(|part| part == "..") {
                let response = Response::from_string("400 Bad Request")
                    .with_status_code(StatusCode(400));
                let _ = request.respond(response);
                continue;
            }

            let file_path = if clean_path.is_empty() {
                html_dir.join(&html_file_name)
            } else {
                html_dir.join(clean_path)
            };

            debug!("Request for {:?} -> {:?}", url_path, file_path);

            if !file_path.is_file() {
                let response =
                    Response::from_string("404 Not Found").with_status_code(StatusCode(404));
                let _ = request.respond(response);
                continue;
            }

            match fs::read(&file_path) {
                Ok(content) => {
                    let mut response = Response::from_data(content);
                    match Header::from_bytes("Content-Type", content_type(&file_path)) {
                        Ok(header) => response = response.with_header(header),
                        Err(()) => warn!("Invalid content-type header for {:?}", file_path),
                    }
                    if let Err(e) = request.respond(response) {
                        error!("Failed to send response: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to read file {:?}: {}", file_path, e);
                    let response = Response::from_string(format!("Failed to read file: {}", e))
                        .with_status_code(StatusCode(500));
                    let _ = request.respond(response);
                }
            }
        }
    });

    Ok(())
}

/// Watch a slider config and regenerate the bundle whenever it changes
pub fn watch_config_file(config: WatchConfig) -> Result<()> {
    utils::validate_file_exists(&config.config_path)?;
    utils::ensure_parent_directory_exists(&config.html_output)?;

    // Initial generation
    regenerate_bundle(&config)?;

    if config.serve {
        start_server(config.html_output.clone(), config.port)?;
    }

    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| SliderError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    // Watch the containing directory so editors that replace the file are still seen
    let watch_path = match config.config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let abs_watch_path = utils::get_absolute_path(watch_path)?;

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::NonRecursive)
        .map_err(|e| {
            SliderError::WatchError(format!(
                "Failed to start watching directory {:?}: {}",
                abs_watch_path, e
            ))
        })?;

    info!("Watching for changes in {:?}", config.config_path);
    println!(
        "Watching {:?} for changes (Press Ctrl+C to stop)",
        config.config_path
    );

    let mut last_processed = Instant::now();

    for result in rx {
        match result {
            Ok(events) => {
                let relevant = events.iter().any(|event| {
                    event
                        .paths
                        .iter()
                        .any(|path| is_relevant_path(path, &config.config_path))
                });

                let now = Instant::now();
                if relevant
                    && now.duration_since(last_processed)
                        > Duration::from_millis(config.debounce_ms)
                {
                    match regenerate_bundle(&config) {
                        Ok(()) => {
                            info!("Regenerated bundle successfully");
                            last_processed = now;
                        }
                        // Keep watching; the next save may fix the JSON
                        Err(e) => error!("Failed to regenerate bundle: {}", e),
                    }
                }
            }
            Err(errors) => error!("Watch error: {:?}", errors),
        }
    }

    Ok(())
}

/// Checks whether a changed path is the watched config file
fn is_relevant_path(path: &Path, config_path: &Path) -> bool {
    if path == config_path {
        return true;
    }
    match (
        utils::get_absolute_path(path),
        utils::get_absolute_path(config_path),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => path.file_name().is_some() && path.file_name() == config_path.file_name(),
    }
}

/// Reload the config and rewrite the bundle
fn regenerate_bundle(config: &WatchConfig) -> Result<()> {
    info!("Regenerating bundle from {:?}", config.config_path);

    let data = SliderData::from_file(&config.config_path)?;
    data.validate()?;

    let artifact = export::export_bundle(&data, &config.bundle);
    export::write_to_path(&artifact, &config.html_output)?;
    info!("Bundle regenerated: {:?}", config.html_output);

    Ok(())
}
