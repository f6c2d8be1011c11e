// ABOUTME: Library module for the slider-export program.
// ABOUTME: Contains the slider data model, style resolution and the HTML bundle generator.

// Reexport modules
pub mod bundle;
pub mod config;
pub mod errors;
pub mod export;
pub mod markup;
pub mod model;
pub mod navigation;
pub mod runtime;
pub mod session;
pub mod style;
pub mod utils;
pub mod watch;

// Reexport common types and functions
pub use bundle::{generate_bundle, BundleOptions};
pub use config::Config;
pub use errors::{Result, SliderError};
pub use export::{export_bundle, export_json, write_artifact, ExportArtifact};
pub use model::{ButtonVariant, Slide, SlideButton, SliderConfig, SliderData, TextAlign, TextStyle};
pub use navigation::{Carousel, CloseVisibility, NavPolicy, SwipeTracker};
pub use runtime::RuntimeOptions;
pub use session::EditorSession;
pub use style::Viewport;
pub use watch::{watch_config_file, WatchConfig};
