use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use app::App;

const PAGE_SIZE: i64 = 20;
const FLIGHT_DATE: &str = "2025-01-16";

fn main() {
    dioxus::logger::initialize_default();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Flightboard"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "flightboard", "flightboard")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
