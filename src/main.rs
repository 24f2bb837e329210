//! TubeFlow - Local Video Downloader
//!
//! A desktop front-end for a locally-run yt-dlp HTTP engine. The app
//! resolves video metadata, lets the user pick a format and quality, and
//! saves the rendition the engine produces.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use std::path::PathBuf;
use tubeflow::engine::{EngineClient, ENGINE_INSTALL_COMMAND};
use tubeflow::gui::TubeflowApp;
use tubeflow::utils::AppSettings;

#[derive(Parser)]
#[command(name = "tubeflow", about = "Front-end for a local yt-dlp download engine")]
struct Args {
    /// Base URL of the local engine
    #[arg(long)]
    engine_url: Option<String>,

    /// Directory downloaded files are saved to
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Probe the engine once and exit
    #[arg(long)]
    check_engine: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::default();
    if let Some(url) = args.engine_url {
        settings.engine_url = url;
    }
    if let Some(dir) = args.download_dir {
        settings.download_location = dir;
    }

    if args.check_engine {
        // Headless probe inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        let up = rt.block_on(async {
            EngineClient::new(&settings.engine_url)
                .check_health(settings.probe_timeout)
                .await
        });

        if up {
            println!("Engine is running at {}", settings.engine_url);
        } else {
            println!("Engine is not reachable at {}", settings.engine_url);
            println!("Install the prerequisites and start it:");
            println!("  {}", ENGINE_INSTALL_COMMAND);
            println!("  (the full script is available in the app's setup view)");
        }
        return Ok(());
    }

    // Start the GUI application (synchronous entrypoint)
    TubeflowApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(900.0, 640.0),
            min_size: Some(iced::Size::new(760.0, 520.0)),
            ..Default::default()
        },
        flags: settings,
        antialiasing: true,
        ..iced::Settings::default()
    })?;

    Ok(())
}
