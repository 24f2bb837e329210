//! Main GUI application

use crate::engine::{DownloadFormat, EngineClient, Quality, VideoMetadata, ENGINE_SETUP_SCRIPT};
use crate::gui::clipboard;
use crate::gui::views::{main_view, setup_view};
use crate::tasks::{run_download, DownloadTask, TaskStore};
use crate::utils::config::AppSettings;
use crate::utils::error::TubeflowError;
use iced::widget::image;
use iced::{Application, Command, Element, Subscription, Theme};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long a transient notification stays on screen
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Main application state
pub struct TubeflowApp {
    settings: AppSettings,
    client: EngineClient,

    // Query state
    url_input: String,
    is_fetching: bool,
    url_error: Option<String>,
    metadata: Option<VideoMetadata>,
    thumbnail: Option<image::Handle>,
    format: DownloadFormat,
    quality: Quality,

    // Download tasks
    tasks: TaskStore,

    // Advisory connectivity state
    engine_connected: bool,
    probe_in_flight: bool,

    notification: Option<Notification>,
    current_view: View,
}

/// Application view
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Main,
    Setup,
}

/// Single-slot transient notification; a new one replaces the current one
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

impl Notification {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self::with_deadline(kind, message, Instant::now() + NOTIFICATION_TTL)
    }

    fn with_deadline(kind: NoticeKind, message: impl Into<String>, expires_at: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at,
        }
    }

    fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Metadata resolution failure, split so the UI can route the user to setup
/// when the engine process is missing entirely.
#[derive(Debug, Clone)]
pub enum ResolveError {
    Unreachable(String),
    Engine(String),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,

    // Metadata resolution
    FetchMetadata,
    MetadataFetched(Result<VideoMetadata, ResolveError>),
    ThumbnailLoaded(Option<Vec<u8>>),

    // Selection
    FormatSelected(DownloadFormat),
    QualitySelected(String),

    // Download lifecycle
    ConfirmDownload,
    DownloadFinished(String, Result<std::path::PathBuf, String>),
    RetryTask(String),
    OpenFile(String),
    ShowInFolder(String),

    // Liveness
    HealthTick,
    HealthProbed(bool),

    // View navigation and setup
    SwitchToMain,
    SwitchToSetup,
    CopySetupScript,

    // Periodic UI upkeep (notification expiry)
    Tick,
}

impl Application for TubeflowApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(settings: Self::Flags) -> (Self, Command<Message>) {
        let client = EngineClient::new(&settings.engine_url);

        let app = Self {
            client: client.clone(),
            url_input: String::new(),
            is_fetching: false,
            url_error: None,
            metadata: None,
            thumbnail: None,
            format: DownloadFormat::Mp4,
            quality: DownloadFormat::Mp4.default_quality(),
            tasks: TaskStore::new(),
            engine_connected: false,
            probe_in_flight: true,
            notification: None,
            current_view: View::Main,
            settings,
        };

        // Probe once at startup instead of waiting for the first tick
        let timeout = app.settings.probe_timeout;
        let command = Command::perform(
            async move { client.check_health(timeout).await },
            Message::HealthProbed,
        );

        (app, command)
    }

    fn title(&self) -> String {
        String::from("TubeFlow - Local Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                self.url_error = None; // Clear error when user types
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => {
                        self.url_input = content;
                        self.url_error = None;
                    }
                    Err(e) => {
                        self.url_error = Some(e);
                    }
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                self.url_error = None;
                Command::none()
            }

            // Metadata resolution
            Message::FetchMetadata => {
                if self.url_input.trim().is_empty() {
                    // Validation happens before any network call
                    self.url_error = Some(TubeflowError::EmptyUrl.to_string());
                    return Command::none();
                }
                if self.is_fetching {
                    return Command::none();
                }

                self.is_fetching = true;
                self.url_error = None;
                self.metadata = None;
                self.thumbnail = None;

                let client = self.client.clone();
                let url = self.url_input.trim().to_string();

                Command::perform(
                    async move {
                        client.fetch_metadata(&url).await.map_err(|e| match e {
                            TubeflowError::EngineUnreachable => {
                                ResolveError::Unreachable(e.to_string())
                            }
                            other => ResolveError::Engine(other.to_string()),
                        })
                    },
                    Message::MetadataFetched,
                )
            }

            Message::MetadataFetched(result) => {
                self.is_fetching = false;

                match result {
                    Ok(metadata) => {
                        info!("Resolved metadata: {}", metadata.title);
                        let thumbnail_url = metadata.thumbnail.clone();
                        self.metadata = Some(metadata);

                        let client = self.client.clone();
                        Command::perform(
                            async move { client.fetch_thumbnail(&thumbnail_url).await.ok() },
                            Message::ThumbnailLoaded,
                        )
                    }
                    Err(ResolveError::Unreachable(message)) => {
                        warn!("Engine unreachable during metadata resolution");
                        self.url_error = Some(message);
                        self.current_view = View::Setup;
                        Command::none()
                    }
                    Err(ResolveError::Engine(message)) => {
                        // Engine messages are surfaced verbatim
                        self.url_error = Some(message);
                        Command::none()
                    }
                }
            }

            Message::ThumbnailLoaded(bytes) => {
                self.thumbnail = bytes.map(image::Handle::from_memory);
                Command::none()
            }

            // Selection
            Message::FormatSelected(format) => {
                if self.format != format {
                    self.format = format;
                    self.quality = format.default_quality();
                }
                Command::none()
            }

            Message::QualitySelected(label) => {
                match Quality::parse(self.format, &label) {
                    Ok(quality) => self.quality = quality,
                    Err(e) => warn!("Rejected quality selection: {}", e),
                }
                Command::none()
            }

            // Download lifecycle
            Message::ConfirmDownload => {
                let Some(metadata) = &self.metadata else {
                    return Command::none();
                };

                let task = DownloadTask::new(
                    self.url_input.trim().to_string(),
                    metadata.title.clone(),
                    self.format,
                    self.quality,
                );
                let id = self.tasks.add(task);
                self.tasks.mark_downloading(&id);

                info!("Started download task {}", id);
                self.spawn_download(&id)
            }

            Message::DownloadFinished(task_id, result) => {
                match result {
                    Ok(path) => {
                        self.tasks.complete(&task_id, path.clone());
                        info!("Task {} completed: {}", task_id, path.display());
                        self.notification = Some(Notification::new(
                            NoticeKind::Success,
                            format!("Download complete. Saved as {}", path.display()),
                        ));
                    }
                    Err(reason) => {
                        warn!("Task {} failed: {}", task_id, reason);
                        self.tasks.fail(&task_id, reason.clone());
                        self.notification = Some(Notification::new(
                            NoticeKind::Warning,
                            format!("Download failed: {}", reason),
                        ));
                    }
                }
                Command::none()
            }

            Message::RetryTask(task_id) => {
                if self.tasks.retry(&task_id) {
                    info!("Retrying task {}", task_id);
                    self.spawn_download(&task_id)
                } else {
                    Command::none()
                }
            }

            Message::OpenFile(task_id) => {
                if let Some(path) = self.tasks.get(&task_id).and_then(|t| t.file_path.clone()) {
                    if let Err(e) = open::that(&path) {
                        warn!("Failed to open file: {}", e);
                    }
                }
                Command::none()
            }

            Message::ShowInFolder(task_id) => {
                let folder = self
                    .tasks
                    .get(&task_id)
                    .and_then(|t| t.file_path.as_ref())
                    .and_then(|p| p.parent().map(|d| d.to_path_buf()))
                    .unwrap_or_else(|| self.settings.download_location.clone());

                if let Err(e) = open::that(&folder) {
                    warn!("Failed to open folder: {}", e);
                }
                Command::none()
            }

            // Liveness
            Message::HealthTick => {
                // A slow probe must not stack concurrent probes
                if self.probe_in_flight {
                    return Command::none();
                }
                self.probe_in_flight = true;

                let client = self.client.clone();
                let timeout = self.settings.probe_timeout;
                Command::perform(
                    async move { client.check_health(timeout).await },
                    Message::HealthProbed,
                )
            }

            Message::HealthProbed(up) => {
                self.probe_in_flight = false;
                if up != self.engine_connected {
                    info!("Engine connectivity changed: {}", up);
                }
                self.engine_connected = up;
                Command::none()
            }

            // View navigation and setup
            Message::SwitchToMain => {
                self.current_view = View::Main;
                Command::none()
            }

            Message::SwitchToSetup => {
                self.current_view = View::Setup;
                Command::none()
            }

            Message::CopySetupScript => {
                self.notification = Some(match clipboard::set_clipboard_content(ENGINE_SETUP_SCRIPT)
                {
                    Ok(()) => Notification::new(NoticeKind::Success, "Engine script copied"),
                    Err(e) => Notification::new(NoticeKind::Warning, e),
                });
                Command::none()
            }

            // Periodic UI upkeep
            Message::Tick => {
                if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
                    self.notification = None;
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::theme;
        use iced::widget::{button, column, container, row, text, Space};
        use iced::{Alignment, Length};

        let status_pill = container(
            text(if self.engine_connected {
                "Engine: connected"
            } else {
                "Engine: offline"
            })
            .size(12),
        )
        .padding([6, 14])
        .style(iced::theme::Container::Custom(Box::new(
            if self.engine_connected {
                theme::StatusPill::Connected
            } else {
                theme::StatusPill::Disconnected
            },
        )));

        let header = container(
            row![
                text("TubeFlow")
                    .size(22)
                    .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
                Space::with_width(Length::Fill),
                status_pill,
                button(text("Setup").size(13))
                    .on_press(if self.current_view == View::Setup {
                        Message::SwitchToMain
                    } else {
                        Message::SwitchToSetup
                    })
                    .padding([8, 14])
                    .style(iced::theme::Button::Custom(Box::new(
                        theme::SecondaryButton
                    ))),
            ]
            .spacing(16)
            .align_items(Alignment::Center),
        )
        .padding([14, 24])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::HeaderContainer,
        )));

        let content = match self.current_view {
            View::Main => main_view(
                &self.url_input,
                self.is_fetching,
                self.url_error.as_deref(),
                self.metadata.as_ref(),
                self.thumbnail.as_ref(),
                self.format,
                self.quality,
                self.tasks.tasks(),
                self.notification.as_ref(),
            ),
            View::Setup => setup_view(),
        };

        let layout = column![header, content]
            .width(Length::Fill)
            .height(Length::Fill);

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::MainGradientContainer,
            )))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            iced::time::every(self.settings.poll_interval).map(|_| Message::HealthTick),
            iced::time::every(Duration::from_millis(500)).map(|_| Message::Tick),
        ])
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}

impl TubeflowApp {
    /// Issue the download request for an existing task. The task must
    /// already be in the downloading state; the result comes back as a
    /// `DownloadFinished` message and never escapes as an error.
    fn spawn_download(&self, task_id: &str) -> Command<Message> {
        let Some(task) = self.tasks.get(task_id) else {
            return Command::none();
        };

        let client = self.client.clone();
        let url = task.url.clone();
        let title = task.title.clone();
        let format = task.format;
        let quality = task.quality;
        let dir = self.settings.download_location.clone();
        let id = task_id.to_string();

        Command::perform(
            async move {
                let result = run_download(&client, &url, &title, format, quality, &dir)
                    .await
                    .map_err(|e| e.to_string());
                (id, result)
            },
            |(id, result)| Message::DownloadFinished(id, result),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn new_app() -> TubeflowApp {
        TubeflowApp::new(AppSettings::default()).0
    }

    #[test]
    fn test_notification_slot_holds_only_the_latest() {
        let mut app = new_app();

        let _ = app.update(Message::DownloadFinished(
            "t1".to_string(),
            Ok(PathBuf::from("/tmp/a.mp4")),
        ));
        let first = app.notification.clone().expect("notification set");
        assert_eq!(first.kind, NoticeKind::Success);
        assert!(first.message.contains("a.mp4"));

        let _ = app.update(Message::DownloadFinished(
            "t2".to_string(),
            Err("403 blocked".to_string()),
        ));
        let second = app.notification.clone().expect("notification set");
        assert_eq!(second.kind, NoticeKind::Warning);
        assert!(second.message.contains("403 blocked"));
    }

    #[test]
    fn test_tick_clears_expired_notifications_only() {
        let mut app = new_app();

        app.notification = Some(Notification::with_deadline(
            NoticeKind::Success,
            "done",
            Instant::now(),
        ));
        let _ = app.update(Message::Tick);
        assert!(app.notification.is_none());

        app.notification = Some(Notification::new(NoticeKind::Success, "fresh"));
        let _ = app.update(Message::Tick);
        assert!(app.notification.is_some());
    }

    #[test]
    fn test_expiry_is_deadline_based() {
        let now = Instant::now();
        let open = Notification::with_deadline(NoticeKind::Warning, "w", now + NOTIFICATION_TTL);
        assert!(!open.is_expired_at(now));
        assert!(open.is_expired_at(now + NOTIFICATION_TTL));
    }
}
