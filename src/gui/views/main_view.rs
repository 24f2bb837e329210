//! Main view: URL input, resolved-video card, and task list

use crate::engine::{DownloadFormat, Quality, VideoMetadata};
use crate::gui::app::{Message, Notification, NoticeKind};
use crate::gui::components::{metadata_card, task_item, url_input};
use crate::tasks::DownloadTask;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

/// Create the main view
#[allow(clippy::too_many_arguments)]
pub fn main_view(
    url_value: &str,
    is_fetching: bool,
    url_error: Option<&str>,
    metadata: Option<&VideoMetadata>,
    thumbnail: Option<&Handle>,
    format: DownloadFormat,
    quality: Quality,
    tasks: &[DownloadTask],
    notification: Option<&Notification>,
) -> Element<'static, Message> {
    use crate::gui::theme;

    // Hero input section
    let hero_section = container(
        column![
            text("Paste. Resolve. Download.")
                .size(28)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            text("Everything runs through your own local yt-dlp engine.")
                .size(14)
                .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
            url_input(
                url_value,
                Message::UrlInputChanged,
                Message::PasteFromClipboard,
                Message::ClearUrlInput,
                url_error,
            ),
            row![
                Space::with_width(Length::Fill),
                button(
                    text(if is_fetching {
                        "Resolving..."
                    } else {
                        "Resolve"
                    })
                    .size(16)
                )
                .on_press_maybe(if !is_fetching {
                    Some(Message::FetchMetadata)
                } else {
                    None
                })
                .padding([14, 30])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            ],
        ]
        .spacing(16),
    )
    .padding(28)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )));

    let mut page = column![].spacing(24).width(Length::Fill);

    if let Some(notice) = notification {
        let banner_style = match notice.kind {
            NoticeKind::Success => theme::NotificationBanner::Success,
            NoticeKind::Warning => theme::NotificationBanner::Warning,
        };
        page = page.push(
            container(text(notice.message.clone()).size(14))
                .padding([10, 16])
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(banner_style))),
        );
    }

    page = page.push(hero_section);

    if let Some(meta) = metadata {
        page = page.push(metadata_card(meta, thumbnail, format, quality));
    }

    // Task list, newest first
    if !tasks.is_empty() {
        let mut tasks_col = column![text("Download Tasks")
            .size(20)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY))]
        .spacing(14);

        for task in tasks {
            tasks_col = tasks_col.push(task_item(task));
        }

        page = page.push(tasks_col);
    } else {
        page = page.push(
            container(
                column![
                    text("No download tasks yet")
                        .size(15)
                        .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
                    text("Resolve a URL and confirm to start one")
                        .size(13)
                        .style(iced::theme::Text::Color(theme::SLATE_500)),
                ]
                .spacing(6)
                .align_items(Alignment::Center),
            )
            .width(Length::Fill)
            .padding(24)
            .center_x(),
        );
    }

    scrollable(page.padding([28, 32]))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Scrollable::Custom(Box::new(
            theme::ScrollableStyle,
        )))
        .into()
}
