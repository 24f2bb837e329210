//! Resolved-video card: metadata summary plus format/quality selection

use crate::engine::{DownloadFormat, Quality, VideoMetadata};
use crate::gui::app::Message;
use crate::gui::components::format_selector;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, Image, Space};
use iced::{Alignment, Element, Length};

/// Card shown after a successful metadata resolution
pub fn metadata_card(
    metadata: &VideoMetadata,
    thumbnail: Option<&Handle>,
    format: DownloadFormat,
    quality: Quality,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let thumbnail_view: Element<'static, Message> = match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(320.0))
            .height(Length::Fixed(180.0))
            .into(),
        None => container(
            text(&metadata.duration)
                .size(14)
                .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        )
        .width(Length::Fixed(320.0))
        .height(Length::Fixed(180.0))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            theme::CodeBlockContainer,
        )))
        .into(),
    };

    let quality_options: Vec<String> = format
        .quality_labels()
        .iter()
        .map(|q| q.to_string())
        .collect();

    let details = column![
        text(&metadata.title)
            .size(22)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        text(format!(
            "{} \u{2022} {} views \u{2022} {}",
            metadata.author, metadata.views, metadata.duration
        ))
        .size(13)
        .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        row![
            column![
                text("Format")
                    .size(11)
                    .style(iced::theme::Text::Color(theme::SLATE_500)),
                format_selector(format),
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
            column![
                text("Quality")
                    .size(11)
                    .style(iced::theme::Text::Color(theme::SLATE_500)),
                iced::widget::pick_list(
                    quality_options,
                    Some(quality.as_str().to_string()),
                    Message::QualitySelected,
                )
                .text_size(13)
                .padding([8, 12])
                .width(Length::Fill),
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
        ]
        .spacing(16),
        Space::with_height(4),
        button(text("Confirm Download").size(16))
            .on_press(Message::ConfirmDownload)
            .padding([14, 28])
            .width(Length::Fill)
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(14)
    .width(Length::Fill);

    container(
        row![thumbnail_view, details]
            .spacing(24)
            .align_items(Alignment::Start),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )))
    .into()
}
