//! Format toggle component

use crate::engine::DownloadFormat;
use crate::gui::app::Message;
use iced::widget::{button, row, text};
use iced::{Element, Length};

/// Two-way toggle between MP4 (video) and MP3 (audio)
pub fn format_selector(selected: DownloadFormat) -> Element<'static, Message> {
    use crate::gui::theme;

    let toggle = |label: &'static str, format: DownloadFormat| {
        button(text(label).size(13))
            .on_press(Message::FormatSelected(format))
            .padding([10, 16])
            .width(Length::Fill)
            .style(iced::theme::Button::Custom(Box::new(
                if selected == format {
                    theme::FormatToggle::Active
                } else {
                    theme::FormatToggle::Inactive
                },
            )))
    };

    row![
        toggle("VIDEO (MP4)", DownloadFormat::Mp4),
        toggle("AUDIO (MP3)", DownloadFormat::Mp3),
    ]
    .spacing(6)
    .into()
}
