//! Setup view: instructions for starting the local engine

use crate::engine::{ENGINE_INSTALL_COMMAND, ENGINE_SETUP_SCRIPT};
use crate::gui::app::Message;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length};

/// Create the setup view with the copyable engine script
pub fn setup_view() -> Element<'static, Message> {
    use crate::gui::theme;

    let content = column![
        text("Start the local engine")
            .size(26)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        text("Downloads are performed by a local yt-dlp process. Run it once; the app reconnects automatically.")
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        column![
            text("1. Install the prerequisites")
                .size(15)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            container(text(ENGINE_INSTALL_COMMAND).size(13))
                .padding(12)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(
                    theme::CodeBlockContainer
                ))),
        ]
        .spacing(8),
        column![
            row![
                text("2. Save and run this script")
                    .size(15)
                    .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
                Space::with_width(Length::Fill),
                button(text("Copy script").size(13))
                    .on_press(Message::CopySetupScript)
                    .padding([8, 14])
                    .style(iced::theme::Button::Custom(Box::new(
                        theme::SecondaryButton
                    ))),
            ],
            container(
                scrollable(text(ENGINE_SETUP_SCRIPT).size(11))
                    .height(Length::Fixed(260.0))
                    .style(iced::theme::Scrollable::Custom(Box::new(
                        theme::ScrollableStyle
                    )))
            )
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::CodeBlockContainer
            ))),
        ]
        .spacing(8),
        button(text("I started the engine").size(15))
            .on_press(Message::SwitchToMain)
            .padding([12, 24])
            .width(Length::Fill)
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(20)
    .width(Length::Fill);

    scrollable(
        container(content)
            .padding(28)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::GlassContainer,
            ))),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
