//! Task list item component

use crate::tasks::{DownloadTask, TaskStatus};
use crate::gui::app::Message;
use iced::widget::{button, column, container, progress_bar, row, text, Space};
use iced::{Alignment, Element, Length};

/// Create a task item widget
pub fn task_item(task: &DownloadTask) -> Element<'static, Message> {
    use crate::gui::theme;

    let status_color = match task.status {
        TaskStatus::Downloading => theme::ACCENT,
        TaskStatus::Completed => theme::SUCCESS,
        TaskStatus::Failed(_) => theme::DANGER,
        TaskStatus::Pending => theme::TEXT_SECONDARY,
    };

    let control_buttons = match &task.status {
        TaskStatus::Failed(_) => row![button(text("Retry").size(12))
            .on_press(Message::RetryTask(task.id.clone()))
            .padding([6, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),],

        TaskStatus::Completed => row![
            button(text("Open File").size(12))
                .on_press(Message::OpenFile(task.id.clone()))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            button(text("Show in Folder").size(12))
                .on_press(Message::ShowInFolder(task.id.clone()))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(
                    theme::SecondaryButton
                ))),
        ],

        TaskStatus::Pending | TaskStatus::Downloading => row![],
    };

    let mut content = column![
        row![
            container(text(task.format.as_str()).size(12))
                .padding([6, 10])
                .style(iced::theme::Container::Custom(Box::new(
                    theme::CodeBlockContainer
                ))),
            column![
                text(&task.title)
                    .size(15)
                    .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
                text(format!("{} \u{2022} {}", task.quality, task.format))
                    .size(11)
                    .style(iced::theme::Text::Color(theme::SLATE_500)),
            ]
            .spacing(2)
            .width(Length::Fill),
            text(task.status.label())
                .size(12)
                .style(iced::theme::Text::Color(status_color)),
        ]
        .spacing(14)
        .align_items(Alignment::Center),
    ]
    .spacing(10)
    .width(Length::Fill);

    // Progress only ever reads 0 or 100; show the bar while downloading and
    // a full green bar once complete.
    match &task.status {
        TaskStatus::Downloading => {
            content = content.push(
                progress_bar(0.0..=100.0, task.progress as f32)
                    .height(Length::Fixed(6.0))
                    .style(iced::theme::ProgressBar::Custom(Box::new(
                        theme::ProgressBarStyle,
                    ))),
            );
        }
        TaskStatus::Completed => {
            content = content.push(
                progress_bar(0.0..=100.0, task.progress as f32)
                    .height(Length::Fixed(6.0))
                    .style(iced::theme::ProgressBar::Custom(Box::new(
                        theme::ProgressBarCompleted,
                    ))),
            );
        }
        TaskStatus::Failed(reason) => {
            content = content.push(
                text(reason.clone())
                    .size(12)
                    .style(iced::theme::Text::Color(theme::DANGER)),
            );
        }
        TaskStatus::Pending => {}
    }

    if !matches!(task.status, TaskStatus::Pending | TaskStatus::Downloading) {
        content = content.push(row![
            Space::with_width(Length::Fill),
            control_buttons.spacing(8)
        ]);
    }

    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::GlassContainer,
        )))
        .into()
}
