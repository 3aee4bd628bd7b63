use crate::ui::theme::Theme;
use crate::ui::{Toast, ToastKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

pub(super) fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();

    let (prefix, bg, text_style) = match toast.kind {
        ToastKind::Success => (
            "  + ",
            Theme::GREEN,
            Style::default()
                .fg(Theme::WHITE)
                .add_modifier(Modifier::BOLD),
        ),
        ToastKind::Error => ("  x ", Theme::RED, Style::default().fg(Theme::WHITE)),
        ToastKind::Info => (
            "  › ",
            Theme::GREY_700,
            Style::default()
                .fg(Theme::GREY_100)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    // Errors show how long they will stay up
    let suffix = if toast.kind == ToastKind::Error {
        format!(" ({}s) ", toast.remaining_secs(Instant::now()))
    } else {
        String::from("  ")
    };

    let width = (prefix.width() + toast.message.width() + suffix.width()) as u16;
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(4),
        width: width.min(area.width),
        height: 1.min(area.height),
    };

    frame.render_widget(Clear, toast_area);

    let content = Paragraph::new(Line::from(vec![
        Span::styled(prefix, Style::default().fg(Theme::WHITE)),
        Span::styled(toast.message.as_str(), text_style),
        Span::styled(suffix, Style::default().fg(Theme::GREY_200)),
    ]))
    .style(Style::default().bg(bg));
    frame.render_widget(content, toast_area);
}
