use crate::navigator::View;
use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = if app.modal.is_open() {
        if app.modal.item().is_some_and(|i| i.is_pdf()) {
            &[
                ("+/-", "zoom"),
                ("r", "reset"),
                ("o", "open file"),
                ("esc", "close"),
            ]
        } else {
            &[("o", "open file"), ("esc", "close")]
        }
    } else {
        match app.navigator.view() {
            View::Folders => &[
                ("↵", "open"),
                ("0-4", "filter"),
                ("tab", "next filter"),
                ("?", "help"),
                ("q", "quit"),
            ],
            View::Contents => &[
                ("↵", "view"),
                ("esc", "back"),
                ("0-4", "filter"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    };

    let mut spans = vec![Span::raw("   ")];
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {} ", key), Theme::key()));
        spans.push(Span::styled(format!(" {}  ", label), Theme::text_dim()));
    }

    let catalog = app.navigator.catalog();
    let status_text = match app.selected_item() {
        Some(item) if !app.modal.is_open() => format!(
            "   {} {} {}",
            item.kind.label(),
            Theme::DOT_SEPARATOR,
            item.source_path.display()
        ),
        _ => format!(
            "   {} folders {} {} items",
            catalog.len(),
            Theme::DOT_SEPARATOR,
            catalog.item_count()
        ),
    };
    let status = Line::from(Span::styled(
        status_text,
        Style::default().fg(Theme::GREY_500),
    ));

    let footer =
        Paragraph::new(vec![status, Line::from(spans)]).style(Theme::bg());
    frame.render_widget(footer, area);
}
