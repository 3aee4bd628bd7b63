use crate::catalog::CatalogItem;
use crate::modal::{Pane, ZoomState};
use crate::opener;
use crate::ui::helpers::{centered_rect, truncate, wrap_text};
use crate::ui::theme::{range_gauge, Theme};
use crate::ui::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Full-screen item viewer. While the close transition runs the frame is
/// drawn dimmed with the same content.
pub(super) fn render_viewer(frame: &mut Frame, app: &App, item: &CatalogItem) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let fading = !app.modal.is_open();
    let inner_width = area.width.saturating_sub(6) as usize;
    let mut lines: Vec<Line> = vec![Line::from("")];

    match app.modal.shown_pane().unwrap_or(Pane::Image) {
        Pane::Pdf => render_pdf_pane(&mut lines, app.modal.zoom(), item, inner_width),
        Pane::Image => render_image_pane(&mut lines, item, inner_width),
    }

    if !item.description.is_empty() {
        lines.push(Line::from(""));
        for line in wrap_text(&item.description, inner_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", line),
                Theme::text(),
            )));
        }
    }

    lines.push(Line::from(""));
    let location = opener::resolve(app.media_root.as_deref(), item);
    lines.push(Line::from(vec![
        Span::styled("  source  ", Theme::text_dim()),
        Span::styled(
            truncate(&location.display().to_string(), inner_width.saturating_sub(10)),
            Theme::text_muted(),
        ),
    ]));

    let border = if fading {
        Style::default().fg(Theme::GREY_600)
    } else {
        Style::default().fg(Theme::ACCENT)
    };
    let block = Block::default()
        .title(format!(" {} ", item.title))
        .title_style(if fading {
            Theme::text_dim()
        } else {
            Theme::title()
        })
        .borders(Borders::ALL)
        .border_style(border)
        .style(Theme::panel_bg());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_pdf_pane(lines: &mut Vec<Line>, zoom: ZoomState, item: &CatalogItem, width: usize) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {} ", Theme::PDF_ICON), Theme::text_muted()),
        Span::styled(
            "PDF document",
            Style::default()
                .fg(Theme::GREY_100)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    let gauge_width = width.saturating_sub(24).min(30);
    let dim_if = |disabled: bool| {
        if disabled {
            Style::default().fg(Theme::GREY_600)
        } else {
            Theme::key()
        }
    };
    lines.push(Line::from(vec![
        Span::styled("  zoom  ", Theme::text_dim()),
        Span::styled(" - ", dim_if(zoom.at_min())),
        Span::raw(" "),
        Span::styled(
            range_gauge(zoom.percent(), ZoomState::MIN, ZoomState::MAX, gauge_width),
            Style::default().fg(Theme::ACCENT),
        ),
        Span::raw(" "),
        Span::styled(" + ", dim_if(zoom.at_max())),
        Span::styled(
            format!("  {:>3}%", zoom.percent()),
            Style::default()
                .fg(Theme::WHITE)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(thumbnail) = &item.thumbnail_path {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  preview ", Theme::text_dim()),
            Span::styled(
                truncate(&thumbnail.display().to_string(), width.saturating_sub(10)),
                Theme::text_muted(),
            ),
        ]));
    }
}

fn render_image_pane(lines: &mut Vec<Line>, item: &CatalogItem, width: usize) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {} ", Theme::IMAGE_ICON), Theme::text_muted()),
        Span::styled(
            "Image",
            Style::default()
                .fg(Theme::GREY_100)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    let name = item
        .source_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    lines.push(Line::from(Span::styled(
        format!("  {}", truncate(&name, width)),
        Theme::text_muted(),
    )));
}

const HELP_ROWS: &[(&str, &str)] = &[
    ("↑ ↓  j k", "move selection"),
    ("Home End", "first / last"),
    ("Enter", "open folder or item"),
    ("Esc", "close viewer, then leave folder"),
    ("Backspace h", "leave folder"),
    ("0 - 4", "all / industrial / canopies / schools / cv"),
    ("Tab S-Tab", "next / previous filter"),
    ("+ - r", "zoom in / out / reset (PDF)"),
    ("o", "open the file in your system viewer"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub(super) fn render_help(frame: &mut Frame, scroll: usize) {
    let area: Rect = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Keys", Theme::title())),
        Line::from(""),
    ];
    for (keys, action) in HELP_ROWS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Style::default().fg(Theme::WHITE)),
            Span::styled(*action, Theme::text_muted()),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Theme::GREY_100))
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .style(Theme::panel_bg());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}
