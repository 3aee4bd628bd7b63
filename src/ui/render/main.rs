use crate::catalog::{CatalogItem, Filter, Folder, ItemKind};
use crate::navigator::ViewDescription;
use crate::ui::helpers::{scroll_offset, truncate};
use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.navigator.filter();
    let mut spans = vec![Span::raw("   ")];

    for (index, filter) in Filter::CYCLE.iter().enumerate() {
        let is_active = *filter == active;
        spans.push(Span::styled(
            format!(" {} ", index),
            if is_active {
                Style::default().fg(Theme::GREY_900).bg(Theme::ACCENT)
            } else {
                Theme::key()
            },
        ));
        spans.push(Span::styled(
            format!(" {}  ", filter.label()),
            if is_active {
                Style::default()
                    .fg(Theme::WHITE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Theme::text_muted()
            },
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Theme::bg());
    frame.render_widget(bar, area);
}

pub(super) fn render_main(frame: &mut Frame, area: Rect, app: &App) {
    let (title, lines) = match app.view() {
        ViewDescription::Folders { filter, folders } => (
            format!(" {} ", filter.label()),
            folder_lines(&folders, app.selected, area),
        ),
        ViewDescription::Contents { folder, items } => (
            format!(" {} ", folder.display_name),
            item_lines(items, app.selected, area),
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Theme::border())
        .style(Theme::bg());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

fn folder_lines<'a>(folders: &[&'a Folder], selected: usize, area: Rect) -> Vec<Line<'a>> {
    if folders.is_empty() {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                "   No folders in this category",
                Theme::text_dim(),
            )),
        ];
    }

    let height = visible_rows(area);
    let name_width = (area.width as usize).saturating_sub(40).clamp(12, 48);

    folders
        .iter()
        .enumerate()
        .skip(scroll_offset(selected, height))
        .take(height)
        .map(|(index, folder)| {
            let is_selected = index == selected;
            let marker = if is_selected {
                format!(" {} ", Theme::ARROW_RIGHT)
            } else {
                "   ".to_string()
            };
            let count = folder.items.len();
            let name = format!(
                "{:<width$}",
                truncate(&folder.display_name, name_width),
                width = name_width
            );

            Line::from(vec![
                Span::styled(marker, Style::default().fg(Theme::ACCENT)),
                Span::styled(
                    format!("{} ", Theme::FOLDER_ICON),
                    Style::default().fg(Theme::category_color(folder.category)),
                ),
                Span::styled(
                    name,
                    if is_selected {
                        Theme::selected()
                    } else {
                        Theme::text()
                    },
                ),
                Span::styled(
                    format!("  {:<12}", folder.category.as_str()),
                    Style::default().fg(Theme::category_color(folder.category)),
                ),
                Span::styled(
                    format!(
                        "{:>4} {}",
                        count,
                        if count == 1 { "item" } else { "items" }
                    ),
                    Theme::text_dim(),
                ),
            ])
        })
        .collect()
}

fn item_lines<'a>(items: &'a [CatalogItem], selected: usize, area: Rect) -> Vec<Line<'a>> {
    if items.is_empty() {
        return vec![
            Line::from(""),
            Line::from(Span::styled("   This folder is empty", Theme::text_dim())),
        ];
    }

    let height = visible_rows(area);
    let title_width = (area.width as usize).saturating_sub(12).clamp(12, 40);
    let desc_width = (area.width as usize).saturating_sub(title_width + 16);

    items
        .iter()
        .enumerate()
        .skip(scroll_offset(selected, height))
        .take(height)
        .map(|(index, item)| {
            let is_selected = index == selected;
            let marker = if is_selected {
                format!(" {} ", Theme::ARROW_RIGHT)
            } else {
                "   ".to_string()
            };
            let icon = match item.kind {
                ItemKind::Image => Theme::IMAGE_ICON,
                ItemKind::Pdf => Theme::PDF_ICON,
            };
            let title = format!(
                "{:<width$}",
                truncate(&item.title, title_width),
                width = title_width
            );

            Line::from(vec![
                Span::styled(marker, Style::default().fg(Theme::ACCENT)),
                Span::styled(format!("{} ", icon), Theme::text_muted()),
                Span::styled(
                    title,
                    if is_selected {
                        Theme::selected()
                    } else {
                        Theme::text()
                    },
                ),
                Span::styled(
                    format!("  {}", truncate(&item.description, desc_width)),
                    Theme::text_dim(),
                ),
            ])
        })
        .collect()
}
