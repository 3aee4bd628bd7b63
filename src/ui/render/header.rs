use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let logo = Line::from(vec![Span::styled(
        format!("   {}", Theme::FOLIO_LOGO),
        Style::default()
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD),
    )]);

    let mut crumbs = vec![Span::styled("portfolio", Style::default().fg(Theme::GREY_400))];
    if let Some(folder) = app.navigator.current_folder() {
        crumbs.push(Span::styled(
            format!(" {} ", Theme::ARROW_RIGHT),
            Style::default().fg(Theme::GREY_500),
        ));
        crumbs.push(Span::styled(
            folder.display_name.clone(),
            Style::default().fg(Theme::GREY_100),
        ));
    }
    crumbs.push(Span::raw("   "));

    let header = Paragraph::new(vec![Line::from(""), logo]).style(Theme::bg());
    frame.render_widget(header, area);

    let breadcrumb = Paragraph::new(vec![Line::from(""), Line::from(crumbs)])
        .alignment(Alignment::Right)
        .style(Theme::bg());
    // Drawn over the right-hand side of the logo row; the logo is short
    let half = area.width / 2;
    let right = Rect {
        x: area.x + half,
        y: area.y,
        width: area.width - half,
        height: area.height,
    };
    frame.render_widget(breadcrumb, right);
}
