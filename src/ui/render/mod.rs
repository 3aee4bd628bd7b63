mod footer;
mod header;
mod main;
mod overlays;
mod toast;

use crate::ui::theme::Theme;
use crate::ui::{App, Overlay};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use footer::render_footer;
use header::render_header;
use main::{render_filter_bar, render_main};
use overlays::{render_help, render_viewer};
use toast::render_toast;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Clear with dark background
    frame.render_widget(Block::default().style(Theme::bg()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (logo + breadcrumb)
            Constraint::Length(2), // Filter bar
            Constraint::Min(5),    // Folder or item list
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);
    render_filter_bar(frame, layout[1], app);
    render_main(frame, layout[2], app);
    render_footer(frame, layout[3], app);

    // Viewer stays drawn (dimmed) until its deferred clear runs
    if let Some(item) = app.modal.item() {
        render_viewer(frame, app, item);
    }

    if let Overlay::Help { scroll } = &app.overlay {
        render_help(frame, *scroll);
    }

    if let Some(toast) = &app.toast {
        render_toast(frame, toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, CatalogItem, Filter, Folder};
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use std::time::Instant;

    fn app() -> App {
        let catalog = Catalog::from_folders(vec![
            Folder::new(
                "baumit",
                "Baumit",
                Category::Industrial,
                vec![
                    CatalogItem::image("Baumit/overview.jpg", "Plant overview", "Steelwork"),
                    CatalogItem::pdf("Baumit/Group FD/BFY-FD-A1B119-0.pdf", "BFY-FD-A1B119", ""),
                ],
            ),
            Folder::new(
                "cv",
                "Curriculum Vitae",
                Category::Docs,
                vec![CatalogItem::pdf("cv.pdf", "CV", "")],
            ),
        ])
        .unwrap();
        App::new(Arc::new(catalog), &Config::default())
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_folder_view_hides_docs_under_all() {
        let screen = draw(&app());
        assert!(screen.contains("Baumit"));
        assert!(!screen.contains("Curriculum Vitae"));
    }

    #[test]
    fn test_docs_filter_shows_docs() {
        let mut app = app();
        app.set_filter(Filter::Only(Category::Docs));
        let screen = draw(&app);
        assert!(screen.contains("Curriculum Vitae"));
        assert!(!screen.contains("Baumit "));
    }

    #[test]
    fn test_contents_view_lists_items() {
        let mut app = app();
        app.activate();
        let screen = draw(&app);
        assert!(screen.contains("Plant overview"));
        assert!(screen.contains("BFY-FD-A1B119"));
    }

    #[test]
    fn test_pdf_viewer_shows_zoom() {
        let mut app = app();
        app.activate();
        app.select_next();
        app.activate();
        app.zoom_out();
        let screen = draw(&app);
        assert!(screen.contains("75%"));
    }

    #[test]
    fn test_closing_viewer_keeps_content_until_cleared() {
        let mut app = app();
        app.activate();
        app.select_next();
        app.activate();
        app.zoom_out();

        let start = Instant::now();
        app.modal.close_at(start);
        let screen = draw(&app);
        assert!(screen.contains("PDF document"));
        assert!(screen.contains("75%"));

        app.tick(start + Config::default().close_delay());
        let screen = draw(&app);
        assert!(!screen.contains("PDF document"));
    }

    #[test]
    fn test_image_viewer_has_no_zoom() {
        let mut app = app();
        app.activate();
        app.activate();
        let screen = draw(&app);
        assert!(screen.contains("Plant overview"));
        assert!(!screen.contains("100%"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = app();
        app.toggle_help();
        let screen = draw(&app);
        assert!(screen.contains("Keys"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.activate();
        app.activate();
        app.toggle_help();
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
    }
}
