//! Full-screen item viewer
//!
//! Holds at most one item. Images and PDFs get mutually exclusive panes;
//! PDFs additionally carry a zoom level that resets on every open.
//!
//! Closing hides the viewer immediately but keeps the item around until the
//! close transition has finished, so the fading frame is never empty. The
//! deferred clear is a deadline checked by [`ModalViewer::tick`].

use crate::catalog::{CatalogItem, ItemKind};
use std::time::{Duration, Instant};

/// Default length of the close transition
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// PDF zoom level in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    percent: u16,
}

impl ZoomState {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 300;
    pub const STEP: u16 = 25;
    pub const DEFAULT: u16 = 100;

    pub fn percent(&self) -> u16 {
        self.percent
    }

    pub fn zoom_in(&mut self) -> bool {
        if self.percent >= Self::MAX {
            return false;
        }
        self.percent = (self.percent + Self::STEP).min(Self::MAX);
        true
    }

    pub fn zoom_out(&mut self) -> bool {
        if self.percent <= Self::MIN {
            return false;
        }
        self.percent = self.percent.saturating_sub(Self::STEP).max(Self::MIN);
        true
    }

    pub fn reset(&mut self) {
        self.percent = Self::DEFAULT;
    }

    pub fn at_min(&self) -> bool {
        self.percent <= Self::MIN
    }

    pub fn at_max(&self) -> bool {
        self.percent >= Self::MAX
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            percent: Self::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub item: Option<CatalogItem>,
}

/// Which content container is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Image,
    Pdf,
}

pub struct ModalViewer {
    state: ModalState,
    zoom: ZoomState,
    close_delay: Duration,
    clear_at: Option<Instant>,
}

impl Default for ModalViewer {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSE_DELAY)
    }
}

impl ModalViewer {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: ModalState::default(),
            zoom: ZoomState::default(),
            close_delay,
            clear_at: None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Item being shown, or still fading out
    pub fn item(&self) -> Option<&CatalogItem> {
        self.state.item.as_ref()
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    /// The visible pane while open. Never both.
    pub fn pane(&self) -> Option<Pane> {
        if !self.state.is_open {
            return None;
        }
        self.shown_pane()
    }

    /// Pane for the held item, including while it fades out after a close
    pub fn shown_pane(&self) -> Option<Pane> {
        self.state.item.as_ref().map(|item| match item.kind {
            ItemKind::Image => Pane::Image,
            ItemKind::Pdf => Pane::Pdf,
        })
    }

    /// Show `item`. An item without a source is ignored.
    pub fn open(&mut self, item: CatalogItem) -> bool {
        if !item.has_source() {
            tracing::debug!(title = %item.title, "open ignored, no source");
            return false;
        }
        tracing::debug!(source = %item.source_path.display(), kind = item.kind.label(), "modal opened");
        self.state.is_open = true;
        self.state.item = Some(item);
        self.zoom.reset();
        self.clear_at = None;
        true
    }

    pub fn close(&mut self) -> bool {
        self.close_at(Instant::now())
    }

    /// Hide the viewer; the item is dropped once `close_delay` has passed
    /// since `now`.
    pub fn close_at(&mut self, now: Instant) -> bool {
        if !self.state.is_open {
            return false;
        }
        self.state.is_open = false;
        self.clear_at = Some(now + self.close_delay);
        tracing::debug!("modal closed");
        true
    }

    /// Run the deferred clear if it is due
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.clear_at {
            if now >= deadline {
                self.clear_at = None;
                self.state.item = None;
            }
        }
    }

    fn pdf_open(&self) -> bool {
        self.pane() == Some(Pane::Pdf)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.pdf_open() && self.zoom.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.pdf_open() && self.zoom.zoom_out()
    }

    pub fn zoom_reset(&mut self) -> bool {
        if !self.pdf_open() {
            return false;
        }
        self.zoom.reset();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(title: &str) -> CatalogItem {
        CatalogItem::pdf(format!("Baumit/{}.pdf", title), title, "")
    }

    #[test]
    fn test_zoom_in_clamps_at_ceiling() {
        let mut zoom = ZoomState::default();
        for _ in 0..20 {
            zoom.zoom_in();
            assert!(zoom.percent() <= ZoomState::MAX);
        }
        assert_eq!(zoom.percent(), 300);
        assert!(zoom.at_max());
        assert!(!zoom.zoom_in());
    }

    #[test]
    fn test_zoom_out_clamps_at_floor() {
        let mut zoom = ZoomState::default();
        for _ in 0..20 {
            zoom.zoom_out();
            assert!(zoom.percent() >= ZoomState::MIN);
        }
        assert_eq!(zoom.percent(), 50);
        assert!(!zoom.zoom_out());
    }

    #[test]
    fn test_zoom_reset_after_any_sequence() {
        let mut zoom = ZoomState::default();
        for step in 0..37 {
            if step % 3 == 0 {
                zoom.zoom_out();
            } else {
                zoom.zoom_in();
            }
        }
        zoom.reset();
        assert_eq!(zoom.percent(), 100);
    }

    #[test]
    fn test_open_resets_zoom() {
        let mut modal = ModalViewer::default();
        modal.open(pdf("a"));
        modal.zoom_in();
        modal.zoom_in();
        assert_eq!(modal.zoom().percent(), 150);

        modal.open(pdf("b"));
        assert_eq!(modal.zoom().percent(), 100);
        assert_eq!(modal.item().unwrap().title, "b");
    }

    #[test]
    fn test_open_without_source_is_noop() {
        let mut modal = ModalViewer::default();
        let mut item = pdf("a");
        item.source_path = Default::default();
        assert!(!modal.open(item));
        assert_eq!(modal.state(), &ModalState::default());
    }

    #[test]
    fn test_panes_are_exclusive() {
        let mut modal = ModalViewer::default();
        assert_eq!(modal.pane(), None);

        modal.open(CatalogItem::image("a.jpg", "a", ""));
        assert_eq!(modal.pane(), Some(Pane::Image));

        modal.open(pdf("b"));
        assert_eq!(modal.pane(), Some(Pane::Pdf));
    }

    #[test]
    fn test_zoom_ignored_for_images() {
        let mut modal = ModalViewer::default();
        modal.open(CatalogItem::image("a.jpg", "a", ""));
        assert!(!modal.zoom_in());
        assert!(!modal.zoom_out());
        assert!(!modal.zoom_reset());
        assert_eq!(modal.zoom().percent(), 100);
    }

    #[test]
    fn test_close_defers_clearing_item() {
        let mut modal = ModalViewer::new(Duration::from_millis(300));
        let start = Instant::now();
        modal.open(pdf("a"));
        assert!(modal.close_at(start));

        assert!(!modal.is_open());
        assert_eq!(modal.pane(), None);
        assert_eq!(modal.shown_pane(), Some(Pane::Pdf));
        assert!(modal.item().is_some());

        modal.tick(start + Duration::from_millis(299));
        assert!(modal.item().is_some());

        modal.tick(start + Duration::from_millis(300));
        assert!(modal.item().is_none());
        assert_eq!(modal.shown_pane(), None);
        assert!(!modal.close_at(start));
    }

    #[test]
    fn test_reopen_cancels_pending_clear() {
        let mut modal = ModalViewer::new(Duration::from_millis(300));
        let start = Instant::now();
        modal.open(pdf("a"));
        modal.close_at(start);
        modal.open(pdf("b"));

        modal.tick(start + Duration::from_secs(5));
        assert!(modal.is_open());
        assert_eq!(modal.item().unwrap().title, "b");
    }

    #[test]
    fn test_zoom_does_nothing_when_closed() {
        let mut modal = ModalViewer::default();
        modal.open(pdf("a"));
        modal.close();
        assert!(!modal.zoom_out());
        assert_eq!(modal.zoom().percent(), 100);
    }
}
