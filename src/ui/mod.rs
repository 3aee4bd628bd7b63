//! Folio UI - a two-level portfolio browser
//!
//! Layout:
//! ╔══════════════════════════════════════════════════════════════╗
//! ║  F O L I O                         portfolio › Baumit        ║
//! ╠══════════════════════════════════════════════════════════════╣
//! ║  0 All Projects  1 Industrial  2 Canopies  3 Schools  4 CV   ║
//! ╠══════════════════════════════════════════════════════════════╣
//! ║  ▸ ▣ Baumit                industrial            13 items    ║
//! ║    ▣ CimCoop               industrial            13 items    ║
//! ║    ▣ MFG - General         canopy                 1 item     ║
//! ╠══════════════════════════════════════════════════════════════╣
//! ║  ↵ open  0-4 filter  esc back  ? help  q quit                ║
//! ╚══════════════════════════════════════════════════════════════╝
//!
//! `App` owns the navigator and the modal viewer. Its methods are the
//! only way key handling touches either of them.

pub mod helpers;
pub mod render;
pub mod theme;

pub use render::render;

use crate::catalog::{Catalog, CatalogItem, Filter};
use crate::config::Config;
use crate::modal::ModalViewer;
use crate::navigator::{Navigator, NavigatorState, View, ViewDescription};
use crate::opener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Overlay state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help {
        scroll: usize,
    },
}

/// Toast notification kind - affects duration and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

/// Toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: &str, kind: ToastKind, base: Duration, now: Instant) -> Self {
        // Errors stay longer
        let duration = match kind {
            ToastKind::Error => base * 2,
            _ => base,
        };
        Self {
            message: message.to_string(),
            kind,
            created_at: now,
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.created_at))
            .as_secs()
    }
}

/// Main application state for folio
pub struct App {
    pub navigator: Navigator,
    pub modal: ModalViewer,
    pub media_root: Option<PathBuf>,

    // UI state
    pub selected: usize,
    pub overlay: Overlay,
    pub toast: Option<Toast>,
    pub toast_duration: Duration,
    pub should_quit: bool,

    /// Folder-view selection to restore when leaving a folder
    folder_cursor: usize,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        let state = NavigatorState::with_filter(config.default_filter);
        Self {
            navigator: Navigator::with_state(catalog, state),
            modal: ModalViewer::new(config.close_delay()),
            media_root: config.media_root.clone(),
            selected: 0,
            overlay: Overlay::None,
            toast: None,
            toast_duration: config.toast_duration(),
            should_quit: false,
            folder_cursor: 0,
        }
    }

    pub fn view(&self) -> ViewDescription<'_> {
        self.navigator.render()
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  SELECTION
    // ═══════════════════════════════════════════════════════════════════════

    fn entry_count(&self) -> usize {
        self.view().len()
    }

    pub fn select_next(&mut self) {
        let count = self.entry_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.entry_count().saturating_sub(1);
    }

    /// Item under the cursor in the contents view
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        match self.view() {
            ViewDescription::Contents { items, .. } => items.get(self.selected),
            ViewDescription::Folders { .. } => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  TRANSITIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Enter the folder under the cursor, or open the item under it
    pub fn activate(&mut self) {
        let target = match self.view() {
            ViewDescription::Folders { folders, .. } => folders
                .get(self.selected)
                .map(|f| Activation::Folder(f.id.clone())),
            ViewDescription::Contents { items, .. } => {
                items.get(self.selected).cloned().map(Activation::Item)
            }
        };

        match target {
            Some(Activation::Folder(id)) => self.open_folder(&id),
            Some(Activation::Item(item)) => self.open_item(item),
            None => {}
        }
    }

    pub fn open_folder(&mut self, id: &str) {
        if self.navigator.open_folder(id) {
            self.folder_cursor = self.selected;
            self.selected = 0;
        }
    }

    pub fn open_item(&mut self, item: CatalogItem) {
        self.modal.open(item);
    }

    pub fn close_item(&mut self) {
        self.modal.close();
    }

    pub fn go_back(&mut self) {
        if self.navigator.go_back() {
            let count = self.entry_count();
            self.selected = self.folder_cursor.min(count.saturating_sub(1));
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.navigator.set_filter(filter);
        self.selected = 0;
        self.folder_cursor = 0;
        if self.view().is_empty() {
            self.show_toast(&format!("No folders under {}", filter.label()), ToastKind::Info);
        }
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.navigator.filter().next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.navigator.filter().prev());
    }

    /// Unwind one level: help, then the viewer, then the open folder
    pub fn escape(&mut self) {
        if self.overlay != Overlay::None {
            self.close_overlay();
        } else if self.modal.is_open() {
            self.close_item();
        } else if self.navigator.view() == View::Contents {
            self.go_back();
        }
    }

    /// Quit, unless the viewer is open, in which case just close it
    pub fn quit(&mut self) {
        if self.modal.is_open() {
            self.close_item();
        } else {
            self.should_quit = true;
        }
    }

    pub fn zoom_in(&mut self) {
        self.modal.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.modal.zoom_out();
    }

    pub fn zoom_reset(&mut self) {
        self.modal.zoom_reset();
    }

    /// Hand the open item to the system viewer
    pub fn open_external(&mut self) {
        let Some(item) = self.modal.item().filter(|_| self.modal.is_open()) else {
            return;
        };
        let path = opener::resolve(self.media_root.as_deref(), item);
        match opener::open_path(&path) {
            Ok(()) => self.show_toast("Opening in your viewer...", ToastKind::Success),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "external open failed");
                self.show_toast(&err.to_string(), ToastKind::Error);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  OVERLAYS & TOASTS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help { .. } => Overlay::None,
            Overlay::None => Overlay::Help { scroll: 0 },
        };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn overlay_scroll_down(&mut self) {
        if let Overlay::Help { scroll } = &mut self.overlay {
            *scroll += 1;
        }
    }

    pub fn overlay_scroll_up(&mut self) {
        if let Overlay::Help { scroll } = &mut self.overlay {
            *scroll = scroll.saturating_sub(1);
        }
    }

    /// Show a toast, replacing any that is already up
    pub fn show_toast(&mut self, message: &str, kind: ToastKind) {
        self.toast = Some(Toast::new(message, kind, self.toast_duration, Instant::now()));
    }

    /// Advance timers: deferred viewer clearing and toast expiry
    pub fn tick(&mut self, now: Instant) {
        self.modal.tick(now);
        if self.toast.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.toast = None;
        }
    }
}

enum Activation {
    Folder(String),
    Item(CatalogItem),
}
