//! Dialog - modal overlay dismissed by clicking its backdrop
//!
//! The overlay covers the whole viewport and the content box sits centered
//! on top of it. Only a press whose target is the overlay itself closes the
//! dialog; presses anywhere inside the content never do.

use crate::config::DialogConfig;
use crate::event::{Event, EventHandler, Key, MouseButton, MouseEvent};
use crate::layout::Rect;

/// Close callback
pub type OnClose = Box<dyn FnMut()>;

/// Which part of an open dialog a pointer event landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPart {
    /// The backdrop covering the viewport
    Overlay,
    /// The dialog box or any of its descendants
    Content,
}

/// Modal dialog state
pub struct Dialog {
    open: bool,
    viewport: Rect,
    content_size: (u16, u16),
    close_on_escape: bool,
    on_close: Option<OnClose>,
}

impl std::fmt::Debug for Dialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialog")
            .field("open", &self.open)
            .field("viewport", &self.viewport)
            .field("content_size", &self.content_size)
            .field("close_on_escape", &self.close_on_escape)
            .finish()
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog {
    /// Create a closed dialog
    pub fn new() -> Self {
        Self {
            open: false,
            viewport: Rect::default(),
            content_size: (40, 10),
            close_on_escape: false,
            on_close: None,
        }
    }

    pub fn from_config(config: &DialogConfig) -> Self {
        Self::new()
            .with_content_size(config.width, config.height)
            .with_close_on_escape(config.close_on_escape)
    }

    pub fn with_content_size(mut self, width: u16, height: u16) -> Self {
        self.content_size = (width, height);
        self
    }

    /// Also close on Esc (off by default)
    pub fn with_close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Set close callback
    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Area the overlay covers, used for pointer hit testing
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Owner-driven visibility
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    /// Close the dialog; returns false if it was already closed
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        tracing::debug!("dialog closed");
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
        true
    }

    /// Close button pressed
    pub fn close_button(&mut self) -> bool {
        self.close()
    }

    /// Bounds of the content box inside the viewport
    pub fn content_bounds(&self) -> Rect {
        let (width, height) = self.content_size;
        self.viewport.centered(width, height)
    }

    /// Which part of the dialog sits under a point
    pub fn hit_test(&self, col: u16, row: u16) -> Option<DialogPart> {
        if !self.open {
            return None;
        }
        if self.content_bounds().contains(col, row) {
            Some(DialogPart::Content)
        } else if self.viewport.contains(col, row) {
            Some(DialogPart::Overlay)
        } else {
            None
        }
    }

    /// Pointer press on a known target; only the overlay dismisses
    pub fn click(&mut self, target: DialogPart) -> bool {
        match target {
            DialogPart::Overlay => self.close(),
            DialogPart::Content => false,
        }
    }
}

impl EventHandler for Dialog {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.open {
            return false;
        }

        match event {
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) => {
                if let Some(target) = self.hit_test(*col, *row) {
                    self.click(target);
                }
            }
            Event::Key(Key::Esc) if self.close_on_escape => {
                self.close();
            }
            _ => {}
        }

        // Modal: nothing behind an open dialog sees input
        true
    }
}
