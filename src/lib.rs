//! mkwidgets - headless interactive widgets for terminal and native UIs
//!
//! State machines for the widgets a form-heavy interface needs, with the
//! drawing left to the host:
//! - Accordion, select and rating with roving keyboard focus
//! - Calendar month grid with month/year pickers
//! - Auto-dismissing toast with a virtual countdown
//! - Modal dialog and tooltip placement
//!
//! Input arrives as [`Event`]s, converted from crossterm (`tui` feature) or
//! winit (`gui` feature). Time never advances on its own: hosts feed
//! elapsed time into timers such as [`ToastTimer`].

pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod focus;
pub mod layout;

// Re-export commonly used types
pub use components::{
    Accordion, AccordionItemId, AccordionMode, Calendar, CalendarCell, CellPlacement, Dialog,
    DialogPart, Rating, RatingSelection, Select, SelectOption, SelectTarget, SelectValue, Toast,
    ToastPosition, ToastTimer, ToastTimerState, Tooltip, TooltipOffset, TooltipPosition,
};
pub use config::WidgetConfig;
pub use error::{Result, WidgetError};
pub use event::{Event, EventHandler, Key, MouseButton, MouseEvent};
pub use focus::{FocusDirection, FocusKey, RovingFocusRegistry};
pub use layout::Rect;
