//! Built-in widgets

pub mod accordion;
pub mod calendar;
pub mod dialog;
pub mod rating;
pub mod select;
pub mod toast;
pub mod tooltip;

pub use accordion::{Accordion, AccordionItemId, AccordionMode};
pub use calendar::{Calendar, CalendarCell, CellPlacement};
pub use dialog::{Dialog, DialogPart};
pub use rating::{Rating, RatingSelection};
pub use select::{Select, SelectOption, SelectTarget, SelectValue};
pub use toast::{Toast, ToastPosition, ToastTimer, ToastTimerState};
pub use tooltip::{Tooltip, TooltipOffset, TooltipPosition};
