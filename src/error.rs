//! Error types for structural misuse of widgets
//!
//! These errors signal a programming mistake by the integrating application
//! (an item id from another widget, an empty rating scale, ...). User input
//! never produces them.

use thiserror::Error;

/// Errors raised when a widget is constructed or wired incorrectly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// An item id that does not belong to this widget instance
    #[error("{widget} has no item {id}")]
    UnknownItem { widget: &'static str, id: String },

    /// An option index past the end of a select list
    #[error("select has {len} options, index {index} is out of range")]
    UnknownOption { index: usize, len: usize },

    /// A rating scale with no items
    #[error("rating must have at least one item")]
    EmptyRating,

    /// A calendar without any selectable year
    #[error("calendar year list must not be empty")]
    EmptyYearList,

    /// A toast countdown that would never tick
    #[error("toast duration must be greater than zero")]
    ZeroDuration,

    /// A configuration value outside its valid range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
