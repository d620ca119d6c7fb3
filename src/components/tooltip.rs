//! Tooltip placement above or below an anchor

use crate::layout::Rect;

/// Height of the tooltip's pointer arrow
pub const ARROW_HEIGHT: u16 = 8;

/// Side of the anchor the popup appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPosition {
    #[default]
    TopCenter,
    BottomCenter,
}

/// Offset of the popup from the anchor's edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipOffset {
    /// Popup's bottom edge sits this far above the anchor's bottom edge
    Bottom(u16),
    /// Popup's top edge sits this far below the anchor's top edge
    Top(u16),
}

/// Tooltip attached to an anchor element
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    content: String,
    position: TooltipPosition,

    /// Compensates for margins on the anchor
    margin_offset: u16,
}

impl Tooltip {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: TooltipPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_margin_offset(mut self, offset: u16) -> Self {
        self.margin_offset = offset;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> TooltipPosition {
        self.position
    }

    /// Offset for an anchor of the given height
    pub fn offset(&self, anchor_height: u16) -> TooltipOffset {
        let distance = anchor_height
            .saturating_add(ARROW_HEIGHT)
            .saturating_sub(self.margin_offset);
        match self.position {
            TooltipPosition::TopCenter => TooltipOffset::Bottom(distance),
            TooltipPosition::BottomCenter => TooltipOffset::Top(distance),
        }
    }

    /// Concrete popup bounds, centered on the anchor and kept inside the viewport
    pub fn popup_bounds(&self, anchor: Rect, size: (u16, u16), viewport: Rect) -> Rect {
        let (width, height) = size;
        let center = anchor.x.saturating_add(anchor.width / 2);
        let x = center.saturating_sub(width / 2);
        let y = match self.offset(anchor.height) {
            TooltipOffset::Bottom(distance) => {
                anchor.bottom().saturating_sub(distance.saturating_add(height))
            }
            TooltipOffset::Top(distance) => anchor.y.saturating_add(distance),
        };
        Rect::new(x, y, width, height).clamp_within(viewport)
    }
}
