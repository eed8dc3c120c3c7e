//! Tooltip placement for highlighted onboarding steps.
//!
//! Pure geometry: given a step's position hint, the bounding box of the
//! element it highlights, and the viewport size, compute where the tooltip
//! is anchored. Coordinates are viewport pixels with the origin top-left.

use crate::step::StepPosition;

/// Gap between the highlighted element and its tooltip.
pub const TOOLTIP_OFFSET: f64 = 20.0;

/// Padding added around the highlighted element for its outline.
pub const HIGHLIGHT_PADDING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Where the tooltip is anchored.
///
/// Each variant names the edge distance that pins the tooltip plus the axis
/// it is centered on; e.g. `Above { bottom, center_x }` means the tooltip's
/// bottom edge sits `bottom` pixels above the viewport's bottom edge and it
/// is horizontally centered on `center_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipPlacement {
    /// Centered in the viewport.
    Centered,
    Above { bottom: f64, center_x: f64 },
    Below { top: f64, center_x: f64 },
    LeftOf { right: f64, center_y: f64 },
    RightOf { left: f64, center_y: f64 },
}

/// Computes the tooltip anchor for a step.
///
/// Falls back to `Centered` when there is no highlighted element, no
/// position hint, or the hint is `Center`.
pub fn tooltip_placement(
    position: Option<StepPosition>,
    target: Option<Rect>,
    viewport: Viewport,
) -> TooltipPlacement {
    let (Some(position), Some(rect)) = (position, target) else {
        return TooltipPlacement::Centered;
    };

    match position {
        StepPosition::Center => TooltipPlacement::Centered,
        StepPosition::Top => TooltipPlacement::Above {
            bottom: viewport.height - rect.top + TOOLTIP_OFFSET,
            center_x: rect.center_x(),
        },
        StepPosition::Bottom => TooltipPlacement::Below {
            top: rect.bottom() + TOOLTIP_OFFSET,
            center_x: rect.center_x(),
        },
        StepPosition::Left => TooltipPlacement::LeftOf {
            right: viewport.width - rect.left + TOOLTIP_OFFSET,
            center_y: rect.center_y(),
        },
        StepPosition::Right => TooltipPlacement::RightOf {
            left: rect.right() + TOOLTIP_OFFSET,
            center_y: rect.center_y(),
        },
    }
}

/// The outline drawn around a highlighted element.
pub fn highlight_outline(target: Rect) -> Rect {
    Rect::new(
        target.left - HIGHLIGHT_PADDING,
        target.top - HIGHLIGHT_PADDING,
        target.width + 2.0 * HIGHLIGHT_PADDING,
        target.height + 2.0 * HIGHLIGHT_PADDING,
    )
}
