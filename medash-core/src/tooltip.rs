//! Tooltip placement.

use serde::{Deserialize, Serialize};

/// A bounding box in CSS pixels, viewport-relative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Document-relative position of the overlay's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

impl Placement {
    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }
}

/// Look and spacing of the tooltip overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipStyle {
    pub id: String,
    pub class: String,
    /// Space between the overlay's bottom edge and the anchor
    pub gap_px: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            id: "tooltip".to_string(),
            class: "absolute z-50 px-2 py-1 text-xs text-white bg-gray-800 rounded shadow-lg"
                .to_string(),
            gap_px: 5.0,
        }
    }
}

/// Place an overlay of `tooltip_height` directly above `anchor`, left edges
/// aligned, `gap` pixels clear of it. `scroll` is the page offset `(x, y)`,
/// added because the overlay is positioned against the document.
pub fn place_above(anchor: Rect, tooltip_height: f64, gap: f64, scroll: (f64, f64)) -> Placement {
    Placement {
        left: anchor.left + scroll.0,
        top: anchor.top + scroll.1 - tooltip_height - gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Rect = Rect {
        left: 40.0,
        top: 200.0,
        width: 120.0,
        height: 24.0,
    };

    #[test]
    fn sits_above_with_gap() {
        let placement = place_above(ANCHOR, 18.0, 5.0, (0.0, 0.0));
        assert_eq!(placement, Placement { left: 40.0, top: 177.0 });
        assert_eq!(placement.left_px(), "40px");
        assert_eq!(placement.top_px(), "177px");
    }

    #[test]
    fn never_overlaps_anchor() {
        for height in [0.0, 12.5, 18.0, 64.0] {
            let placement = place_above(ANCHOR, height, 5.0, (0.0, 0.0));
            assert!(placement.top + height < ANCHOR.top);
            assert_eq!(ANCHOR.top - (placement.top + height), 5.0);
        }
    }

    #[test]
    fn scroll_offset_moves_into_document_space() {
        let placement = place_above(ANCHOR, 18.0, 5.0, (10.0, 300.0));
        assert_eq!(placement, Placement { left: 50.0, top: 477.0 });
    }
}
