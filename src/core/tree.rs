//! The fixed demo tree.
//!
//! Four overlapping 200x200 rectangles: a blue toplevel, red and green
//! children, and a yellow grandchild under green. Two place_below
//! directives pin the paint order afterwards, so re-runs always produce
//! the same stacking.

use wayland_client::QueueHandle;

use crate::core::errors::Result;
use crate::core::session::{DemoApp, Globals};
use crate::core::surface::Surface;

/// Side length shared by all four rectangles.
pub const SIZE: i32 = 200;

/// Slot indices into the plan and the built tree.
pub const ROOT: usize = 0;
pub const RED: usize = 1;
pub const GREEN: usize = 2;
pub const YELLOW: usize = 3;

/// Stacking overrides applied once the tree exists: each entry moves
/// `child` immediately below `sibling` in their parent's paint order.
/// Order matters; the compositor applies them as issued.
pub const STACKING: [(usize, usize); 2] = [(RED, GREEN), (GREEN, ROOT)];

/// One rectangle in the demo layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Index of the parent slot; `None` marks the toplevel.
    pub parent: Option<usize>,
    /// Offset from the parent's origin. Unused for the toplevel.
    pub offset: (i32, i32),
    /// ARGB8888 fill color.
    pub color: u32,
}

/// The demo layout, parents listed before their children.
pub fn plan() -> [Slot; 4] {
    [
        Slot {
            parent: None,
            offset: (0, 0),
            color: 0xff0000ff,
        },
        Slot {
            parent: Some(ROOT),
            offset: (-25, -25),
            color: 0xffff0000,
        },
        Slot {
            parent: Some(ROOT),
            offset: (25, 25),
            color: 0xff00ff00,
        },
        Slot {
            parent: Some(GREEN),
            offset: (25, 25),
            color: 0xffffff00,
        },
    ]
}

/// Build the four surfaces, apply the stacking overrides and re-commit
/// everything, deepest child first.
pub fn build(globals: &Globals, qh: &QueueHandle<DemoApp>) -> Result<Vec<Surface>> {
    let mut surfaces: Vec<Surface> = Vec::with_capacity(4);

    for slot in plan() {
        let surface = {
            let parent = slot.parent.map(|i| &surfaces[i]);
            Surface::create(
                globals,
                qh,
                parent,
                SIZE,
                SIZE,
                slot.offset.0,
                slot.offset.1,
                slot.color,
            )?
        };
        surfaces.push(surface);
    }

    // Red goes under green, then green goes under the root surface
    // itself, leaving the yellow grandchild painted over green.
    for (child, sibling) in STACKING {
        surfaces[child].place_below(&surfaces[sibling].surface);
    }
    tracing::info!("applied place_below overrides");

    // Flush the reordering together from the server's point of view.
    for surface in surfaces.iter().rev() {
        surface.commit();
    }

    Ok(surfaces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_exactly_one_toplevel() {
        let plan = plan();
        let toplevels: Vec<usize> = (0..plan.len()).filter(|&i| plan[i].parent.is_none()).collect();
        assert_eq!(toplevels, vec![ROOT]);
    }

    #[test]
    fn test_plan_parents_precede_children() {
        for (i, slot) in plan().iter().enumerate() {
            if let Some(parent) = slot.parent {
                assert!(parent < i, "slot {} references later parent {}", i, parent);
            }
        }
    }

    #[test]
    fn test_plan_offsets_and_colors() {
        let plan = plan();
        assert_eq!(plan[ROOT].color, 0xff0000ff);
        assert_eq!(plan[RED].offset, (-25, -25));
        assert_eq!(plan[RED].color, 0xffff0000);
        assert_eq!(plan[GREEN].offset, (25, 25));
        assert_eq!(plan[GREEN].color, 0xff00ff00);
        assert_eq!(plan[YELLOW].parent, Some(GREEN));
        assert_eq!(plan[YELLOW].offset, (25, 25));
        assert_eq!(plan[YELLOW].color, 0xffffff00);
    }

    #[test]
    fn test_stacking_only_reorders_subsurfaces() {
        let plan = plan();
        for (child, sibling) in STACKING {
            assert!(plan[child].parent.is_some(), "only subsurfaces can be restacked");
            assert!(sibling < plan.len());
        }
    }
}
