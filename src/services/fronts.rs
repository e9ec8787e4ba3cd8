//! Door and drawer front subdivision.
//!
//! A cabinet's opening is split into fronts the same way for the BOM and the
//! front view, so panel sizes and drawn rectangles always match.

use crate::models::{CabinetUnit, FrontKind};
use crate::services::dimensions::non_negative;

/// Side of a door that carries the hinges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HingeSide {
    /// Hinged on the left edge
    Left,
    /// Hinged on the right edge
    Right,
}

/// One front, positioned relative to the cabinet's bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontSlot {
    /// Door or drawer
    pub kind: FrontKind,
    /// Offset from the cabinet's left edge
    pub x_offset: f64,
    /// Offset from the cabinet's bottom edge
    pub y_offset: f64,
    /// Front width
    pub width: f64,
    /// Front height
    pub height: f64,
    /// Hinged edge (doors only)
    pub hinge_side: Option<HingeSide>,
}

/// Splits a cabinet opening into door or drawer fronts.
///
/// Drawers stack vertically: `drawer_height = round(body_height / n)`, each
/// front `width - gap` by `drawer_height - gap`. Doors sit side by side:
/// `door_width = round((width - gap) / n)`, each `body_height - gap` tall.
/// Returns nothing when `door_count` is zero.
#[must_use]
pub fn front_slots(unit: &CabinetUnit, body_height: f64, door_gap: f64) -> Vec<FrontSlot> {
    let count = unit.door_count;
    if count == 0 {
        return Vec::new();
    }
    let n = f64::from(count);
    let half_gap = door_gap / 2.0;

    if unit.is_drawer {
        let drawer_height = (body_height / n).round();
        (0..count)
            .map(|i| FrontSlot {
                kind: FrontKind::Drawer,
                x_offset: half_gap,
                y_offset: half_gap + f64::from(i) * drawer_height,
                width: non_negative(unit.width_mm - door_gap),
                height: non_negative(drawer_height - door_gap),
                hinge_side: None,
            })
            .collect()
    } else {
        let door_width = non_negative(((unit.width_mm - door_gap) / n).round());
        (0..count)
            .map(|i| FrontSlot {
                kind: FrontKind::Door,
                x_offset: half_gap + f64::from(i) * door_width,
                y_offset: half_gap,
                width: door_width,
                height: non_negative(body_height - door_gap),
                hinge_side: Some(hinge_side(i, count)),
            })
            .collect()
    }
}

/// Left half of a door bank hinges left, right half hinges right.
fn hinge_side(index: u32, count: u32) -> HingeSide {
    if count == 1 || index < count / 2 {
        HingeSide::Left
    } else {
        HingeSide::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_door_split() {
        let unit = CabinetUnit::new(0.0, 800.0, 2);
        let slots = front_slots(&unit, 720.0, 4.0);
        assert_eq!(slots.len(), 2);
        assert!((slots[0].width - 398.0).abs() < f64::EPSILON);
        assert!((slots[0].x_offset - 2.0).abs() < f64::EPSILON);
        assert!((slots[1].x_offset - 400.0).abs() < f64::EPSILON);
        assert!((slots[0].height - 716.0).abs() < f64::EPSILON);
        assert_eq!(slots[0].hinge_side, Some(HingeSide::Left));
        assert_eq!(slots[1].hinge_side, Some(HingeSide::Right));
    }

    #[test]
    fn test_three_drawer_split() {
        let unit = CabinetUnit::drawer(0.0, 600.0, 3);
        let slots = front_slots(&unit, 720.0, 4.0);
        assert_eq!(slots.len(), 3);
        for slot in &slots {
            assert_eq!(slot.kind, FrontKind::Drawer);
            assert!((slot.height - 236.0).abs() < f64::EPSILON);
            assert!((slot.width - 596.0).abs() < f64::EPSILON);
        }
        assert!((slots[0].y_offset - 2.0).abs() < f64::EPSILON);
        assert!((slots[1].y_offset - 242.0).abs() < f64::EPSILON);
        assert!((slots[2].y_offset - 482.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_doors() {
        let unit = CabinetUnit::new(0.0, 700.0, 0);
        assert!(front_slots(&unit, 720.0, 4.0).is_empty());
    }

    #[test]
    fn test_single_door_hinges_left() {
        let unit = CabinetUnit::new(0.0, 450.0, 1);
        let slots = front_slots(&unit, 720.0, 4.0);
        assert_eq!(slots[0].hinge_side, Some(HingeSide::Left));
        assert!((slots[0].width - 446.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tiny_cabinet_never_negative() {
        let unit = CabinetUnit::drawer(0.0, 2.0, 4);
        let slots = front_slots(&unit, 8.0, 4.0);
        assert!(slots.iter().all(|s| s.width >= 0.0 && s.height >= 0.0));
    }
}
