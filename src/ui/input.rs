//! Pointer button policy: which presses paint, and in which direction

use egui::PointerButton;

use crate::terrain::brush::StrokeDirection;

/// Direction for a button press, `None` for buttons that do not paint
///
/// Primary raises and secondary lowers. Holding the invert modifier (Shift)
/// swaps the two.
pub const fn stroke_direction(button: PointerButton, invert: bool) -> Option<StrokeDirection> {
    let direction = match button {
        PointerButton::Primary => StrokeDirection::Raise,
        PointerButton::Secondary => StrokeDirection::Lower,
        _ => return None,
    };
    Some(if invert {
        direction.inverted()
    } else {
        direction
    })
}

/// A painting press read from one frame of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintPress {
    /// Pointer position in screen coordinates
    pub position: [f32; 2],
    /// Resolved stroke direction
    pub direction: StrokeDirection,
}

/// Extract the first painting press from a frame's input
pub fn read_press(input: &egui::InputState) -> Option<PaintPress> {
    let position = input.pointer.interact_pos()?;
    let invert = input.modifiers.shift;
    [PointerButton::Primary, PointerButton::Secondary]
        .into_iter()
        .filter(|&button| input.pointer.button_pressed(button))
        .find_map(|button| stroke_direction(button, invert))
        .map(|direction| PaintPress {
            position: [position.x, position.y],
            direction,
        })
}
