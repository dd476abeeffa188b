//! The pointer edit mode.

/// What a pointer-down on a cell does.
///
/// Transitions are explicit commands only ([`Session::set_mode`]); nothing
/// switches the mode automatically.
///
/// [`Session::set_mode`]: crate::Session::set_mode
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Pointer-down relocates the start cell.
    PlacingStart,
    /// Pointer-down relocates the finish cell.
    PlacingEnd,
    /// Pointer-down toggles walls; dragging paints them.
    #[default]
    DrawingWalls,
}
