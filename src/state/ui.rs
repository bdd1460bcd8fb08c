#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-wide UI state.
///
/// The dark-mode flag is the only widget state another widget can read;
/// everything else keeps its state local to its component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
