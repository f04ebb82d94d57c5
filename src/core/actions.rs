#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    // File
    OpenFile,
    Quit,

    // Clean
    ClearLinesContaining,
    ClearEmptyLines,

    // Configuration
    ManageShades,

    // View
    ToggleShortcuts,
}
