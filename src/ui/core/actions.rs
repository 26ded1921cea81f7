use crate::toast::Variant;

/// Everything the showcase can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Toast operations
    AddToast(Variant),
    AddSticky,
    DismissNewest,
    ClearToasts,

    // Presenter defaults
    ToggleLayout,
    ToggleExpand,
    CyclePosition,
    CycleSize,
    IncreaseCap,
    DecreaseCap,

    // UI operations
    ToggleLogs,
    CycleIcons,

    // App control
    Quit,
    None,
}
