//! Constants used throughout the application
//!
//! This module centralizes default values, UI text, and other constant values
//! to improve maintainability and consistency.

// Toast defaults
pub const TOAST_ID_PREFIX: &str = "bong-toast-";
/// Auto-dismiss duration used when neither the toast nor the presenter sets one
pub const DEFAULT_DURATION_MS: u64 = 4000;
pub const DEFAULT_MAX_VISIBLE: usize = 5;
pub const DEFAULT_BORDER_RADIUS: u16 = 14;
pub const DEFAULT_SPRING_STIFFNESS: f32 = 400.0;
pub const DEFAULT_SPRING_DAMPING: f32 = 25.0;
pub const DEFAULT_SPRING_MASS: f32 = 0.8;

// Config limits
pub const MAX_VISIBLE_LIMIT: usize = 20;
/// Longest default duration accepted in config (10 minutes)
pub const MAX_DURATION_MS: u64 = 600_000;

// Toast widths in columns, per size
pub const TOAST_WIDTH_SMALL: u16 = 32;
pub const TOAST_WIDTH_MEDIUM: u16 = 44;
pub const TOAST_WIDTH_LARGE: u16 = 56;

// Showcase messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const SHOWCASE_TITLE: &str = " bongtoast showcase ";
pub const LOG_PANEL_TITLE: &str = " Logs - press 'l' to close ";

// Installer
pub const INSTALLER_NAME: &str = "create-bong-toast";
pub const GLOBALS_CSS_PATH: &str = "src/app/globals.css";
pub const TEMPLATE_COMPONENTS_DIR: &str = "src/components";
pub const COMPONENT_EXTENSION: &str = "tsx";
/// Packages the installed component imports
pub const INSTALL_DEPENDENCIES: &[&str] = &[
    "@radix-ui/react-separator",
    "@radix-ui/react-slot",
    "class-variance-authority",
    "clsx",
    "lucide-react",
    "motion",
    "tailwind-merge",
];
