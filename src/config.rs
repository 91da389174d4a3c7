//! Site-wide constants.
//!
//! Timing values are in milliseconds and distances are in CSS pixels.

/// Document title set by the route.
pub const SITE_TITLE: &str = "Hilmi Khoirulloh Journey";

/// Meta description set by the route.
pub const SITE_DESCRIPTION: &str = "My journey from zero to be a fullstack developer";

/// Owner's name, used in the footer.
pub const OWNER_NAME: &str = "Hilmi Khoirulloh";

/// Overlay timings and gesture thresholds.
pub mod overlay {
    /// How long the exit transition runs before an overlay unmounts.
    pub const EXIT_ANIMATION_MS: u64 = 300;
    /// Animation frames an opening overlay spends in its hidden pose, so the
    /// browser has painted it once before the enter transition starts.
    pub const ENTER_FRAMES: u8 = 2;
    /// Downward drag distance past which a bottom sheet dismisses on release.
    pub const DRAG_DISMISS_THRESHOLD: f64 = 100.0;
    /// Id of the shared modal portal root.
    pub const MODAL_ROOT_ID: &str = "modal-root";
    /// Id of the shared bottom sheet portal root.
    pub const SHEET_ROOT_ID: &str = "bottomsheet-root";
}

/// Carousel defaults.
pub mod carousel {
    /// Autoplay interval used when none is configured.
    pub const DEFAULT_INTERVAL_MS: u64 = 3000;
    /// Autoplay interval of the autoplay preset.
    pub const AUTOPLAY_PRESET_INTERVAL_MS: u64 = 4000;
    /// Horizontal travel required for a swipe to count.
    pub const SWIPE_THRESHOLD: f64 = 50.0;
}

/// Hero section animation.
pub mod hero {
    pub const TYPING_STEP_MS: u64 = 100;
    pub const WORD_HOLD_MS: u64 = 2000;
    pub const PARTICLE_COUNT: usize = 50;
    pub const PARTICLE_TICK_MS: u64 = 50;
    pub const TYPED_WORDS: &[&str] = &[
        "Full-Stack Developer",
        "Problem Solver",
        "Code Enthusiast",
        "Tech Innovator",
    ];
}

/// Viewport observation.
pub mod sections {
    /// Fraction of a section that must be on screen to count as visible.
    pub const INTERSECTION_THRESHOLD: f64 = 0.3;
    /// Duration of the "years of experience" count-up.
    pub const COUNTER_DURATION_MS: u64 = 2000;
}
