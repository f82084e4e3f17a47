/// Page behaviour tuning constants.
///
/// These are fixed policy rather than configuration: thresholds, animation
/// timings and particle ranges the stylesheet was designed around.
// Scroll-driven UI thresholds (CSS px)
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub const ACTIVE_SECTION_LOOKAHEAD_PX: f64 = 150.0;
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 100.0; // leaves room for the fixed navbar
pub const SKILL_BAR_BOTTOM_MARGIN_PX: f64 = 50.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Particle background
pub const MAX_PARTICLES: usize = 30;
pub const VIEWPORT_PX_PER_PARTICLE: f64 = 20.0;
pub const PARTICLE_SIZE_MIN_PX: f64 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 4.0;
pub const PARTICLE_DELAY_MAX_SEC: f64 = 20.0;
pub const PARTICLE_DURATION_MIN_SEC: f64 = 15.0;
pub const PARTICLE_DURATION_SPAN_SEC: f64 = 10.0;
pub const PARTICLE_DRIFT_STEP_PERCENT: f64 = 1.0; // max horizontal wander per frame

// Typewriter
pub const TYPE_DELAY_MS: u64 = 100;
pub const DELETE_DELAY_MS: u64 = 50;
pub const PAUSE_AT_FULL_MS: u64 = 1500;
pub const TYPEWRITER_START_DELAY_MS: u64 = 1000;

// One-shot animation timings (ms)
pub const LOADING_HIDE_MS: i32 = 1500;
pub const LOADING_REMOVE_MS: i32 = 500;
pub const THEME_TRANSITION_ENABLE_MS: i32 = 100;
pub const THEME_CHANGING_MS: i32 = 300;
pub const BUTTON_PRESS_MS: i32 = 150;
pub const ANCHOR_PRESS_MS: i32 = 200;
pub const NAV_LINK_LIFT_MS: i32 = 300;
pub const SKILL_BAR_STAGGER_MS: i32 = 100;
pub const FORM_SUBMIT_SIMULATED_MS: i32 = 2000;
pub const FORM_SUCCESS_PULSE_MS: i32 = 2000;
pub const NOTIFICATION_SHOW_MS: i32 = 10;
pub const NOTIFICATION_AUTO_DISMISS_MS: i32 = 5000;
pub const NOTIFICATION_REMOVE_MS: i32 = 300;
pub const CARD_HOVER_INIT_MS: i32 = 1000;
pub const TOOLTIP_INIT_MS: i32 = 2000;
pub const KONAMI_EFFECT_MS: i32 = 5000;

// Stagger between successive menu links / revealed children (seconds)
pub const STAGGER_STEP_SEC: f64 = 0.1;

// Tooltip placement above its anchor
pub const TOOLTIP_GAP_PX: f64 = 10.0;

// Scroll-reveal observer
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";
