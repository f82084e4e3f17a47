// Platform-free page logic. Nothing in here touches `web_sys`, so the host
// test suite can pull these files in directly.
pub mod konami;
pub mod menu;
pub mod notify;
pub mod particles;
pub mod theme;
pub mod typewriter;
pub mod viewport;

pub use konami::KonamiMatcher;
pub use notify::{ContactMessage, NotificationKind};
pub use particles::ParticleSet;
pub use theme::Theme;
pub use typewriter::{TypewriterConfig, TypewriterState};
pub use viewport::{SectionGeometry, ViewportFlags, ViewportSnapshot};
