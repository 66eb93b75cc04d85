pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const AUTO_ADVANCE_INTERVAL: f32 = 5.0;   // Carousel auto-advance period (seconds)
pub const STATUS_CLEAR_DELAY: f32 = 3.5;      // Form confirmation lifetime (seconds)
pub const HERO_SCROLL_DELAY: f32 = 0.65;      // Hero replay after a scroll to top (seconds)
pub const HERO_RESTORE_DELAY: f32 = 0.09;     // Hero replay after a cache restore (seconds)

pub const REVEAL_THRESHOLD: f32 = 0.2;        // Visible share that marks an element as entered
pub const HERO_THRESHOLD: f32 = 0.65;         // Visible share that counts the hero as on screen

pub const HEADER_HEIGHT: f32 = 64.0;          // Fixed site header (pixels)
pub const SCROLL_SPY_MARGIN: f32 = 10.0;      // Extra probe offset below the header (pixels)

pub const SCROLL_DURATION: f32 = 0.6;         // Smooth scroll animation (seconds)
pub const REVEAL_DURATION: f32 = 0.6;         // Reveal / hero entrance animation (seconds)
pub const MOBILE_BREAKPOINT: i32 = 820;       // Below this width the nav collapses into a drawer

pub const CONFIRMATION_MESSAGE: &str = "Message sent! (Demo only)";
