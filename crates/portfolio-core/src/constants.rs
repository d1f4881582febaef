use std::time::Duration;

// Shared effect tuning constants used by the engines and the web frontend.

// Capability detection
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0; // viewport widths at or below this are "mobile"
pub const BENCHMARK_DRAWS: u32 = 100_000;
pub const BENCHMARK_BUDGET: Duration = Duration::from_millis(10); // slower than this => low tier

// Reveal on scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

// Counters and progress bars
pub const COUNTER_STEPS: u32 = 100;
pub const COUNTER_TICK: Duration = Duration::from_millis(20);
pub const PROGRESS_STEPS: u32 = 50;
pub const PROGRESS_TICK: Duration = Duration::from_millis(30);
pub const PROGRESS_START_DELAY: Duration = Duration::from_millis(300); // lets the reveal finish first
pub const PROGRESS_MAX_LEVEL: u32 = 100;

// Particles
pub const PARTICLE_INTERVAL: Duration = Duration::from_secs(15);
pub const PARTICLE_LIFETIME: Duration = Duration::from_secs(8);
pub const PARTICLE_BATCH_DESKTOP: usize = 10;
pub const PARTICLE_BATCH_MOBILE: usize = 5;
pub const PARTICLE_DURATION_SEC: (f64, f64) = (3.0, 7.0);
pub const PARTICLE_DELAY_SEC: (f64, f64) = (0.0, 3.0);

// Glyph rain
pub const GLYPH_COLUMN_COUNT: usize = 50;
pub const GLYPH_COLUMN_ROWS: usize = 20;
pub const GLYPH_DURATION_SEC: (f64, f64) = (2.0, 5.0);
pub const GLYPH_DELAY_SEC: (f64, f64) = (0.0, 2.0);
pub const GLYPH_CHARSET: &str = "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

// Cursor trail
pub const CURSOR_SMOOTHING: f32 = 0.1; // fraction of the remaining distance covered per frame
pub const CURSOR_SETTLE_PX: f32 = 1.0;
pub const CURSOR_THROTTLE: Duration = Duration::from_millis(16); // ~60 Hz

// Parallax
pub const PARALLAX_THROTTLE: Duration = Duration::from_millis(10);
pub const PARALLAX_RATE: f64 = -0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.2;

// Glitch triggers
pub const GLITCH_TEXT_INTERVAL: Duration = Duration::from_secs(3);
pub const GLITCH_TEXT_PROBABILITY: f64 = 0.1;
pub const GLITCH_TEXT_DURATION: Duration = Duration::from_millis(300);
pub const GLITCH_POOL_INTERVAL: Duration = Duration::from_secs(5);
pub const GLITCH_POOL_PROBABILITY: f64 = 0.05;
pub const GLITCH_DISTORT_DURATION: Duration = Duration::from_millis(500);
pub const GLITCH_SCROLL_THROTTLE: Duration = Duration::from_millis(100);
pub const GLITCH_SCROLL_DELTA_PX: f64 = 50.0;
pub const GLITCH_CORRUPT_PROBABILITY: f64 = 0.3;
pub const GLITCH_CORRUPT_DURATION: Duration = Duration::from_millis(100);
pub const GLITCH_CORRUPT_CHARSET: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const GLITCH_CLICK_RIPPLE_DURATION: Duration = Duration::from_millis(400);
pub const GLITCH_HOVER_RIPPLE_DURATION: Duration = Duration::from_millis(600);

// Typewriter
pub const TYPEWRITER_START_DELAY: Duration = Duration::from_secs(1);
pub const TYPEWRITER_CHAR_INTERVAL: Duration = Duration::from_millis(100);

// Navigation
pub const NAVBAR_SCROLLED_PX: f64 = 100.0;
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 200.0;
pub const FLOATING_CONTACT_SHOW_PX: f64 = 500.0;

// Contact form feedback
pub const FEEDBACK_ERROR_DISMISS: Duration = Duration::from_secs(3);
pub const FEEDBACK_SUCCESS_DISMISS: Duration = Duration::from_secs(2);

// Page chrome
pub const LOADING_SCREEN_HIDE_AFTER: Duration = Duration::from_secs(2);
