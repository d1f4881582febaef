//! Platform-independent core of the portfolio front-end: effect engines
//! driven by virtual time, the content model and the contact flow.
//!
//! Nothing here touches the browser. Engines describe DOM changes as
//! [`VisualOp`]s and the `portfolio-web` crate applies them.

pub mod ambient;
pub mod capability;
pub mod constants;
pub mod contact;
pub mod content;
pub mod counter;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod glitch;
pub mod host;
pub mod nav;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod timers;
pub mod typewriter;
pub mod visual;

pub use capability::{detect, Capabilities, CapabilityProbe, FixedProbe, PerformanceTier};
pub use contact::{ContactForm, Feedback, Interaction, InteractionKind, InteractionLog, Submission, WhatsApp};
pub use content::{Profile, ServiceCatalog, SkillCatalog};
pub use engine::{Effect, EffectState};
pub use error::{ContactError, DataError};
pub use host::{EffectsHost, Observed, Page, RevealTarget, SkillBar};
pub use theme::Theme;
pub use timers::{Throttle, TimerId, TimerRegistry};
pub use visual::{ElementId, Node, SpawnId, VisualOp, Watcher};
