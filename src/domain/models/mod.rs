pub mod kinds;
pub mod resolved;
pub mod settings;
pub mod timecode;

pub use kinds::{AudioType, ExtensionType, ProcessType, Waifu2xType};
pub use resolved::{
    PathSettings, ResolvedConfig, UpscaleSettings, UserSettings, WorkspaceLayout, BLEED_OVERRIDE,
};
pub use settings::{RawSettings, PLACEHOLDER, REQUIRED_KEYS, SECTION, SUBSTITUTED_KEYS};
pub use timecode::{parse_timecode, TimecodeError};
