pub mod channel;
pub mod config;
pub mod dashboard;
pub mod dialog;
pub mod editor;
pub mod error;

pub use channel::{Channel, ChannelId, ChannelKind, ChannelProfile, ChannelRegistry};
pub use config::{ChannelSeed, Config};
pub use dashboard::Dashboard;
pub use dialog::{DialogOutcome, ProfileDialog, ProfileDraft, SummaryConfigDialog};
pub use editor::{EditState, ProfileEditor};
pub use error::{NosyError, Result};
