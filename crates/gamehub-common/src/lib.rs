pub mod errors;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, GameHubError};
pub use id::new_correlation_id;
pub use notifications::{Notification, NotificationLevel, NotificationQueue, NotificationSink};
pub use types::{GameId, LaunchTrigger, PoliceMode};

pub type Result<T> = std::result::Result<T, GameHubError>;
