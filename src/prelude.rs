pub use anyhow::{Context, Error, bail};
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use tracing::{Level, debug, info, instrument, warn};
pub use url::Url;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
