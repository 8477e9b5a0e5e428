//! Core data model for session loading and lap analysis

pub mod key;
pub mod lap;
pub mod session_data;
pub mod telemetry;
pub mod track_status;

pub use key::{LoadMode, SessionKey, SessionKind};
pub use lap::{Compound, DriverId, LapRecord};
pub use session_data::{SessionData, SessionResult};
pub use telemetry::{TelemetrySample, WeatherSample};
pub use track_status::{TrackFlag, TrackStatus};
