pub mod error;

// Precinct domain modules (canonical locations for all department types)
pub mod case;
pub mod config;
pub mod notification;
pub mod officer;
pub mod requests;

pub use error::*;

// Re-export all domain types
pub use case::*;
pub use config::*;
pub use notification::*;
pub use officer::*;
pub use requests::*;
