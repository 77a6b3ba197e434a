pub mod ftcscout;

pub use ftcscout::{FtcScoutClient, RegistryCheck, TeamRegistry};
