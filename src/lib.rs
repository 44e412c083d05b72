pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod payload;
pub mod produce;

pub use config::Config;
pub use error::ProduceError;
pub use produce::{Produced, produce};
