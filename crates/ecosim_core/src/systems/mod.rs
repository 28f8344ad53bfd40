pub mod environment;
pub mod interaction;
pub mod stats;
