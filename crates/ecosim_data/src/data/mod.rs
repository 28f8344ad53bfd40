pub mod entity;
pub mod environment;
pub mod resource;
