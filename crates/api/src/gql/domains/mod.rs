// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod auth;
pub mod catalog;
pub mod fixtures;
pub mod matches;
pub mod standings;
