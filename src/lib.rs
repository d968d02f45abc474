//! Mochling - Virtual Creature Simulation

pub mod alerts;
pub mod core;
pub mod creature;
pub mod items;
pub mod persist;
pub mod sim;
