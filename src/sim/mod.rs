//! Simulation orchestration: wall-clock scaling, sleep and settings

pub mod clock;
pub mod settings;
pub mod sleep;

pub use clock::{SimEvent, SimSpeed, SimulationClock};
pub use settings::Settings;
pub use sleep::{SleepMode, SleepSchedule};
