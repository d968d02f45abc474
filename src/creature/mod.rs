pub mod boredom;
pub mod hunger;
pub mod illness;
pub mod memory;
pub mod needs;
pub mod personality;
pub mod pet;
pub mod stage;
pub mod waste;

pub use needs::NeedGauge;
pub use pet::Pet;
pub use stage::LifeStage;
