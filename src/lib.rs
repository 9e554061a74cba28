//! Time Condenser: the progression core of an incremental game.
//!
//! - [`decimal`]: big-number arithmetic for resource amounts
//! - [`scheduler`]: virtual-clock timers with cancellable periodic tasks
//! - [`progression`]: game-agnostic resources, modifier chains, purchases,
//!   timed progress actions and the reset tree
//! - [`game`]: the Time Condenser content built on top of those
//! - [`time`]: fixed-timestep frame clock for hosts driving `Game::update`
//!
//! Rendering and input devices are left to the host. The crate logs through
//! the `log` facade and never installs a logger.

pub mod decimal;
pub mod game;
pub mod progression;
pub mod scheduler;
pub mod time;

pub use decimal::Decimal;
pub use game::actions::Action;
pub use game::config::{ConfigError, GameConfig};
pub use game::save::SaveError;
pub use game::Game;
