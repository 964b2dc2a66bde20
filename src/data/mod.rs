pub mod event;
pub mod fighter;
pub mod roster;

pub use event::{Bout, BoutStatus, Event, EventStatus};
pub use fighter::Fighter;
pub use roster::{load_roster, RosterError, DEFAULT_ROSTER_PATH};
