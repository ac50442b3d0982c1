/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

/// A travel request: pick up at `origin`, drop off at `destination`.
///
/// Floors are 0-based internally; `Display` renders them 1-based for humans.
/// Both floors are validated at submission, so a `Request` held anywhere in
/// the system is always in range with `origin != destination`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub origin: u8,
    pub destination: u8,
}

impl Request {
    pub fn new(origin: u8, destination: u8) -> Request {
        Request {
            origin,
            destination,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin + 1, self.destination + 1)
    }
}

/// Per-car view published to observers after every simulation step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarSnapshot {
    pub floor: u8,
    pub direction: Direction,
    /// Human-readable next target, e.g. "Go up to 5"; empty when idle.
    pub target: String,
    /// Comma-joined pending pickups, e.g. "3 -> 6, 2 -> 5"; empty when none.
    pub pending: String,
}

/// Combined fleet state for one tick, sent as a single notification once all
/// state mutation for that tick is complete.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FleetSnapshot {
    pub cars: Vec<CarSnapshot>,
    pub queued: Vec<Request>,
}
