/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Request};

/**
 * Single-car LOOK state machine.
 *
 * The `Car` keeps travelling in its current direction, boarding and dropping
 * off along the way, until no commitment lies further ahead; it then reverses
 * if the opposite side has outstanding work, or parks. Motion is driven
 * externally: the dispatcher calls `advance` once per simulation tick, so the
 * car itself never blocks or keeps time.
 *
 * # Fields
 * - `floor`:              Current floor; changes by exactly one per step.
 * - `motion`:             Direction of travel together with the furthest
 *                         committed floor on each side (see `Motion`).
 * - `pending_by_floor`:   Accepted requests waiting to be boarded, keyed by
 *                         their origin floor.
 */

/// Travel state of a car.
///
/// `bound` is the furthest floor the car must still reach in its direction of
/// travel before it may reverse or park; it only ever widens away from the
/// car, never shrinks, until it is consumed on arrival. The opposite side
/// (`below`/`above`) holds the furthest commitment accrued for the return
/// run, typically the destinations of passengers boarded on the way.
/// Encoding the bound inside the variant makes "moving with no target"
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Idle,
    Up { bound: u8, below: Option<u8> },
    Down { bound: u8, above: Option<u8> },
}

pub struct Car {
    floor: u8,
    motion: Motion,
    pending_by_floor: Vec<Vec<Request>>,
}

impl Car {
    pub fn new(n_floors: u8) -> Car {
        Car {
            floor: 0,
            motion: Motion::Idle,
            pending_by_floor: vec![Vec::new(); n_floors as usize],
        }
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_idle(&self) -> bool {
        self.motion == Motion::Idle
    }

    pub fn direction(&self) -> Direction {
        match self.motion {
            Motion::Idle => Direction::Idle,
            Motion::Up { .. } => Direction::Up,
            Motion::Down { .. } => Direction::Down,
        }
    }

    /// Human-readable next target, 1-based floors; empty while parked.
    pub fn target_summary(&self) -> String {
        match self.motion {
            Motion::Idle => String::new(),
            Motion::Up { bound, .. } => format!("Go up to {}", bound + 1),
            Motion::Down { bound, .. } => format!("Go down to {}", bound + 1),
        }
    }

    /// Comma-joined pickups not yet boarded, in floor order.
    pub fn pending_summary(&self) -> String {
        self.pending_by_floor
            .iter()
            .flatten()
            .map(|request| request.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// Takes on a request the dispatcher has matched to this car.
    ///
    /// The dispatcher has already validated the floors and checked
    /// eligibility, so this never fails. An idle car starts moving toward the
    /// pickup; a moving car records the pickup and widens its bound if the
    /// origin lies beyond it.
    pub fn accept(&mut self, request: Request) {
        match self.motion {
            Motion::Idle => {
                if request.origin < self.floor {
                    self.motion = Motion::Down {
                        bound: request.origin,
                        above: None,
                    };
                    self.record(request);
                } else if request.origin > self.floor {
                    self.motion = Motion::Up {
                        bound: request.origin,
                        below: None,
                    };
                    self.record(request);
                } else {
                    // Boarding right here: the destination is the only
                    // remaining commitment, registered exactly once.
                    self.motion = if request.destination > self.floor {
                        Motion::Up {
                            bound: request.destination,
                            below: None,
                        }
                    } else {
                        Motion::Down {
                            bound: request.destination,
                            above: None,
                        }
                    };
                }
            }
            Motion::Up { .. } | Motion::Down { .. } => self.record(request),
        }
    }

    /// One discrete simulation step; a no-op while parked.
    ///
    /// Moves one floor, boards any passengers waiting there (their
    /// destinations become new commitments), and on reaching the bound either
    /// reverses toward the opposite side's outstanding work or parks.
    /// Returns whether the car moved.
    pub fn advance(&mut self) -> bool {
        match self.motion {
            Motion::Idle => false,
            Motion::Up { .. } => {
                self.floor += 1;
                self.board_at_current_floor();
                if let Motion::Up { bound, below } = self.motion {
                    if self.floor == bound {
                        self.motion = match below {
                            Some(b) => Motion::Down {
                                bound: b,
                                above: None,
                            },
                            None => Motion::Idle,
                        };
                    }
                }
                true
            }
            Motion::Down { .. } => {
                self.floor -= 1;
                self.board_at_current_floor();
                if let Motion::Down { bound, above } = self.motion {
                    if self.floor == bound {
                        self.motion = match above {
                            Some(b) => Motion::Up {
                                bound: b,
                                below: None,
                            },
                            None => Motion::Idle,
                        };
                    }
                }
                true
            }
        }
    }

    fn record(&mut self, request: Request) {
        self.commit(request.origin);
        self.pending_by_floor[request.origin as usize].push(request);
    }

    // Registers `target` as a commitment on whichever side of the car it
    // lies. A target at the current floor needs no travel and is dropped.
    fn commit(&mut self, target: u8) {
        match &mut self.motion {
            Motion::Idle => {}
            Motion::Up { bound, below } => {
                if target > self.floor {
                    *bound = (*bound).max(target);
                } else if target < self.floor {
                    *below = Some(below.map_or(target, |b| b.min(target)));
                }
            }
            Motion::Down { bound, above } => {
                if target < self.floor {
                    *bound = (*bound).min(target);
                } else if target > self.floor {
                    *above = Some(above.map_or(target, |b| b.max(target)));
                }
            }
        }
    }

    // Everyone waiting at the current floor boards; their destinations turn
    // into commitments with nothing left behind at this floor.
    fn board_at_current_floor(&mut self) {
        let boarding = std::mem::take(&mut self.pending_by_floor[self.floor as usize]);
        for request in boarding {
            self.commit(request.destination);
        }
    }

    #[cfg(test)]
    pub fn test_set_floor(&mut self, floor: u8) {
        self.floor = floor;
    }

    #[cfg(test)]
    pub fn test_pending_count(&self) -> usize {
        self.pending_by_floor.iter().map(Vec::len).sum()
    }
}
