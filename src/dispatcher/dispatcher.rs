/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::elevator::{Car, Motion};
use crate::error::SubmitError;
use crate::shared::{CarSnapshot, FleetSnapshot, Request};

/**
 * Fleet-level request dispatcher.
 *
 * The `Dispatcher` owns the whole fleet and the queue of requests no car has
 * claimed yet. On every tick, and eagerly after every submission, it runs a
 * matching pass over the queue; requests that no car is currently eligible
 * for stay queued and are retried until one becomes eligible. All fleet
 * state is mutated from here only, so a single thread driving the dispatcher
 * keeps the whole simulation race-free.
 *
 * # Fields
 * - `fleet`:       The cars, in declaration order; ties in the matching
 *                  policy resolve to the lowest index.
 * - `unassigned`:  FIFO of requests not yet claimed by any car.
 * - `n_floors`:    Number of floors served; used to validate submissions.
 */

pub struct Dispatcher {
    fleet: Vec<Car>,
    unassigned: VecDeque<Request>,
    n_floors: u8,
}

impl Dispatcher {
    pub fn new(config: &BuildingConfig) -> Dispatcher {
        let fleet = (0..config.n_elevators)
            .map(|_| Car::new(config.n_floors))
            .collect();

        Dispatcher {
            fleet,
            unassigned: VecDeque::new(),
            n_floors: config.n_floors,
        }
    }

    /// Validates and enqueues a request, then immediately tries to place it
    /// (and anything queued before it) so the common case never waits for
    /// the next tick.
    pub fn submit(&mut self, origin: u8, destination: u8) -> Result<(), SubmitError> {
        for floor in [origin, destination] {
            if floor >= self.n_floors {
                return Err(SubmitError::InvalidFloorRange {
                    floor,
                    n_floors: self.n_floors,
                });
            }
        }
        if origin == destination {
            return Err(SubmitError::DegenerateRequest { floor: origin });
        }

        let request = Request::new(origin, destination);
        debug!("request {} queued", request);
        self.unassigned.push_back(request);
        self.match_requests();
        Ok(())
    }

    /// One simulation step: re-run the matching pass, then advance every
    /// moving car by one floor. Returns the combined fleet state for the
    /// per-tick observer notification.
    pub fn tick(&mut self) -> FleetSnapshot {
        self.match_requests();
        for car in self.fleet.iter_mut() {
            car.advance();
        }
        self.snapshot()
    }

    /// All cars parked and nothing left to hand out.
    pub fn is_settled(&self) -> bool {
        self.unassigned.is_empty() && self.fleet.iter().all(Car::is_idle)
    }

    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            cars: self
                .fleet
                .iter()
                .map(|car| CarSnapshot {
                    floor: car.floor(),
                    direction: car.direction(),
                    target: car.target_summary(),
                    pending: car.pending_summary(),
                })
                .collect(),
            queued: self.unassigned.iter().copied().collect(),
        }
    }

    // Tries to place every queued request, earliest first. Matched requests
    // are handed to their car; the rest are requeued in order for the next
    // pass.
    fn match_requests(&mut self) {
        for request in std::mem::take(&mut self.unassigned) {
            match self.find_car(&request) {
                Some(id) => {
                    debug!(
                        "request {} assigned to car {} at floor {}",
                        request,
                        id + 1,
                        self.fleet[id].floor() + 1
                    );
                    self.fleet[id].accept(request);
                }
                None => self.unassigned.push_back(request),
            }
        }
    }

    // Eligibility in three tiers, first match wins:
    //   1. an idle car already parked at the origin floor,
    //   2. the closest car moving through the origin in the trip's direction,
    //   3. the closest idle car anywhere.
    // A passing car beats an idle car that would first have to travel, which
    // keeps total detour down; tier 3 guarantees progress whenever any car is
    // free.
    fn find_car(&self, request: &Request) -> Option<usize> {
        for (id, car) in self.fleet.iter().enumerate() {
            if car.is_idle() && car.floor() == request.origin {
                return Some(id);
            }
        }

        let en_route = self.fleet.iter().enumerate().filter(|(_, car)| {
            match car.motion() {
                Motion::Up { .. } => {
                    car.floor() < request.origin && request.origin < request.destination
                }
                Motion::Down { .. } => {
                    car.floor() > request.origin && request.origin > request.destination
                }
                Motion::Idle => false,
            }
        });
        if let Some(id) = Self::closest(en_route, request.origin) {
            return Some(id);
        }

        let idle = self.fleet.iter().enumerate().filter(|(_, car)| car.is_idle());
        Self::closest(idle, request.origin)
    }

    // Smallest absolute distance to `origin`; `min_by_key` keeps the first of
    // equally distant candidates, which is the tie-break by fleet order.
    fn closest<'a>(candidates: impl Iterator<Item = (usize, &'a Car)>, origin: u8) -> Option<usize> {
        candidates
            .min_by_key(|(_, car)| (car.floor() as i16 - origin as i16).abs())
            .map(|(id, _)| id)
    }

    #[cfg(test)]
    pub fn test_car(&self, id: usize) -> &Car {
        &self.fleet[id]
    }

    #[cfg(test)]
    pub fn test_car_mut(&mut self, id: usize) -> &mut Car {
        &mut self.fleet[id]
    }

    #[cfg(test)]
    pub fn test_queued(&self) -> usize {
        self.unassigned.len()
    }

    #[cfg(test)]
    pub fn test_owned_requests(&self) -> usize {
        self.unassigned.len()
            + self
                .fleet
                .iter()
                .map(|car| car.test_pending_count())
                .sum::<usize>()
    }
}
