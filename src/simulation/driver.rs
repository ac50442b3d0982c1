/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::thread::sleep;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::shared::FleetSnapshot;

/**
 * Simulation clock and command loop.
 *
 * The `SimulationDriver` is the single thread that owns the dispatcher and
 * with it every piece of fleet state. It reads submissions from a command
 * channel and fires one dispatcher tick whenever the command channel has
 * been quiet for a full tick interval, so all state transitions are
 * serialized here and observers only ever see fully completed steps.
 *
 * # Fields
 * - `dispatcher`:     The fleet and queue owner; mutated from this thread only.
 * - `tick_interval`:  Simulation step period.
 * - `command_rx`:     Receives submissions and the shutdown signal.
 * - `snapshot_tx`:    Publishes one combined fleet snapshot per completed
 *                     step; only sent when something changed.
 * - `last_snapshot`:  The previously published snapshot, for change
 *                     detection.
 */

pub enum Command {
    Submit { origin: u8, destination: u8 },
    Shutdown,
}

pub struct SimulationDriver {
    dispatcher: Dispatcher,
    tick_interval: Duration,
    command_rx: cbc::Receiver<Command>,
    snapshot_tx: cbc::Sender<FleetSnapshot>,
    last_snapshot: Option<FleetSnapshot>,
}

impl SimulationDriver {
    pub fn new(
        config: &Config,
        command_rx: cbc::Receiver<Command>,
        snapshot_tx: cbc::Sender<FleetSnapshot>,
    ) -> SimulationDriver {
        SimulationDriver {
            dispatcher: Dispatcher::new(&config.building),
            tick_interval: Duration::from_millis(config.simulation.tick_interval_ms),
            command_rx,
            snapshot_tx,
            last_snapshot: None,
        }
    }

    pub fn run(mut self) {
        loop {
            cbc::select! {
                recv(self.command_rx) -> command => {
                    match command {
                        Ok(Command::Submit { origin, destination }) => {
                            // Eager dispatch: try to place the request now
                            // instead of waiting for the next tick
                            match self.dispatcher.submit(origin, destination) {
                                Ok(()) => {
                                    let snapshot = self.dispatcher.snapshot();
                                    self.publish(snapshot);
                                }
                                Err(e) => warn!("request rejected: {}", e),
                            }
                        }
                        Ok(Command::Shutdown) | Err(_) => break,
                    }
                }
                default(self.tick_interval) => {
                    let snapshot = self.dispatcher.tick();
                    self.publish(snapshot);
                }
            }
        }
        self.finish_outstanding();
    }

    // After the command channel closes, keep ticking until every accepted
    // request has been serviced; accepted requests always complete.
    fn finish_outstanding(&mut self) {
        if !self.dispatcher.is_settled() {
            info!("input closed, finishing outstanding requests");
        }
        while !self.dispatcher.is_settled() {
            sleep(self.tick_interval);
            let snapshot = self.dispatcher.tick();
            self.publish(snapshot);
        }
    }

    fn publish(&mut self, snapshot: FleetSnapshot) {
        if self.last_snapshot.as_ref() == Some(&snapshot) {
            return;
        }
        // A closed snapshot channel only means nobody is watching
        let _ = self.snapshot_tx.send(snapshot.clone());
        self.last_snapshot = Some(snapshot);
    }
}
