/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::warn;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::shared::{Direction, FleetSnapshot};

/**
 * Snapshot renderer.
 *
 * Consumes the per-tick fleet snapshots and prints them, either as a text
 * shaft view or as one JSON line per snapshot. Pure output: nothing here
 * feeds back into the simulation, and the thread stops when the driver
 * drops the snapshot channel.
 *
 * # Fields
 * - `snapshot_rx`:  Receives one combined snapshot per completed tick.
 * - `n_floors`:     Height of the shaft view.
 * - `json`:         Emit machine-readable lines instead of the text view.
 */

pub struct Display {
    snapshot_rx: cbc::Receiver<FleetSnapshot>,
    n_floors: u8,
    json: bool,
}

impl Display {
    pub fn new(config: &Config, json: bool, snapshot_rx: cbc::Receiver<FleetSnapshot>) -> Display {
        Display {
            snapshot_rx,
            n_floors: config.building.n_floors,
            json,
        }
    }

    pub fn run(self) {
        for snapshot in self.snapshot_rx.iter() {
            if self.json {
                match serde_json::to_string(&snapshot) {
                    Ok(line) => println!("{}", line),
                    Err(e) => warn!("failed to serialize snapshot: {}", e),
                }
            } else {
                println!("{}", self.render(&snapshot));
            }
        }
    }

    // Top floor first, one column per car, then the queue and a status line
    // per car.
    fn render(&self, snapshot: &FleetSnapshot) -> String {
        let mut out = String::new();

        for floor in (0..self.n_floors).rev() {
            out.push_str(&format!("{:>3} ", floor + 1));
            for car in &snapshot.cars {
                out.push_str(if car.floor == floor { " # " } else { " . " });
            }
            out.push('\n');
        }

        if !snapshot.queued.is_empty() {
            let queued = snapshot
                .queued
                .iter()
                .map(|request| request.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            out.push_str(&format!("Queue: {}\n", queued));
        }

        for (id, car) in snapshot.cars.iter().enumerate() {
            match car.direction {
                Direction::Idle => {
                    out.push_str(&format!("Car {}: idle at {}\n", id + 1, car.floor + 1));
                }
                _ => {
                    out.push_str(&format!("Car {}: {}", id + 1, car.target));
                    if !car.pending.is_empty() {
                        out.push_str(&format!(" | picking up {}", car.pending));
                    }
                    out.push('\n');
                }
            }
        }

        out
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
