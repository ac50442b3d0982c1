/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::warn;
use std::io::BufRead;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::simulation::Command;

/**
 * Interactive request reader.
 *
 * Parses stdin lines of the form `<from> <to>` (1-based floors, as shown in
 * the display) into submissions for the simulation driver. Malformed lines
 * are reported and skipped; end of input turns into a shutdown command so a
 * piped request script drains cleanly.
 *
 * # Fields
 * - `command_tx`:  Sends submissions and the final shutdown to the driver.
 */

pub struct InputReader {
    command_tx: cbc::Sender<Command>,
}

impl InputReader {
    pub fn new(command_tx: cbc::Sender<Command>) -> InputReader {
        InputReader { command_tx }
    }

    pub fn run(self) {
        println!("Enter requests as \"<from> <to>\" (1-based floors), Ctrl-D to finish");

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match parse_request(&line) {
                Ok(Some((origin, destination))) => {
                    if self
                        .command_tx
                        .send(Command::Submit {
                            origin,
                            destination,
                        })
                        .is_err()
                    {
                        break;
                    }
                }
                Ok(None) => {}
                Err(reason) => warn!("ignoring input line {:?}: {}", line, reason),
            }
        }

        let _ = self.command_tx.send(Command::Shutdown);
    }
}

// Returns the 0-based (origin, destination) pair, `None` for a blank line.
// Range and displacement checks are the dispatcher's job; this only gets the
// numbers out.
fn parse_request(line: &str) -> Result<Option<(u8, u8)>, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != 2 {
        return Err("expected two floor numbers".into());
    }

    let origin: u8 = fields[0]
        .parse()
        .map_err(|_| format!("{:?} is not a floor number", fields[0]))?;
    let destination: u8 = fields[1]
        .parse()
        .map_err(|_| format!("{:?} is not a floor number", fields[1]))?;
    if origin == 0 || destination == 0 {
        return Err("floors are numbered from 1".into());
    }

    Ok(Some((origin - 1, destination - 1)))
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use super::parse_request;

    #[test]
    fn test_parse_request_valid_line() {
        assert_eq!(parse_request("3 6"), Ok(Some((2, 5))));
        assert_eq!(parse_request("  10   1 "), Ok(Some((9, 0))));
    }

    #[test]
    fn test_parse_request_blank_line() {
        assert_eq!(parse_request(""), Ok(None));
        assert_eq!(parse_request("   "), Ok(None));
    }

    #[test]
    fn test_parse_request_malformed_lines() {
        assert!(parse_request("3").is_err());
        assert!(parse_request("3 6 9").is_err());
        assert!(parse_request("three six").is_err());
        // Floor 0 does not exist in the 1-based input format
        assert!(parse_request("0 4").is_err());
    }
}
