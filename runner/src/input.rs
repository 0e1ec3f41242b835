use std::io::{self, BufRead, BufReader};
use std::thread;

use brick_snake_common::{Direction, log};
use tokio::sync::mpsc;

/// Canonical mapping: the up key always means `Direction::Up`.
pub fn parse_direction(input: &str) -> Option<Direction> {
    match input.trim().to_ascii_lowercase().as_str() {
        "w" | "up" | "k" => Some(Direction::Up),
        "s" | "down" | "j" => Some(Direction::Down),
        "a" | "left" | "h" => Some(Direction::Left),
        "d" | "right" | "l" => Some(Direction::Right),
        _ => None,
    }
}

/// Forwards one heading per line until the input ends or the session drops
/// its receiver.
pub fn forward_headings<R: BufRead>(reader: R, heading_tx: &mpsc::UnboundedSender<Direction>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                let Some(direction) = parse_direction(&line) else {
                    log!("Unknown heading '{}'", line.trim());
                    continue;
                };
                if heading_tx.send(direction).is_err() {
                    break;
                }
            }
            Err(e) => {
                log!("Failed to read headings: {}", e);
                break;
            }
        }
    }
}

/// Runs `forward_headings` on a detached OS thread. A read that is still
/// blocked when the session ends does not keep the runtime alive.
pub fn spawn_forwarder<R>(
    reader: R,
    heading_tx: mpsc::UnboundedSender<Direction>,
) -> io::Result<thread::JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("heading-input".to_string())
        .spawn(move || forward_headings(reader, &heading_tx))
}

pub fn spawn_stdin_forwarder(heading_tx: mpsc::UnboundedSender<Direction>) -> io::Result<()> {
    spawn_forwarder(BufReader::new(io::stdin()), heading_tx)?;
    Ok(())
}
