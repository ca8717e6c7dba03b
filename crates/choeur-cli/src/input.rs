//! Carousel control from standard input.
//!
//! Each line is one command:
//!
//! | Input            | Command             |
//! |------------------|---------------------|
//! | `n`, `next`      | next slide          |
//! | `p`, `previous`  | previous slide      |
//! | ` `, `t`         | toggle play/pause   |
//! | `play`, `pause`  | set autoplay        |
//! | `1`..`N`         | go to slide k       |
//! | `q`, `quit`      | quit                |

use choeur_core::CarouselCommand;
use log::{debug, warn};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    sync::mpsc,
    task::JoinHandle,
};

/// Parses one input line. Unknown input yields `None`.
pub fn parse_command(line: &str) -> Option<CarouselCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return line.contains(' ').then_some(CarouselCommand::TogglePlayPause);
    }

    match trimmed.to_lowercase().as_str() {
        "n" | "next" => Some(CarouselCommand::Next),
        "p" | "prev" | "previous" => Some(CarouselCommand::Previous),
        "t" | "toggle" => Some(CarouselCommand::TogglePlayPause),
        "play" => Some(CarouselCommand::SetAutoplay(true)),
        "pause" => Some(CarouselCommand::SetAutoplay(false)),
        "q" | "quit" => Some(CarouselCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(slide) if slide >= 1 => Some(CarouselCommand::GoTo(slide - 1)),
            _ => None,
        },
    }
}

/// Forwards parsed stdin lines to `commands` until end of input.
///
/// The sender is dropped at end of input, which stops the carousel loop.
pub fn spawn_stdin_reader(commands: mpsc::Sender<CarouselCommand>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(command) = parse_command(&line) else {
                        warn!("Unknown carousel command: {line:?}");
                        continue;
                    };
                    if commands.send(command).await.is_err() || command == CarouselCommand::Quit {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("End of input");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read stdin: {e}");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parse_command("n"), Some(CarouselCommand::Next));
        assert_eq!(parse_command("  next\n"), Some(CarouselCommand::Next));
        assert_eq!(parse_command("P"), Some(CarouselCommand::Previous));
        assert_eq!(parse_command("q"), Some(CarouselCommand::Quit));
    }

    #[test]
    fn test_toggle_commands() {
        assert_eq!(parse_command(" "), Some(CarouselCommand::TogglePlayPause));
        assert_eq!(parse_command("t"), Some(CarouselCommand::TogglePlayPause));
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("pause"), Some(CarouselCommand::SetAutoplay(false)));
    }

    #[test]
    fn test_slide_numbers_are_one_based() {
        assert_eq!(parse_command("1"), Some(CarouselCommand::GoTo(0)));
        assert_eq!(parse_command("6"), Some(CarouselCommand::GoTo(5)));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("-2"), None);
        assert_eq!(parse_command("bonjour"), None);
    }
}
