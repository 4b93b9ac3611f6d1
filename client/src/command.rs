use common::games::tictactoe::{InputError, parse_callback_data};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Quit,
    Move { row: usize, col: usize },
}

/// Accepts `/start`, `/help`, `/quit`, button callback data such as `12`,
/// or a whitespace separated `row col` pair.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    match line {
        "/start" => return Ok(Command::Start),
        "/help" => return Ok(Command::Help),
        "/quit" | "/exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [data] => {
            let position = parse_callback_data(data)?;
            Ok(Command::Move {
                row: position.row,
                col: position.col,
            })
        }
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => Ok(Command::Move { row, col }),
            _ => Err(InputError::Malformed(line.to_string())),
        },
        _ => Err(InputError::Malformed(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::MoveError;

    #[test]
    fn test_slash_commands() {
        assert_eq!(parse_command("/start"), Ok(Command::Start));
        assert_eq!(parse_command("  /help "), Ok(Command::Help));
        assert_eq!(parse_command("/quit"), Ok(Command::Quit));
        assert_eq!(parse_command("/exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_callback_data_move() {
        assert_eq!(parse_command("21"), Ok(Command::Move { row: 2, col: 1 }));
    }

    #[test]
    fn test_pair_move_is_passed_through_unchecked() {
        assert_eq!(parse_command("1 2"), Ok(Command::Move { row: 1, col: 2 }));
        assert_eq!(parse_command("4 0"), Ok(Command::Move { row: 4, col: 0 }));
    }

    #[test]
    fn test_callback_data_out_of_range() {
        assert_eq!(
            parse_command("33"),
            Err(InputError::Move(MoveError::OutOfRange { row: 3, col: 3 }))
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(parse_command("hello"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_command("-1 0"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_command("1 2 3"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_command(""), Err(InputError::Malformed(_))));
        assert!(matches!(parse_command("/stop"), Err(InputError::Malformed(_))));
    }
}
