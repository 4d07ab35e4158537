use common::games::tictactoe::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { row: usize, col: usize },
    Reset,
    SetDifficulty(Difficulty),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <row> <col>          place your mark, rows and columns are 0-2
  reset                start a new game
  difficulty <level>   easy, medium or hard (before your first move)
  show                 print the board
  help                 this text
  quit                 leave";

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let words: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .collect();

    match words.as_slice() {
        ["reset"] | ["r"] => Ok(ClientCommand::Reset),
        ["show"] => Ok(ClientCommand::Show),
        ["help"] | ["?"] => Ok(ClientCommand::Help),
        ["quit"] | ["exit"] | ["q"] => Ok(ClientCommand::Quit),
        ["difficulty", level] => Ok(ClientCommand::SetDifficulty(level.parse()?)),
        [row, col] => {
            let row = row
                .parse()
                .map_err(|_| format!("'{}' is not a row number", row))?;
            let col = col
                .parse()
                .map_err(|_| format!("'{}' is not a column number", col))?;
            Ok(ClientCommand::PlaceMark { row, col })
        }
        _ => Err(format!("Unknown command '{}', type 'help'", line.trim())),
    }
}
