//! Terminal front end: coordinate parsing, board rendering and the command
//! loop driving a [`Session`].

use std::fmt::{self, Write as _};
use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::{
    board::{CellStatus, Coordinate},
    common::ShotOutcome,
    config::MAX_BOARD_SIZE,
    game::{GameSituation, GameState},
    session::Session,
    ship::ShipId,
};

/// Why a coordinate string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    Empty,
    MissingRow,
    InvalidColumn(char),
    ColumnOutOfRange { column: char, last: char },
    InvalidRow(String),
    RowOutOfRange { row: usize, max: usize },
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordParseError::Empty => write!(f, "Empty input"),
            CoordParseError::MissingRow => {
                write!(f, "Too short - need column letter and row number (e.g., A5)")
            }
            CoordParseError::InvalidColumn(c) => {
                write!(f, "Invalid column '{}' - must be a letter", c)
            }
            CoordParseError::ColumnOutOfRange { column, last } => {
                write!(f, "Column '{}' out of bounds - must be A-{}", column, last)
            }
            CoordParseError::InvalidRow(s) => write!(f, "Invalid row '{}' - must be a number", s),
            CoordParseError::RowOutOfRange { row, max } => {
                write!(f, "Row {} out of bounds - must be 1-{}", row, max)
            }
        }
    }
}

impl std::error::Error for CoordParseError {}

/// Letter of a column, `None` past `Z`.
fn column_letter(column: usize) -> Option<char> {
    u8::try_from(column)
        .ok()
        .filter(|&c| usize::from(c) < MAX_BOARD_SIZE)
        .map(|c| char::from(b'A' + c))
}

/// Glyph for a revealed ship cell: its fleet number in base 36, `#` once the
/// digits run out.
fn ship_glyph(id: ShipId) -> char {
    u32::try_from(id.0)
        .ok()
        .and_then(|n| std::char::from_digit(n, 36))
        .unwrap_or('#')
}

/// Format a coordinate the way players type it, e.g. `(4, 0)` -> `A5`.
/// Columns without a letter are shown as `?`.
pub fn coord_label(coord: Coordinate) -> String {
    format!(
        "{}{}",
        column_letter(coord.column).unwrap_or('?'),
        coord.row + 1
    )
}

/// Parse `A5`-style input for a `size`×`size` board. The letter picks the
/// column (case-insensitive), the number the row, both starting at 1/`A`.
pub fn parse_coord(input: &str, size: usize) -> Result<Coordinate, CoordParseError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or(CoordParseError::Empty)?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(CoordParseError::InvalidColumn(col_ch));
    }
    let column = (col_ch as u8 - b'A') as usize;
    if column >= size {
        return Err(CoordParseError::ColumnOutOfRange {
            column: col_ch,
            last: column_letter(size.saturating_sub(1)).unwrap_or('Z'),
        });
    }
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err(CoordParseError::MissingRow);
    }
    if !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordParseError::InvalidRow(row_str.to_string()));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| CoordParseError::InvalidRow(row_str.to_string()))?;
    if row == 0 || row > size {
        return Err(CoordParseError::RowOutOfRange { row, max: size });
    }
    Ok(Coordinate::new(row - 1, column))
}

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fire(Coordinate),
    ToggleShips,
    Reset,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str, size: usize) -> Result<Self, CoordParseError> {
        let line = line.trim();
        Ok(match line.to_ascii_lowercase().as_str() {
            "show" | "hide" | "toggle" => Command::ToggleShips,
            "reset" | "restart" | "new" => Command::Reset,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Fire(parse_coord(line, size)?),
        })
    }
}

/// Draw the battlefield. Ships (with their fleet number) are only drawn while
/// the state says they are visible.
pub fn render_board(state: &GameState) -> String {
    let size = state.battlefield().size();
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..size {
        let _ = write!(out, " {}", column_letter(c).unwrap_or('?'));
    }
    out.push('\n');
    for row in state.battlefield().rows() {
        let _ = write!(out, " {:2} ", row.first().map_or(0, |c| c.row) + 1);
        for cell in row {
            let ch = match cell.status {
                CellStatus::Hit => 'X',
                CellStatus::Miss => 'o',
                CellStatus::Ship if state.ships_visible() => {
                    cell.ship_id.map_or('S', ship_glyph)
                }
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    if state.ships_visible() {
        out.push_str("    Legend: 0-9/a-z=Ship number  #=Ship 36+  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Counters, sunk ships and the latest message.
pub fn render_status(state: &GameState) -> String {
    format!(
        "Hits: {}  Misses: {}  Shots: {}  Ships sunk: {}/{}\n{}\n",
        state.total_hits(),
        state.total_misses(),
        state.total_shots(),
        state.sunk_count(),
        state.ships().len(),
        state.message()
    )
}

/// Completion banner, shown once the game is over.
pub fn render_banner(state: &GameState) -> Option<String> {
    match state.situation() {
        GameSituation::Playing => None,
        GameSituation::GameOver => Some(format!(
            "*** GAME OVER ***\nShots: {}  Hits: {}  Misses: {}\nYour accuracy: {}%\nType 'reset' to play again.\n",
            state.total_shots(),
            state.total_hits(),
            state.total_misses(),
            state.accuracy()
        )),
    }
}

const HELP: &str = "\
Commands:
  <letter><number>  fire at a coordinate, e.g. A5
  show              show or hide the enemy ships
  reset             start a new game
  help              this text
  quit              leave the game
";

/// Read commands from `input` until it ends or the player quits, writing the
/// board and status to `output` after every command.
///
/// Boards wider than the alphabet cannot be addressed by `A5`-style input and
/// are rejected with `InvalidInput` before anything is written.
pub fn run<R, B, W>(session: &mut Session<R>, mut input: B, mut output: W) -> io::Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    let size = session.state().battlefield().size();
    if size > MAX_BOARD_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "board size {} exceeds the maximum of {} for lettered columns",
                size, MAX_BOARD_SIZE
            ),
        ));
    }
    show(session.state(), &mut output)?;
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line, size) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => {
                write!(output, "{}", HELP)?;
                continue;
            }
            Ok(Command::ToggleShips) => {
                session.toggle_ships();
            }
            Ok(Command::Reset) => {
                session.reset();
            }
            Ok(Command::Fire(coord)) => match session.fire(coord) {
                Ok(ShotOutcome::GameOver) | Ok(ShotOutcome::AlreadyShot) => {}
                Ok(outcome) => {
                    log::debug!("{} -> {:?}", coord_label(coord), outcome);
                }
                Err(e) => {
                    writeln!(output, "Error: {}", e)?;
                    continue;
                }
            },
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        }
        show(session.state(), &mut output)?;
    }
}

fn show<W: Write>(state: &GameState, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", render_board(state))?;
    write!(output, "{}", render_status(state))?;
    if let Some(banner) = render_banner(state) {
        write!(output, "{}", banner)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Battlefield,
        config::GameConfig,
        placement::place_ship,
        ship::Orientation,
    };

    #[test]
    fn parses_letter_then_number() {
        assert_eq!(parse_coord("A1", 10), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coord("a5", 10), Ok(Coordinate::new(4, 0)));
        assert_eq!(parse_coord(" J10 ", 10), Ok(Coordinate::new(9, 9)));
        assert_eq!(parse_coord("c7", 10), Ok(Coordinate::new(6, 2)));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert_eq!(parse_coord("", 10), Err(CoordParseError::Empty));
        assert_eq!(parse_coord("A", 10), Err(CoordParseError::MissingRow));
        assert_eq!(parse_coord("5A", 10), Err(CoordParseError::InvalidColumn('5')));
        assert_eq!(
            parse_coord("K1", 10),
            Err(CoordParseError::ColumnOutOfRange { column: 'K', last: 'J' })
        );
        assert_eq!(
            parse_coord("A0", 10),
            Err(CoordParseError::RowOutOfRange { row: 0, max: 10 })
        );
        assert_eq!(
            parse_coord("A11", 10),
            Err(CoordParseError::RowOutOfRange { row: 11, max: 10 })
        );
        assert_eq!(
            parse_coord("A+1", 10),
            Err(CoordParseError::InvalidRow("+1".to_string()))
        );
    }

    #[test]
    fn label_matches_parser() {
        let c = Coordinate::new(4, 0);
        assert_eq!(coord_label(c), "A5");
        assert_eq!(parse_coord(&coord_label(c), 10), Ok(c));
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse("SHOW", 10), Ok(Command::ToggleShips));
        assert_eq!(Command::parse("restart\n", 10), Ok(Command::Reset));
        assert_eq!(Command::parse("?", 10), Ok(Command::Help));
        assert_eq!(Command::parse("quit", 10), Ok(Command::Quit));
        assert_eq!(
            Command::parse("b2", 10),
            Ok(Command::Fire(Coordinate::new(1, 1)))
        );
    }

    fn one_ship_state() -> GameState {
        let mut grid = Battlefield::new(3);
        let ship = place_ship(
            &mut grid,
            ShipId(0),
            2,
            Coordinate::new(0, 0),
            Orientation::Horizontal,
        )
        .unwrap();
        GameState::new(grid, vec![ship])
    }

    #[test]
    fn board_hides_ships_until_toggled() {
        let mut state = one_ship_state();
        state.fire(Coordinate::new(2, 2)).unwrap();
        let hidden = render_board(&state);
        assert!(hidden.contains(" 1  . . .\n"));
        assert!(hidden.contains(" 3  . . o\n"));

        state.toggle_ships();
        let shown = render_board(&state);
        assert!(shown.contains(" 1  0 0 .\n"));
    }

    #[test]
    fn banner_only_after_game_over() {
        let mut state = one_ship_state();
        assert!(render_banner(&state).is_none());
        state.fire(Coordinate::new(1, 1)).unwrap();
        state.fire(Coordinate::new(0, 0)).unwrap();
        state.fire(Coordinate::new(0, 1)).unwrap();
        let banner = render_banner(&state).unwrap();
        assert!(banner.contains("Your accuracy: 67%"));
        assert!(render_status(&state).contains("Ships sunk: 1/1"));
    }

    #[test]
    fn glyphs_cover_large_fleets() {
        assert_eq!(ship_glyph(ShipId(0)), '0');
        assert_eq!(ship_glyph(ShipId(11)), 'b');
        assert_eq!(ship_glyph(ShipId(35)), 'z');
        assert_eq!(ship_glyph(ShipId(36)), '#');
        assert_eq!(ship_glyph(ShipId(usize::MAX)), '#');

        let mut grid = Battlefield::new(3);
        let a = place_ship(&mut grid, ShipId(11), 1, Coordinate::new(0, 0), Orientation::Horizontal)
            .unwrap();
        let b = place_ship(&mut grid, ShipId(40), 1, Coordinate::new(0, 1), Orientation::Horizontal)
            .unwrap();
        let mut state = GameState::new(grid, vec![a, b]);
        state.toggle_ships();
        let shown = render_board(&state);
        assert!(shown.contains(" 1  b # .\n"));
        assert!(shown.contains("0-9/a-z=Ship number  #=Ship 36+"));
    }

    #[test]
    fn column_letters_stop_at_z() {
        assert_eq!(column_letter(0), Some('A'));
        assert_eq!(column_letter(25), Some('Z'));
        assert_eq!(column_letter(26), None);
        assert_eq!(column_letter(300), None);
        assert_eq!(coord_label(Coordinate::new(0, 300)), "?1");
    }

    #[test]
    fn oversized_board_renders_without_letters_and_is_refused() {
        let config = GameConfig {
            size: 200,
            ..GameConfig::default()
        };
        let mut session = Session::seeded(config, 1);

        let board = render_board(session.state());
        assert!(board.starts_with("     A B"));
        assert!(board.contains(" Z ? ?"));
        assert!(board.contains("200 "));

        let mut out = Vec::new();
        let err = run(&mut session, io::Cursor::new("a1\n"), &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
        assert_eq!(session.state().total_shots(), 0);
    }
}
