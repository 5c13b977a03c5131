#![cfg(feature = "std")]

//! Text front-end: typed commands stand in for pointer events and the board
//! is drawn with ASCII characters.

use std::string::String;
use std::vec::Vec;

use crate::common::{BoardCoordinate, ShotOutcome};
use crate::game::{GamePhase, InputEvent, Player};
use crate::placement::Placement;
use crate::render::Renderer;
use crate::ship::Orientation;

/// A "pointer" typed by the user: the cell they named, if it parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPointer(pub Option<BoardCoordinate>);

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(InputEvent<TerminalPointer>),
    Help,
    Quit,
}

pub fn coord_to_string(cell: BoardCoordinate) -> String {
    let col = (b'A' + cell.x as u8) as char;
    format!("{}{}", col, cell.z + 1)
}

/// Parse a cell like `B3` (column letter, then 1-based row).
pub fn parse_coord(input: &str, board_size: usize) -> Result<BoardCoordinate, String> {
    let mut chars = input.trim().chars();
    let col_ch = chars
        .next()
        .ok_or_else(|| "Empty input".to_string())?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= board_size {
        return Err(format!("Column '{}' out of bounds", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row == 0 || row > board_size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, board_size));
    }
    Ok(BoardCoordinate::new(x, row - 1))
}

/// Parse one command line. Cells that fail to parse become an empty pick.
pub fn parse_command(line: &str, board_size: usize) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or("").to_ascii_lowercase();
    let pointer = TerminalPointer(words.next().and_then(|w| parse_coord(w, board_size).ok()));
    match verb.as_str() {
        "hover" | "h" => Ok(Command::Input(InputEvent::PointerMove(pointer))),
        "place" | "fire" | "click" | "p" | "f" => {
            Ok(Command::Input(InputEvent::PointerClick(pointer)))
        }
        "rotate" | "r" => Ok(Command::Input(InputEvent::ContextMenu(TerminalPointer(None)))),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "" => Err("Empty command".to_string()),
        other => Err(format!("Unknown command '{}'", other)),
    }
}

pub const HELP: &str = "\
Commands:
  hover B3   move the pointer to a cell (previews the ship while placing)
  place B3   place the current ship with its anchor at B3
  rotate     toggle the ship orientation
  fire C4    shoot at a cell on the opponent's board
  quit       leave the game";

/// [`Renderer`] that prints to stdout.
pub struct TerminalView {
    board_size: usize,
    phase: GamePhase,
    active: Player,
    placed: Vec<BoardCoordinate>,
    preview: Vec<BoardCoordinate>,
    hovered: Option<BoardCoordinate>,
    shots: Vec<(Player, BoardCoordinate, ShotOutcome)>,
    countdown_bucket: Option<u32>,
}

impl TerminalView {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            phase: GamePhase::Placing,
            active: Player::Home,
            placed: Vec::new(),
            preview: Vec::new(),
            hovered: None,
            shots: Vec::new(),
            countdown_bucket: None,
        }
    }

    /// Draw the board relevant to the current phase: the home fleet while
    /// placing, the opponent's waters while shooting.
    pub fn draw(&self) -> String {
        let mut out = String::new();
        out.push_str("    ");
        for x in 0..self.board_size {
            out.push(' ');
            out.push((b'A' + x as u8) as char);
        }
        out.push('\n');
        for z in 0..self.board_size {
            out.push_str(&format!("  {:2}", z + 1));
            for x in 0..self.board_size {
                let cell = BoardCoordinate::new(x, z);
                out.push(' ');
                out.push(self.glyph(cell));
            }
            out.push('\n');
        }
        match self.phase {
            GamePhase::Placing => out.push_str("  Legend: S=Ship  +=Preview  .=Water"),
            GamePhase::Shooting => out.push_str("  Legend: X=Hit  o=Miss  *=Target  .=Unknown"),
        }
        out
    }

    fn glyph(&self, cell: BoardCoordinate) -> char {
        match self.phase {
            GamePhase::Placing => {
                if self.placed.contains(&cell) {
                    'S'
                } else if self.preview.contains(&cell) {
                    '+'
                } else {
                    '.'
                }
            }
            GamePhase::Shooting => {
                let shot = self
                    .shots
                    .iter()
                    .rev()
                    .find(|(player, c, _)| *player == self.active && *c == cell);
                match shot {
                    Some((_, _, ShotOutcome::Hit)) => 'X',
                    Some((_, _, ShotOutcome::Miss)) => 'o',
                    None if self.hovered == Some(cell) => '*',
                    None => '.',
                }
            }
        }
    }
}

impl Renderer for TerminalView {
    type Pointer = TerminalPointer;

    fn pick_cell(&mut self, pointer: &TerminalPointer) -> Option<BoardCoordinate> {
        pointer.0.filter(|cell| cell.in_bounds(self.board_size))
    }

    fn render_preview(
        &mut self,
        ship_index: usize,
        anchor: Option<BoardCoordinate>,
        orientation: Orientation,
        valid: bool,
    ) {
        self.preview.clear();
        match anchor {
            Some(anchor) if valid => {
                self.preview
                    .extend((0..ship_index + 2).map(|i| orientation.step(anchor, i)));
                println!("{}", self.draw());
            }
            Some(anchor) => println!(
                "Ship {} does not fit at {} ({:?})",
                ship_index + 1,
                coord_to_string(anchor),
                orientation
            ),
            None => {}
        }
    }

    fn render_placed(&mut self, placement: &Placement) {
        self.preview.clear();
        self.placed.extend_from_slice(&placement.cells);
        println!(
            "Ship {} placed at {} ({:?})",
            placement.ship_index + 1,
            coord_to_string(placement.anchor),
            placement.orientation
        );
    }

    fn render_highlight(&mut self, cell: BoardCoordinate, hovered: bool) {
        if hovered {
            self.hovered = Some(cell);
        } else if self.hovered == Some(cell) {
            self.hovered = None;
        }
    }

    fn play_hit_animation(&mut self, cell: BoardCoordinate) {
        self.shots.push((self.active, cell, ShotOutcome::Hit));
        println!("BOOM! {} is a hit.", coord_to_string(cell));
        println!("{}", self.draw());
    }

    fn play_miss_animation(&mut self, cell: BoardCoordinate) {
        self.shots.push((self.active, cell, ShotOutcome::Miss));
        println!("Splash. {} is a miss.", coord_to_string(cell));
        println!("{}", self.draw());
    }

    fn render_countdown(&mut self, fraction: f32) {
        let bucket = (fraction * 10.0).ceil() as u32;
        if self.countdown_bucket != Some(bucket) {
            self.countdown_bucket = Some(bucket);
            let filled = bucket as usize;
            println!("  [{}{}]", "#".repeat(filled), "-".repeat(10 - filled.min(10)));
        }
    }

    fn hide_countdown(&mut self) {
        self.countdown_bucket = None;
    }

    fn render_phase(&mut self, phase: GamePhase, player: Player) {
        self.phase = phase;
        self.active = player;
        self.hovered = None;
        match phase {
            GamePhase::Placing => println!("{:?}: place your ships (lengths 2, 3, 4).", player),
            GamePhase::Shooting => {
                println!("{}", self.draw());
                println!("{:?}: fire at the {:?} fleet.", player, player.opponent());
            }
        }
    }
}
