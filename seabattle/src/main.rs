// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    collections::BTreeSet,
    error::Error,
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::info;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use fleetyard::{
    board::{Board, Cell, CellId, CellState, Side, DEFAULT_BOARD_SIZE},
    fleet::{Fleet, FleetConfig},
    placement::run_automatic_placement,
    session::{PlacementPreview, PlacementSession, SessionError},
    ships::Ship,
};

mod fleet_arg;
mod logging;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    let default_size = DEFAULT_BOARD_SIZE.to_string();
    let matches = App::new("Sea Battle")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Place a fleet on a naval combat board from the command line.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("N")
                .help("side length of both boards")
                .takes_value(true)
                .default_value(&default_size)
                .validator(|size| match size.parse::<usize>() {
                    Ok(0) | Err(_) => Err(format!("invalid board size: {}", size)),
                    Ok(_) => Ok(()),
                }),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("CLASSES")
                .help("ship classes as <name>:<length>x<count>, comma separated")
                .takes_value(true)
                .validator(fleet_arg::validate),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the enemy's placement")
                .takes_value(true)
                .validator(|seed| {
                    seed.parse::<u64>()
                        .map(|_| ())
                        .map_err(|_| format!("invalid seed: {}", seed))
                }),
        )
        .get_matches();

    let size = matches
        .value_of("size")
        .map_or(Ok(DEFAULT_BOARD_SIZE), str::parse::<usize>)?;
    let config = match matches.value_of("fleet") {
        Some(classes) => fleet_arg::parse(classes)?,
        None => FleetConfig::standard(),
    };
    let mut rng = make_rng(&matches)?;

    let (enemy_board, enemy_fleet) = run_automatic_placement(&config, size, &mut rng)?;
    info!("enemy fleet placed");

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut session = PlacementSession::begin(Side::Player, &config, size)?;
    if !place_fleet(&mut session, &mut input)? {
        return Ok(());
    }

    println!();
    println!("Your fleet:");
    show_fleet_board(session.board(), session.fleet(), None);
    println!();
    println!("Enemy fleet:");
    show_fleet_board(&enemy_board, &enemy_fleet, None);
    Ok(())
}

/// Seeded rng if `--seed` was given, otherwise seeded from the os.
fn make_rng(matches: &ArgMatches) -> Result<StdRng, Box<dyn Error>> {
    Ok(match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    })
}

/// Drive the session from user input. Returns false if the user quit before the fleet was
/// complete.
fn place_fleet(
    session: &mut PlacementSession,
    input: &mut InputReader<impl BufRead>,
) -> Result<bool, SessionError> {
    enum Command {
        Hover(usize, usize),
        Leave,
        Rotate,
        Place,
        Put(usize, usize),
        Show,
        Help,
        Quit,
    }
    /// Matcher for the commands that take a cell.
    static AT_CELL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?P<cmd>hover|enter|put)\s+
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$",
        )
        .unwrap()
    });

    println!("Place your ships. Type help or ? for commands.");
    while !session.is_complete() {
        println!();
        print_pending(session.fleet());
        println!("Orientation: {}", session.orientation());
        show_fleet_board(session.board(), session.fleet(), session.preview().as_ref());

        let cmd = input.read_input_lower(">", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "leave" | "l" => Some(Command::Leave),
            "rotate" | "r" | "toggle" => Some(Command::Rotate),
            "place" | "p" | "confirm" => Some(Command::Place),
            "show" => Some(Command::Show),
            "quit" | "q" | "exit" => Some(Command::Quit),
            other => match AT_CELL.captures(other) {
                Some(captures) => {
                    let row = captures["row"].parse::<usize>();
                    let col = captures["col"].parse::<usize>();
                    let (row, col) = match (row, col) {
                        (Ok(row), Ok(col)) => (row, col),
                        _ => {
                            println!("invalid cell: {} {}", &captures["row"], &captures["col"]);
                            return None;
                        }
                    };
                    match &captures["cmd"] {
                        "put" => Some(Command::Put(row, col)),
                        _ => Some(Command::Hover(row, col)),
                    }
                }
                None => {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            },
        });
        let cmd = match cmd {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("failed to read input: {}", err);
                return Ok(false);
            }
        };

        match cmd {
            Command::Hover(row, col) => {
                if let Some(None) = hover(session, row, col)? {
                    println!("The {} does not fit there.", current_kind(session));
                }
            }
            Command::Leave => session.on_reference_cell_left()?,
            Command::Rotate => {
                if session.on_toggle_orientation()?.is_none() {
                    println!(
                        "Orientation is {}, but nothing is previewed in it.",
                        session.orientation()
                    );
                }
            }
            Command::Place => confirm(session)?,
            Command::Put(row, col) => match hover(session, row, col)? {
                Some(Some(_)) => confirm(session)?,
                Some(None) => println!("The {} does not fit there.", current_kind(session)),
                None => {}
            },
            Command::Show => {}
            Command::Help => {
                println!(
                    "Available Commands:
    hover <row> <col>   preview the current ship with its first cell at the given cell.
    leave               clear the preview.
    rotate              switch between horizontal and vertical.
    place               place the previewed ship.
    put <row> <col>     preview and place in one step.
    show                show the board again.
    quit                stop without placing the rest of the fleet.

Rows and columns count from 1. Horizontal ships extend to the right, vertical ships
extend downward.",
                );
            }
            Command::Quit => return Ok(false),
        }
    }
    println!("All ships placed.");
    Ok(true)
}

/// Enter the given cell. Returns `None` if the cell is not on the board.
fn hover(
    session: &mut PlacementSession,
    row: usize,
    col: usize,
) -> Result<Option<Option<PlacementPreview>>, SessionError> {
    match session.on_reference_cell_entered(CellId::new(Side::Player, Cell::new(row, col))) {
        Ok(preview) => Ok(Some(preview)),
        Err(SessionError::OutOfBounds(err)) => {
            println!("{}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn confirm(session: &mut PlacementSession) -> Result<(), SessionError> {
    let kind = current_kind(session).to_owned();
    if session.preview().is_none() {
        println!("Nothing to place, hover over a cell first.");
    } else if !session.on_confirm()? {
        println!("Placed the {}.", kind);
    }
    Ok(())
}

/// Class of the ship being placed.
fn current_kind(session: &PlacementSession) -> &str {
    session.current_ship().map_or("fleet", Ship::kind)
}

fn print_pending(fleet: &Fleet) {
    let mut pending = fleet.pending();
    if let Some(first) = pending.next() {
        print!("Remaining ships to place: {}", ShipName(first));
        for ship in pending {
            print!(", {}", ShipName(ship));
        }
        println!();
    }
}

/// Print a board with its ships, the padding of ships whose padding is visible, and an
/// optional preview.
fn show_fleet_board(board: &Board, fleet: &Fleet, preview: Option<&PlacementPreview>) {
    enum ShownCell {
        Empty,
        Ship,
        Padding,
        Preview,
    }
    impl fmt::Display for ShownCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self {
                ShownCell::Empty => "~~",
                ShownCell::Ship => "##",
                ShownCell::Padding => "..",
                ShownCell::Preview => "[]",
            })
        }
    }
    let visible_padding: BTreeSet<Cell> = fleet
        .iter()
        .filter(|ship| ship.padding_visible())
        .flat_map(|ship| ship.padding_cells().iter().copied())
        .collect();
    let visible_padding = &visible_padding;
    show_board(
        board.size(),
        board.iter_rows().map(move |row| {
            row.map(move |(cell, state)| match state {
                _ if preview.map_or(false, |preview| preview.contains(&cell)) => {
                    ShownCell::Preview
                }
                CellState::Ship => ShownCell::Ship,
                CellState::Padding if visible_padding.contains(&cell) => ShownCell::Padding,
                CellState::Padding | CellState::Empty => ShownCell::Empty,
            })
        }),
    )
}

/// Show the board by printing the grid with 1-based row and column labels.
fn show_board(size: usize, rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("   ");
    for i in 1..=size {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i + 1);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Display helper that prints a ship's class and length.
struct ShipName<'a>(&'a Ship);

impl fmt::Display for ShipName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.0.kind(), self.0.length())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. End of input reads as `quit`.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            print!("{} ", prompt);
            io::stdout().flush()?;
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                println!();
                self.buf.push_str("quit");
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }
}
