// Wordtrace – A daily word search game
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use clap::Parser;
use wordtrace::game_mode::GameMode;
use wordtrace::letter_grid::{self, LetterGrid};

/// Print the letter grid for a day of Wordtrace
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Date of the puzzle, like 2024-06-15. Defaults to today.
    #[arg(short, long)]
    date: Option<chrono::NaiveDate>,

    /// Game mode to take the grid size from
    #[arg(short, long, default_value_t = GameMode::Standard)]
    mode: GameMode,

    /// Print only the first N rows
    #[arg(short, long)]
    rows: Option<usize>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let size = args.mode.grid_size();
    let seed = letter_grid::date_seed(date, size);
    let grid = LetterGrid::generate(seed, size);

    let rows = args.rows.unwrap_or(size).min(size);

    for row in 0..rows {
        let line = (0..size)
            .map(|col| grid.letter(row, col))
            .collect::<String>();

        println!("{}", line);
    }
}
