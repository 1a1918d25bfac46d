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

use std::fmt;
use chrono::Datelike;
use super::random::SeededRandom;
use super::letter_freq;

// A square grid of letters generated from a seed. The same seed and
// size always produce the same grid so that everybody gets the same
// puzzle on the same day.
pub struct LetterGrid {
    size: usize,
    letters: Vec<char>,
}

// Seed for the grid of the given date. The digits of the seed are the
// year, the zero-padded month and day and then the grid size, so the
// same day gets a different grid for each size. The grid size is
// always two digits.
pub fn date_seed(date: chrono::NaiveDate, grid_size: usize) -> i64 {
    date.year() as i64 * 1_000_000
        + date.month() as i64 * 10_000
        + date.day() as i64 * 100
        + grid_size as i64
}

impl LetterGrid {
    pub fn generate(seed: i64, size: usize) -> LetterGrid {
        let mut random = SeededRandom::new(seed);
        let mut letters = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                // The first column of each row draws from the unigram
                // distribution and the rest follow on from the letter
                // to their left, so rows read vaguely like English
                // while columns are independent.
                let letter = if col == 0 {
                    letter_freq::random_letter(&mut random)
                } else {
                    let preceding = letters[row * size + col - 1];
                    letter_freq::random_follower(preceding, &mut random)
                };

                letters.push(letter);
            }
        }

        LetterGrid { size, letters }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn letter(&self, row: usize, col: usize) -> char {
        self.letters[row * self.size + col]
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }

            for col in 0..self.size {
                write!(f, "{}", self.letter(row, col))?;
            }
        }

        Ok(())
    }
}
