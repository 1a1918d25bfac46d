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

const MODULUS: i64 = 2147483647;
const MULTIPLIER: i64 = 16807;

// Park–Miller generator. The state is always in [1, MODULUS - 1] so
// the multiplication can’t overflow an i64 and every player sees the
// same sequence for the same seed.
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    pub fn new(seed: i64) -> SeededRandom {
        let mut state = seed % MODULUS;

        if state <= 0 {
            state += MODULUS - 1;
        }

        SeededRandom { state }
    }

    // Returns the next number in the sequence in the range [0, 1)
    pub fn next(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;

        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }
}
