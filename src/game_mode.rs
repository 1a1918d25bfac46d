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
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Standard,
    Relaxed,
    Challenging,
}

impl GameMode {
    pub fn grid_size(self) -> usize {
        match self {
            GameMode::Standard | GameMode::Relaxed => 50,
            GameMode::Challenging => 40,
        }
    }

    // Length of the countdown in seconds
    pub fn timer_duration(self) -> u32 {
        match self {
            GameMode::Standard => 15 * 60,
            GameMode::Relaxed => 20 * 60,
            GameMode::Challenging => 10 * 60,
        }
    }

    // Relaxed mode has no countdown at all. The duration above is
    // still stored for it but it is never counted down.
    pub fn has_countdown(self) -> bool {
        !matches!(self, GameMode::Relaxed)
    }

    // In challenging mode found words can’t be deleted
    pub fn allows_deletion(self) -> bool {
        !matches!(self, GameMode::Challenging)
    }

    // Capitalised name for messages shown to the player
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Standard => "Standard",
            GameMode::Relaxed => "Relaxed",
            GameMode::Challenging => "Challenging",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keyword = match self {
            GameMode::Standard => "standard",
            GameMode::Relaxed => "relaxed",
            GameMode::Challenging => "challenging",
        };

        write!(f, "{}", keyword)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseModeError;

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid game mode")
    }
}

impl std::error::Error for ParseModeError {
}

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<GameMode, ParseModeError> {
        match s {
            "standard" => Ok(GameMode::Standard),
            "relaxed" => Ok(GameMode::Relaxed),
            "challenging" => Ok(GameMode::Challenging),
            _ => Err(ParseModeError),
        }
    }
}
