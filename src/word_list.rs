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

use std::collections::HashSet;

// Parses the contents of a backup word list. The list has one word per
// line and is case-insensitive. Blank lines and lines starting with
// “#” are skipped.
pub fn parse(contents: &str) -> HashSet<String> {
    contents
        .split('\n')
        .map(|line| line.trim().to_uppercase())
        .filter(|word| !word.is_empty() && !word.starts_with('#'))
        .collect()
}
