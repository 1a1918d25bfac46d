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

//! Interpretation of responses from the profanity filter service. As
//! with the dictionary, the caller does the fetching and feeds the
//! response back in.

pub const DEFAULT_URL: &str =
    "https://www.purgomalum.com/service/containsprofanity?text=";

// The words only ever contain letters from the grid so they don’t need
// any escaping in the query string.
pub fn check_url(base_url: &str, word: &str) -> String {
    format!("{}{}", base_url, word)
}

// Decides whether the filter flagged the word. The service answers
// with the plain text “true” or “false”. A failed request or an error
// status counts as not profane so that an outage doesn’t block
// legitimate play.
pub fn word_is_profane(word: &str, response: Option<(u16, &str)>) -> bool {
    let Some((status, body)) = response else {
        log::warn!("profanity check for “{}” failed", word);
        return false;
    };

    match status {
        200..=299 => body == "true",
        _ => {
            log::warn!("profanity check for “{}”: status {}", word, status);
            false
        },
    }
}
