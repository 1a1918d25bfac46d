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

//! Interpretation of responses from the online dictionary. The crate
//! doesn’t do any networking itself. Instead the caller is given a URL
//! to fetch and the status and body of the response are fed back in to
//! be interpreted here.

use serde::Deserialize;

pub const DEFAULT_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

// One dictionary entry for a word. The service returns an array of
// these. Only the fields that the game uses are listed.
#[derive(Clone, Debug, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

pub fn lookup_url(base_url: &str, word: &str) -> String {
    format!("{}{}", base_url, word)
}

pub fn parse_entries(body: &str) -> Result<Vec<Entry>, serde_json::Error> {
    serde_json::from_str(body)
}

// The phonetic spelling to display for an entry, ie, the first one
// that actually has a text
pub fn display_phonetic(entry: &Entry) -> Option<&str> {
    entry
        .phonetics
        .iter()
        .filter_map(|phonetic| phonetic.text.as_deref())
        .find(|text| !text.is_empty())
}

// Decides whether the dictionary accepted the word. The response is
// the status and body of the lookup, or None if the request failed
// altogether. The word counts as valid if the lookup succeeded and the
// headword of the first entry is the word we asked about. Anything
// else, including an unparsable body or an errored request, counts as
// invalid.
pub fn word_is_valid(word: &str, response: Option<(u16, &str)>) -> bool {
    let Some((status, body)) = response else {
        log::warn!("dictionary request for “{}” failed", word);
        return false;
    };

    match status {
        200..=299 => match parse_entries(body) {
            Ok(entries) => entries.first().map_or(false, |entry| {
                entry.word.to_lowercase() == word.to_lowercase()
            }),
            Err(_) => false,
        },
        404 => false,
        _ => {
            log::warn!("dictionary lookup for “{}”: status {}", word, status);
            false
        },
    }
}
