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

//! The game session. This drives a whole day’s play: the grid, the
//! letters the player has selected so far, the found words, the score
//! and the countdown. It doesn’t do any drawing or networking itself.
//! The host owns the event loop and the HTTP requests and feeds the
//! results in, so the same logic can run in a browser, in a native UI
//! or in a test.

use std::collections::HashSet;
use std::fmt;
use chrono::NaiveDate;
use super::dictionary;
use super::game_mode::GameMode;
use super::letter_freq;
use super::letter_grid::{self, LetterGrid};
use super::path::{Cell, SelectionPath, SelectOutcome};
use super::profanity;
use super::save_state::{self, DailyState, FoundWord, GlobalStats, Store};

pub const MINIMUM_WORD_LENGTH: usize = 3;

// The rules shown one page at a time the first time the game is opened
pub static GAME_RULES: [&str; 8] = [
    "Find as many words as you can in the randomly-generated grid \
     before the timer runs out.",
    "Select adjacent letters (horizontally, vertically, or diagonally) \
     to form a word.",
    "Words must be at least 3 letters long.",
    "You cannot use the same letter cell in more than one word at a \
     time.",
    "If you think you can use a letter in a better word, you can \
     select the word to delete it.",
    "The timer stops counting down when you leave the page, so you can \
     pace yourself over the course of the day.",
    "If you want a more relaxed or challenging experience, you can \
     switch the game mode in the settings.",
    "A new grid is generated everyday.  Come back each day and try to \
     beat your score!",
];

// What happened when the player picked a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectResult {
    // The cell was added to the selection
    Extended,
    // The tail of the selection was unselected
    Shortened,
    // The cell belongs to this already-found word which the player can
    // choose to delete
    FoundWord(usize),
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyError {
    TimeUp,
    AlreadyVerifying,
    EmptyWord,
    TooShort,
    AlreadyFound,
    NothingPending,
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VerifyError::TimeUp => write!(f, "the time is up"),
            VerifyError::AlreadyVerifying => {
                write!(f, "a verification is already in progress")
            },
            VerifyError::EmptyWord => write!(f, "no letters are selected"),
            VerifyError::TooShort => {
                write!(
                    f,
                    "words must be at least {} letters long",
                    MINIMUM_WORD_LENGTH,
                )
            },
            VerifyError::AlreadyFound => write!(f, "word already found"),
            VerifyError::NothingPending => {
                write!(f, "no verification is awaiting a response")
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteError {
    ModeForbidsDeletion,
    NoSuchWord,
}

impl fmt::Display for DeleteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeleteError::ModeForbidsDeletion => {
                write!(f, "words cannot be deleted in this game mode")
            },
            DeleteError::NoSuchWord => write!(f, "no such word"),
        }
    }
}

// What the host should do after feeding a response to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyStep {
    // The dictionary accepted the word, now ask the profanity filter
    CheckProfanity,
    // The word was accepted and scored this many points
    Accepted(u32),
    // When the same word has just failed for the second time in a row
    // the host should suggest reporting it as missing
    NotAWord { suggest_report: bool },
    Profane,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VerifyPhase {
    Dictionary,
    Profanity,
}

// A verification in flight. The word and its cells are captured when
// the request begins so that the player can carry on selecting letters
// while the network round trip happens. Whatever arrives back applies
// to this snapshot and not to the live selection.
#[derive(Clone, Debug)]
pub struct Verification {
    word: String,
    path: Vec<Cell>,
    phase: VerifyPhase,
}

impl Verification {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn dictionary_url(&self) -> String {
        dictionary::lookup_url(dictionary::DEFAULT_URL, &self.word)
    }

    pub fn profanity_url(&self) -> String {
        profanity::check_url(profanity::DEFAULT_URL, &self.word)
    }
}

pub struct Game<S: Store> {
    store: S,
    mode: GameMode,
    date_seed: i64,
    grid: LetterGrid,
    daily: DailyState,
    global: GlobalStats,
    path: SelectionPath,
    verification: Option<Verification>,
    global_backup_words: HashSet<String>,
    time_remaining: u32,
    time_up: bool,
}

impl<S: Store> Game<S> {
    // Starts or resumes the game for the given day. The mode and grid
    // size come from the store, so switching modes is done by writing
    // the new mode and loading again. Loading can’t fail: anything
    // unreadable in the store falls back to a default.
    pub fn load(mut store: S, today: NaiveDate) -> Game<S> {
        let mode = save_state::game_mode(&store);
        let grid_size = save_state::grid_size(&store);
        let date_seed = letter_grid::date_seed(today, grid_size);
        let grid = LetterGrid::generate(date_seed, grid_size);

        let global = save_state::load_global(&store);
        let (daily, _) = save_state::load_daily(&mut store, date_seed);
        let time_remaining = save_state::initial_time_remaining(&store, mode);

        Game {
            store,
            mode,
            date_seed,
            grid,
            daily,
            global,
            path: SelectionPath::new(),
            verification: None,
            global_backup_words: HashSet::new(),
            time_remaining,
            time_up: false,
        }
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn date_seed(&self) -> i64 {
        self.date_seed
    }

    pub fn score(&self) -> u32 {
        self.daily.score
    }

    pub fn total_words(&self) -> u32 {
        self.daily.total_words
    }

    pub fn longest_word_length(&self) -> usize {
        self.daily.longest_word_length
    }

    pub fn daily_longest_word(&self) -> &str {
        &self.daily.daily_longest_word
    }

    pub fn global_stats(&self) -> &GlobalStats {
        &self.global
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.daily.found_words
    }

    // The cells selected so far, in selection order
    pub fn selection(&self) -> &[Cell] {
        self.path.cells()
    }

    // The word the current selection spells
    pub fn selected_word(&self) -> String {
        self.path.word(&self.grid)
    }

    pub fn is_highlighted(&self, cell: Cell) -> bool {
        self.daily.highlighted_cells.contains(&cell)
    }

    pub fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // The backup list is fetched by the host at startup, if it can.
    // Words on it count as valid even when the dictionary disagrees.
    pub fn set_global_backup_words(&mut self, words: HashSet<String>) {
        log::debug!("backup list has {} words", words.len());
        self.global_backup_words = words;
    }

    pub fn rules_seen(&self) -> bool {
        save_state::rules_seen(&self.store)
    }

    pub fn mark_rules_seen(&mut self) {
        save_state::set_rules_seen(&mut self.store);
    }

    // True once the stored puzzle no longer belongs to today, for
    // example when the page was left open overnight. The host should
    // load a fresh game.
    pub fn day_changed(&self, today: NaiveDate) -> bool {
        letter_grid::date_seed(today, self.grid.size()) != self.date_seed
    }

    pub fn attempt_select(&mut self, cell: Cell) -> SelectResult {
        if self.time_up {
            return SelectResult::Rejected;
        }

        if cell.row >= self.grid.size() || cell.col >= self.grid.size() {
            return SelectResult::Rejected;
        }

        if self.daily.highlighted_cells.contains(&cell) {
            if !self.mode.allows_deletion() {
                return SelectResult::Rejected;
            }

            // The first found path that claims the cell owns it
            let owner = self
                .daily
                .found_words
                .iter()
                .position(|found| found.path.contains(&cell));

            return match owner {
                Some(index) => SelectResult::FoundWord(index),
                None => SelectResult::Rejected,
            };
        }

        match self.path.select(cell) {
            SelectOutcome::Extended => SelectResult::Extended,
            SelectOutcome::Shortened => SelectResult::Shortened,
            SelectOutcome::Rejected => SelectResult::Rejected,
        }
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    // Starts checking the selected word. On success the returned
    // verification carries the dictionary request for the host to
    // perform, whose result comes back via dictionary_response. Only
    // one verification can be in flight at a time.
    pub fn begin_verification(
        &mut self,
    ) -> Result<&Verification, VerifyError> {
        if self.time_up {
            return Err(VerifyError::TimeUp);
        }

        if self.verification.is_some() {
            return Err(VerifyError::AlreadyVerifying);
        }

        let word = self.path.word(&self.grid);

        if word.is_empty() {
            return Err(VerifyError::EmptyWord);
        }

        if word.len() < MINIMUM_WORD_LENGTH {
            self.path.clear();
            return Err(VerifyError::TooShort);
        }

        if self.daily.found_words.iter().any(|found| found.word == word) {
            self.path.clear();
            return Err(VerifyError::AlreadyFound);
        }

        let verification = Verification {
            word,
            path: self.path.cells().to_vec(),
            phase: VerifyPhase::Dictionary,
        };

        Ok(self.verification.insert(verification))
    }

    // Feeds in the dictionary’s answer, or None if the request failed.
    // A word the dictionary doesn’t know can still be rescued by the
    // backup lists. An unknown word counts as a failed attempt.
    pub fn dictionary_response(
        &mut self,
        response: Option<(u16, &str)>,
    ) -> Result<VerifyStep, VerifyError> {
        let Some(mut verification) = self.verification.take() else {
            return Err(VerifyError::NothingPending);
        };

        if verification.phase != VerifyPhase::Dictionary {
            self.verification = Some(verification);
            return Err(VerifyError::NothingPending);
        }

        let valid = dictionary::word_is_valid(&verification.word, response)
            || self.global_backup_words.contains(&verification.word)
            || save_state::local_backup_words(&self.store)
                .contains(&verification.word);

        if !valid {
            let fails = save_state::record_failure(
                &mut self.store,
                &verification.word,
            );

            self.path.clear();

            return Ok(VerifyStep::NotAWord {
                suggest_report: fails == 2,
            });
        }

        save_state::clear_failures(&mut self.store, &verification.word);

        verification.phase = VerifyPhase::Profanity;
        self.verification = Some(verification);

        Ok(VerifyStep::CheckProfanity)
    }

    // Feeds in the profanity filter’s answer. If the filter couldn’t
    // be reached the word is given the benefit of the doubt.
    pub fn profanity_response(
        &mut self,
        response: Option<(u16, &str)>,
    ) -> Result<VerifyStep, VerifyError> {
        let Some(verification) = self.verification.take() else {
            return Err(VerifyError::NothingPending);
        };

        if verification.phase != VerifyPhase::Profanity {
            self.verification = Some(verification);
            return Err(VerifyError::NothingPending);
        }

        self.path.clear();

        if profanity::word_is_profane(&verification.word, response) {
            return Ok(VerifyStep::Profane);
        }

        Ok(VerifyStep::Accepted(self.commit_word(verification)))
    }

    // The word passed every check. Score it and make its cells
    // permanent.
    fn commit_word(&mut self, verification: Verification) -> u32 {
        let Verification { word, path, .. } = verification;

        let points = letter_freq::word_score(&word);
        self.daily.score += points;

        if self.daily.score > self.global.highest_score {
            self.global.highest_score = self.daily.score;
        }

        self.daily.highlighted_cells.extend(path.iter().copied());
        self.daily.total_words += 1;

        if word.len() > self.daily.longest_word_length {
            self.daily.longest_word_length = word.len();
            self.daily.daily_longest_word = word.clone();
        }

        if word.len() > self.global.longest_word_length {
            self.global.longest_word_length = word.len();
            self.global.longest_word = word.clone();
        }

        self.daily.found_words.push(FoundWord { word, path });

        self.save();

        points
    }

    // Takes back a found word. The score it earned is removed and its
    // cells become selectable again, except for any cell that another
    // found word also uses.
    pub fn delete_word(&mut self, index: usize) -> Result<(), DeleteError> {
        if !self.mode.allows_deletion() {
            return Err(DeleteError::ModeForbidsDeletion);
        }

        if index >= self.daily.found_words.len() {
            return Err(DeleteError::NoSuchWord);
        }

        let removed = self.daily.found_words.remove(index);

        let points = letter_freq::word_score(&removed.word);
        self.daily.score = self.daily.score.saturating_sub(points);

        self.daily.highlighted_cells = self
            .daily
            .found_words
            .iter()
            .flat_map(|found| found.path.iter().copied())
            .collect();

        self.daily.total_words = self.daily.total_words.saturating_sub(1);

        // The deleted word might have been the day’s longest, in which
        // case the title passes to the longest word still standing
        if removed.word.eq_ignore_ascii_case(&self.daily.daily_longest_word) {
            let mut longest_length = 0;
            let mut longest_word = String::new();

            for found in &self.daily.found_words {
                if found.word.len() > longest_length {
                    longest_length = found.word.len();
                    longest_word = found.word.clone();
                }
            }

            self.daily.longest_word_length = longest_length;
            self.daily.daily_longest_word = longest_word;
        }

        self.save();

        Ok(())
    }

    fn save(&mut self) {
        save_state::save(
            &mut self.store,
            self.date_seed,
            &self.daily,
            &self.global,
            self.time_remaining,
        );
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_time_up(&self) -> bool {
        self.time_up
    }

    // Counts down one second. Returns true on the tick that ends the
    // game, and only on that tick. Relaxed mode has no countdown so
    // ticks do nothing there.
    pub fn tick(&mut self) -> bool {
        if !self.mode.has_countdown() || self.time_up {
            return false;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);

        if self.time_remaining == 0 {
            self.time_up = true;
            return true;
        }

        false
    }

    // Called when the player leaves the page so that the countdown can
    // carry on from the same point later
    pub fn pause(&mut self) {
        if self.mode.has_countdown() && !self.time_up {
            save_state::save_time_remaining(
                &mut self.store,
                self.time_remaining,
            );
        }
    }

    pub fn share_message(&self) -> String {
        if self.daily.total_words == 0 {
            return "Just started today's Wordtrace!".to_string();
        }

        let word_or_words = if self.daily.total_words == 1 {
            "word"
        } else {
            "words"
        };

        format!(
            "I found {} {}, scored {}, and my longest word was \
             \"{}\" ({} letters) in today's {} Wordtrace.\n\
             Try to beat my daily score!",
            self.daily.total_words,
            word_or_words,
            self.daily.score,
            self.daily.daily_longest_word,
            self.daily.longest_word_length,
            self.mode.label(),
        )
    }

    // Switches to a different mode. The day’s progress belongs to the
    // old mode’s grid so it is thrown away, like starting a fresh day.
    pub fn change_mode(self, mode: GameMode, today: NaiveDate) -> Game<S> {
        let mut store = self.store;

        save_state::change_mode(&mut store, mode);

        Game::load(store, today)
    }

    // Wipes every stored value, including the all-time stats, and
    // starts over in the default mode
    pub fn delete_all_data(self, today: NaiveDate) -> Game<S> {
        let mut store = self.store;

        save_state::delete_all(&mut store);

        Game::load(store, today)
    }
}
