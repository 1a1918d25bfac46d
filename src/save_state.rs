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

//! Saving and restoring the game through a key-value store. The key
//! names and value formats are kept compatible with the original web
//! version of the game so that existing save data keeps working. A
//! corrupt value is never an error. It just loads as the empty default
//! so that bad data can’t break the game.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use serde::Serialize;
use serde::de::DeserializeOwned;
use super::game_mode::GameMode;
use super::path::Cell;

// Values that are cleared when a new day starts
pub const FOUND_WORDS_KEY: &str = "seededLetterGridFoundWords";
pub const FOUND_PATHS_KEY: &str = "seededLetterGridFoundPaths";
pub const HIGHLIGHTED_CELLS_KEY: &str = "seededLetterGridHighlightedCells";
pub const TOTAL_WORDS_KEY: &str = "seededLetterGridTotalWords";
pub const LONGEST_WORD_KEY: &str = "seededLetterGridLongestWord";
pub const DAILY_LONGEST_WORD_KEY: &str = "seededLetterGridDailyLongestWord";
pub const TIME_REMAINING_KEY: &str = "seededLetterGridTimeRemaining";
pub const CURRENT_SCORE_KEY: &str = "seededLetterGridCurrentScore";

// Values that survive the day rollover
pub const DATE_SEED_KEY: &str = "seededLetterGridDateSeed";
pub const GLOBAL_LONGEST_WORD_LENGTH_KEY: &str =
    "seededLetterGridGlobalLongestWordLength";
pub const GLOBAL_LONGEST_WORD_KEY: &str = "seededLetterGridGlobalLongestWord";
pub const GLOBAL_HIGHEST_SCORE_KEY: &str =
    "seededLetterGridGlobalHighestScore";
pub const GAME_MODE_KEY: &str = "seededLetterGridGameMode";
pub const GRID_SIZE_KEY: &str = "seededLetterGridSize";
pub const TIMER_DURATION_KEY: &str = "seededLetterGridTimerDuration";
pub const RULES_SEEN_KEY: &str = "seededLetterGridRulesSeen";
pub const BACKUP_WORD_LIST_KEY: &str = "seededLetterGridBackupWordList";
pub const LAST_FAILED_WORD_KEY: &str = "seededLetterGridLastFailedWord";
pub const CONSECUTIVE_FAILS_KEY: &str = "seededLetterGridConsecutiveFails";
pub const FAILED_ATTEMPTS_KEY: &str = "seededLetterGridFailedAttempts";

static ALL_KEYS: [&str; 20] = [
    FOUND_WORDS_KEY,
    FOUND_PATHS_KEY,
    HIGHLIGHTED_CELLS_KEY,
    TOTAL_WORDS_KEY,
    LONGEST_WORD_KEY,
    DAILY_LONGEST_WORD_KEY,
    TIME_REMAINING_KEY,
    CURRENT_SCORE_KEY,
    DATE_SEED_KEY,
    GLOBAL_LONGEST_WORD_LENGTH_KEY,
    GLOBAL_LONGEST_WORD_KEY,
    GLOBAL_HIGHEST_SCORE_KEY,
    GAME_MODE_KEY,
    GRID_SIZE_KEY,
    TIMER_DURATION_KEY,
    RULES_SEEN_KEY,
    BACKUP_WORD_LIST_KEY,
    LAST_FAILED_WORD_KEY,
    CONSECUTIVE_FAILS_KEY,
    FAILED_ATTEMPTS_KEY,
];

// The keys that are removed when the stored seed doesn’t match the
// day’s seed. Note that the score isn’t in the list because it is
// reset by writing zero instead.
static DAILY_KEYS: [&str; 7] = [
    FOUND_WORDS_KEY,
    HIGHLIGHTED_CELLS_KEY,
    TOTAL_WORDS_KEY,
    LONGEST_WORD_KEY,
    DAILY_LONGEST_WORD_KEY,
    TIME_REMAINING_KEY,
    FOUND_PATHS_KEY,
];

// Interface to wherever the game is persisted, for example the
// browser’s localStorage or a file. Every value is a string.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

// In-memory store. Mainly useful for tests and for hosts that do
// their own persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

// A word that the player has found along with the cells that spell it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Cell>,
}

// The day’s progress
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DailyState {
    pub found_words: Vec<FoundWord>,
    pub highlighted_cells: BTreeSet<Cell>,
    pub total_words: u32,
    pub longest_word_length: usize,
    pub daily_longest_word: String,
    pub score: u32,
}

// Stats that carry over from day to day. These only ever increase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalStats {
    pub longest_word_length: usize,
    pub longest_word: String,
    pub highest_score: u32,
}

fn get_json<S: Store, T: DeserializeOwned + Default>(
    store: &S,
    key: &str,
) -> T {
    let Some(json) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("corrupt value for {}: {}", key, e);
            T::default()
        },
    }
}

fn set_json<S: Store, T: Serialize>(store: &mut S, key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        store.set(key, &json);
    }
}

fn get_number<S: Store, T: std::str::FromStr>(
    store: &S,
    key: &str,
) -> Option<T> {
    store.get(key).and_then(|value| value.parse().ok())
}

// Highlighted cells are stored as "row_col" strings
fn cell_key(cell: Cell) -> String {
    format!("{}_{}", cell.row, cell.col)
}

fn parse_cell_key(key: &str) -> Option<Cell> {
    let (row, col) = key.split_once('_')?;

    Some(Cell::new(row.parse().ok()?, col.parse().ok()?))
}

pub fn game_mode<S: Store>(store: &S) -> GameMode {
    store
        .get(GAME_MODE_KEY)
        .and_then(|mode| mode.parse().ok())
        .unwrap_or_default()
}

// The grid size is read from its own key rather than derived from the
// mode. It is only ever "40" or "50" and anything else means the
// standard 50.
pub fn grid_size<S: Store>(store: &S) -> usize {
    match store.get(GRID_SIZE_KEY).as_deref() {
        Some("40") => 40,
        _ => 50,
    }
}

pub fn timer_duration<S: Store>(store: &S, mode: GameMode) -> u32 {
    get_number(store, TIMER_DURATION_KEY)
        .unwrap_or_else(|| mode.timer_duration())
}

// The time to put on the clock when the game starts, ie, whatever was
// left when the game was last saved, or the full duration for a new
// day
pub fn initial_time_remaining<S: Store>(store: &S, mode: GameMode) -> u32 {
    get_number(store, TIME_REMAINING_KEY)
        .filter(|&time: &u32| time > 0)
        .unwrap_or_else(|| timer_duration(store, mode))
}

pub fn save_time_remaining<S: Store>(store: &mut S, seconds: u32) {
    store.set(TIME_REMAINING_KEY, &seconds.to_string());
}

pub fn rules_seen<S: Store>(store: &S) -> bool {
    store
        .get(RULES_SEEN_KEY)
        .map_or(false, |value| !value.is_empty())
}

pub fn set_rules_seen<S: Store>(store: &mut S) {
    store.set(RULES_SEEN_KEY, "true");
}

pub fn local_backup_words<S: Store>(store: &S) -> HashSet<String> {
    get_json(store, BACKUP_WORD_LIST_KEY)
}

pub fn load_global<S: Store>(store: &S) -> GlobalStats {
    GlobalStats {
        longest_word_length: get_number(store, GLOBAL_LONGEST_WORD_LENGTH_KEY)
            .unwrap_or(0),
        longest_word: store.get(GLOBAL_LONGEST_WORD_KEY).unwrap_or_default(),
        highest_score: get_number(store, GLOBAL_HIGHEST_SCORE_KEY)
            .unwrap_or(0),
    }
}

// Loads the day’s progress for the given seed. If the stored seed
// doesn’t match then a new day has started: the daily values are
// cleared, the new seed is written and the returned flag is true.
pub fn load_daily<S: Store>(
    store: &mut S,
    date_seed: i64,
) -> (DailyState, bool) {
    let seed_string = date_seed.to_string();

    if store.get(DATE_SEED_KEY).as_deref() != Some(seed_string.as_str()) {
        log::debug!("starting a fresh day with seed {}", date_seed);

        for key in DAILY_KEYS {
            store.remove(key);
        }

        store.set(DATE_SEED_KEY, &seed_string);
        store.set(CURRENT_SCORE_KEY, "0");

        return (DailyState::default(), true);
    }

    let words: Vec<String> = get_json(store, FOUND_WORDS_KEY);
    let paths: Vec<Vec<Cell>> = get_json(store, FOUND_PATHS_KEY);

    let found_words = words
        .into_iter()
        .zip(paths)
        .map(|(word, path)| FoundWord { word, path })
        .collect();

    let highlighted_cells = get_json::<S, Vec<String>>(
        store,
        HIGHLIGHTED_CELLS_KEY,
    )
        .iter()
        .filter_map(|key| parse_cell_key(key))
        .collect();

    let daily = DailyState {
        found_words,
        highlighted_cells,
        total_words: get_number(store, TOTAL_WORDS_KEY).unwrap_or(0),
        longest_word_length: get_number(store, LONGEST_WORD_KEY).unwrap_or(0),
        daily_longest_word: store
            .get(DAILY_LONGEST_WORD_KEY)
            .unwrap_or_default(),
        score: get_number(store, CURRENT_SCORE_KEY).unwrap_or(0),
    };

    (daily, false)
}

// Writes the whole state back. This is called after every change so
// that a reload can never lose progress.
pub fn save<S: Store>(
    store: &mut S,
    date_seed: i64,
    daily: &DailyState,
    global: &GlobalStats,
    time_remaining: u32,
) {
    let words = daily
        .found_words
        .iter()
        .map(|found| found.word.as_str())
        .collect::<Vec<_>>();
    set_json(store, FOUND_WORDS_KEY, &words);

    let cells = daily
        .highlighted_cells
        .iter()
        .map(|&cell| cell_key(cell))
        .collect::<Vec<_>>();
    set_json(store, HIGHLIGHTED_CELLS_KEY, &cells);

    store.set(DATE_SEED_KEY, &date_seed.to_string());
    store.set(TOTAL_WORDS_KEY, &daily.total_words.to_string());
    store.set(LONGEST_WORD_KEY, &daily.longest_word_length.to_string());
    store.set(DAILY_LONGEST_WORD_KEY, &daily.daily_longest_word);

    let paths = daily
        .found_words
        .iter()
        .map(|found| found.path.as_slice())
        .collect::<Vec<_>>();
    set_json(store, FOUND_PATHS_KEY, &paths);

    store.set(TIME_REMAINING_KEY, &time_remaining.to_string());

    store.set(
        GLOBAL_LONGEST_WORD_LENGTH_KEY,
        &global.longest_word_length.to_string(),
    );
    store.set(GLOBAL_LONGEST_WORD_KEY, &global.longest_word);
    store.set(
        GLOBAL_HIGHEST_SCORE_KEY,
        &global.highest_score.to_string(),
    );
    store.set(CURRENT_SCORE_KEY, &daily.score.to_string());
}

// Notes a failed verification of a word and returns how many times in
// a row that same word has now failed. The count survives reloads so
// that retrying after a refresh still counts as a repeat.
pub fn record_failure<S: Store>(store: &mut S, word: &str) -> u32 {
    let last_failed = store.get(LAST_FAILED_WORD_KEY).unwrap_or_default();

    let consecutive_fails = if last_failed == word {
        get_number(store, CONSECUTIVE_FAILS_KEY).unwrap_or(0) + 1
    } else {
        1
    };

    store.set(LAST_FAILED_WORD_KEY, word);
    store.set(CONSECUTIVE_FAILS_KEY, &consecutive_fails.to_string());

    let mut failed_attempts: BTreeMap<String, u32> =
        get_json(store, FAILED_ATTEMPTS_KEY);
    *failed_attempts.entry(word.to_string()).or_insert(0) += 1;
    set_json(store, FAILED_ATTEMPTS_KEY, &failed_attempts);

    consecutive_fails
}

// Forgets the failure tracking once the word is accepted
pub fn clear_failures<S: Store>(store: &mut S, word: &str) {
    store.remove(LAST_FAILED_WORD_KEY);
    store.remove(CONSECUTIVE_FAILS_KEY);

    let mut failed_attempts: BTreeMap<String, u32> =
        get_json(store, FAILED_ATTEMPTS_KEY);

    if failed_attempts.remove(word).is_some() {
        set_json(store, FAILED_ATTEMPTS_KEY, &failed_attempts);
    }
}

// Switches the game mode. This throws away the day’s progress because
// the grid is different in the new mode. The caller is expected to
// start a fresh game afterwards.
pub fn change_mode<S: Store>(store: &mut S, mode: GameMode) {
    log::debug!("switching to {} mode", mode);

    store.set(GAME_MODE_KEY, &mode.to_string());
    store.set(CURRENT_SCORE_KEY, "0");

    store.remove(TIME_REMAINING_KEY);
    store.set(TIMER_DURATION_KEY, &mode.timer_duration().to_string());

    if mode == GameMode::Standard {
        store.remove(GRID_SIZE_KEY);
    } else {
        store.set(GRID_SIZE_KEY, &mode.grid_size().to_string());
    }

    for key in [
        FOUND_WORDS_KEY,
        HIGHLIGHTED_CELLS_KEY,
        FOUND_PATHS_KEY,
        TOTAL_WORDS_KEY,
        LONGEST_WORD_KEY,
        DAILY_LONGEST_WORD_KEY,
    ] {
        store.remove(key);
    }
}

// Removes every value the game has ever stored, including the all-time
// stats
pub fn delete_all<S: Store>(store: &mut S) {
    for key in ALL_KEYS {
        store.remove(key);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn found_word(word: &str, row: usize, first_col: usize) -> FoundWord {
        FoundWord {
            word: word.to_string(),
            path: (0..word.len())
                .map(|i| Cell::new(row, first_col + i))
                .collect(),
        }
    }

    fn example_daily() -> DailyState {
        let found_words = vec![
            found_word("CAT", 0, 0),
            found_word("TOE", 1, 2),
        ];

        let highlighted_cells = found_words
            .iter()
            .flat_map(|found| found.path.iter().copied())
            .collect();

        DailyState {
            found_words,
            highlighted_cells,
            total_words: 2,
            longest_word_length: 3,
            daily_longest_word: "CAT".to_string(),
            score: 280,
        }
    }

    fn example_global() -> GlobalStats {
        GlobalStats {
            longest_word_length: 7,
            longest_word: "EXAMPLE".to_string(),
            highest_score: 1234,
        }
    }

    #[test]
    fn memory_store() {
        let mut store = MemoryStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("a"), None);

        store.set("a", "1");
        store.set("b", "2");
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.len(), 2);

        store.set("a", "3");
        assert_eq!(store.get("a").as_deref(), Some("3"));
        assert_eq!(store.len(), 2);

        store.remove("a");
        assert_eq!(store.get("a"), None);
        store.remove("never-there");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn fresh_day_on_empty_store() {
        let mut store = MemoryStore::new();

        let (daily, fresh) = load_daily(&mut store, 2024061550);

        assert!(fresh);
        assert_eq!(daily, DailyState::default());
        assert_eq!(
            store.get(DATE_SEED_KEY).as_deref(),
            Some("2024061550"),
        );
        assert_eq!(store.get(CURRENT_SCORE_KEY).as_deref(), Some("0"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut store = MemoryStore::new();
        let daily = example_daily();
        let global = example_global();

        save(&mut store, 2024061550, &daily, &global, 456);

        let (loaded, fresh) = load_daily(&mut store, 2024061550);

        assert!(!fresh);
        assert_eq!(loaded, daily);
        assert_eq!(load_global(&store), global);
        assert_eq!(
            initial_time_remaining(&store, GameMode::Standard),
            456,
        );
    }

    #[test]
    fn stored_formats() {
        let mut store = MemoryStore::new();

        save(
            &mut store,
            2024061550,
            &example_daily(),
            &example_global(),
            456,
        );

        assert_eq!(
            store.get(FOUND_WORDS_KEY).as_deref(),
            Some("[\"CAT\",\"TOE\"]"),
        );
        assert_eq!(
            store.get(FOUND_PATHS_KEY).as_deref(),
            Some(
                "[[{\"row\":0,\"col\":0},\
                 {\"row\":0,\"col\":1},\
                 {\"row\":0,\"col\":2}],\
                 [{\"row\":1,\"col\":2},\
                 {\"row\":1,\"col\":3},\
                 {\"row\":1,\"col\":4}]]"
            ),
        );
        assert_eq!(
            store.get(HIGHLIGHTED_CELLS_KEY).as_deref(),
            Some(
                "[\"0_0\",\"0_1\",\"0_2\",\
                 \"1_2\",\"1_3\",\"1_4\"]"
            ),
        );
        assert_eq!(store.get(TOTAL_WORDS_KEY).as_deref(), Some("2"));
        assert_eq!(store.get(LONGEST_WORD_KEY).as_deref(), Some("3"));
        assert_eq!(
            store.get(DAILY_LONGEST_WORD_KEY).as_deref(),
            Some("CAT"),
        );
        assert_eq!(store.get(CURRENT_SCORE_KEY).as_deref(), Some("280"));
        assert_eq!(store.get(TIME_REMAINING_KEY).as_deref(), Some("456"));
        assert_eq!(
            store.get(GLOBAL_LONGEST_WORD_LENGTH_KEY).as_deref(),
            Some("7"),
        );
        assert_eq!(
            store.get(GLOBAL_HIGHEST_SCORE_KEY).as_deref(),
            Some("1234"),
        );
    }

    #[test]
    fn day_rollover_clears_daily_values() {
        let mut store = MemoryStore::new();

        save(
            &mut store,
            2024061550,
            &example_daily(),
            &example_global(),
            456,
        );

        // The next day
        let (daily, fresh) = load_daily(&mut store, 2024061650);

        assert!(fresh);
        assert_eq!(daily, DailyState::default());

        for key in DAILY_KEYS {
            assert_eq!(store.get(key), None);
        }

        assert_eq!(store.get(CURRENT_SCORE_KEY).as_deref(), Some("0"));

        // The all-time stats survive
        assert_eq!(load_global(&store), example_global());
    }

    #[test]
    fn corrupt_values_load_as_defaults() {
        let mut store = MemoryStore::new();

        store.set(DATE_SEED_KEY, "2024061550");
        store.set(FOUND_WORDS_KEY, "not json at all");
        store.set(FOUND_PATHS_KEY, "{\"wrong\": \"shape\"}");
        store.set(HIGHLIGHTED_CELLS_KEY, "[\"3_4\", \"garbage\", \"5\"]");
        store.set(TOTAL_WORDS_KEY, "twelve");
        store.set(CURRENT_SCORE_KEY, "-3");

        let (daily, fresh) = load_daily(&mut store, 2024061550);

        assert!(!fresh);
        assert!(daily.found_words.is_empty());
        assert_eq!(daily.total_words, 0);
        assert_eq!(daily.score, 0);

        // The one well-formed cell is kept
        let cells = daily.highlighted_cells.iter().copied()
            .collect::<Vec<_>>();
        assert_eq!(cells, vec![Cell::new(3, 4)]);
    }

    #[test]
    fn words_and_paths_pair_up() {
        let mut store = MemoryStore::new();

        store.set(DATE_SEED_KEY, "2024061550");
        store.set(FOUND_WORDS_KEY, "[\"CAT\",\"DOG\"]");
        // Only one path survived
        store.set(FOUND_PATHS_KEY, "[[{\"row\":0,\"col\":0}]]");

        let (daily, _) = load_daily(&mut store, 2024061550);

        assert_eq!(daily.found_words.len(), 1);
        assert_eq!(daily.found_words[0].word, "CAT");
    }

    #[test]
    fn mode_and_size() {
        let mut store = MemoryStore::new();

        assert_eq!(game_mode(&store), GameMode::Standard);
        assert_eq!(grid_size(&store), 50);

        store.set(GAME_MODE_KEY, "challenging");
        store.set(GRID_SIZE_KEY, "40");
        assert_eq!(game_mode(&store), GameMode::Challenging);
        assert_eq!(grid_size(&store), 40);

        store.set(GAME_MODE_KEY, "yolo");
        store.set(GRID_SIZE_KEY, "45");
        assert_eq!(game_mode(&store), GameMode::Standard);
        assert_eq!(grid_size(&store), 50);
    }

    #[test]
    fn timer_initialisation() {
        let mut store = MemoryStore::new();

        // Nothing stored: the mode’s duration
        assert_eq!(
            initial_time_remaining(&store, GameMode::Standard),
            900,
        );
        assert_eq!(
            initial_time_remaining(&store, GameMode::Challenging),
            600,
        );

        // A stored duration wins over the mode’s
        store.set(TIMER_DURATION_KEY, "333");
        assert_eq!(
            initial_time_remaining(&store, GameMode::Standard),
            333,
        );

        // Positive remaining time wins over everything
        store.set(TIME_REMAINING_KEY, "42");
        assert_eq!(
            initial_time_remaining(&store, GameMode::Standard),
            42,
        );

        // But zero or nonsense falls back to the duration
        store.set(TIME_REMAINING_KEY, "0");
        assert_eq!(
            initial_time_remaining(&store, GameMode::Standard),
            333,
        );
        store.set(TIME_REMAINING_KEY, "soon");
        assert_eq!(
            initial_time_remaining(&store, GameMode::Standard),
            333,
        );
    }

    #[test]
    fn failure_tracking() {
        let mut store = MemoryStore::new();

        assert_eq!(record_failure(&mut store, "ZZZT"), 1);
        assert_eq!(record_failure(&mut store, "ZZZT"), 2);
        assert_eq!(record_failure(&mut store, "ZZZT"), 3);

        // A different word starts over
        assert_eq!(record_failure(&mut store, "QQQX"), 1);
        assert_eq!(record_failure(&mut store, "ZZZT"), 1);

        // The per-word tally keeps the full history
        assert_eq!(
            store.get(FAILED_ATTEMPTS_KEY).as_deref(),
            Some("{\"QQQX\":1,\"ZZZT\":4}"),
        );

        clear_failures(&mut store, "ZZZT");

        assert_eq!(store.get(LAST_FAILED_WORD_KEY), None);
        assert_eq!(store.get(CONSECUTIVE_FAILS_KEY), None);
        assert_eq!(
            store.get(FAILED_ATTEMPTS_KEY).as_deref(),
            Some("{\"QQQX\":1}"),
        );

        // Clearing the last tracked word writes back an empty tally
        clear_failures(&mut store, "QQQX");
        assert_eq!(store.get(FAILED_ATTEMPTS_KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn clearing_failures_for_untracked_word() {
        let mut store = MemoryStore::new();

        // Shouldn’t write a tally that wasn’t there
        clear_failures(&mut store, "CAT");
        assert_eq!(store.get(FAILED_ATTEMPTS_KEY), None);
    }

    #[test]
    fn mode_change() {
        let mut store = MemoryStore::new();

        save(
            &mut store,
            2024061550,
            &example_daily(),
            &example_global(),
            456,
        );

        change_mode(&mut store, GameMode::Challenging);

        assert_eq!(store.get(GAME_MODE_KEY).as_deref(), Some("challenging"));
        assert_eq!(store.get(GRID_SIZE_KEY).as_deref(), Some("40"));
        assert_eq!(store.get(TIMER_DURATION_KEY).as_deref(), Some("600"));
        assert_eq!(store.get(CURRENT_SCORE_KEY).as_deref(), Some("0"));
        assert_eq!(store.get(FOUND_WORDS_KEY), None);
        assert_eq!(store.get(FOUND_PATHS_KEY), None);
        assert_eq!(store.get(HIGHLIGHTED_CELLS_KEY), None);
        assert_eq!(store.get(TIME_REMAINING_KEY), None);

        // The all-time stats survive a mode change
        assert_eq!(load_global(&store), example_global());

        change_mode(&mut store, GameMode::Relaxed);
        assert_eq!(store.get(GRID_SIZE_KEY).as_deref(), Some("50"));
        assert_eq!(store.get(TIMER_DURATION_KEY).as_deref(), Some("1200"));

        // Standard mode leaves the size key unset
        change_mode(&mut store, GameMode::Standard);
        assert_eq!(store.get(GRID_SIZE_KEY), None);
        assert_eq!(store.get(TIMER_DURATION_KEY).as_deref(), Some("900"));
    }

    #[test]
    fn rules() {
        let mut store = MemoryStore::new();

        assert!(!rules_seen(&store));
        set_rules_seen(&mut store);
        assert!(rules_seen(&store));
    }

    #[test]
    fn backup_words() {
        let mut store = MemoryStore::new();

        assert!(local_backup_words(&store).is_empty());

        store.set(BACKUP_WORD_LIST_KEY, "[\"ZORB\",\"PHABLET\"]");

        let words = local_backup_words(&store);
        assert_eq!(words.len(), 2);
        assert!(words.contains("ZORB"));

        store.set(BACKUP_WORD_LIST_KEY, "oops");
        assert!(local_backup_words(&store).is_empty());
    }

    #[test]
    fn delete_all_data() {
        let mut store = MemoryStore::new();

        save(
            &mut store,
            2024061550,
            &example_daily(),
            &example_global(),
            456,
        );
        set_rules_seen(&mut store);
        change_mode(&mut store, GameMode::Relaxed);
        record_failure(&mut store, "ZZZT");

        delete_all(&mut store);

        assert!(store.is_empty());
    }
}
