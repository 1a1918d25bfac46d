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

use super::random::SeededRandom;

// Relative frequencies of letters in English text. The exact numbers
// matter because the daily grid is generated from them with a seeded
// random number generator, so changing a weight changes every grid.
pub const UNIGRAM_WEIGHTS: [(char, u32); 26] = [
    ('A', 82),
    ('B', 15),
    ('C', 28),
    ('D', 43),
    ('E', 127),
    ('F', 22),
    ('G', 20),
    ('H', 61),
    ('I', 70),
    ('J', 2),
    ('K', 8),
    ('L', 40),
    ('M', 24),
    ('N', 67),
    ('O', 75),
    ('P', 19),
    ('Q', 1),
    ('R', 60),
    ('S', 63),
    ('T', 91),
    ('U', 28),
    ('V', 10),
    ('W', 24),
    ('X', 2),
    ('Y', 20),
    ('Z', 1),
];

// The highest weight in UNIGRAM_WEIGHTS, ie, the weight of E
pub const MAX_WEIGHT: u32 = 127;

// Weights for the letter that follows a given letter, indexed by the
// preceding letter. The order of the entries matters for the weighted
// draw, not just the weights.
const BIGRAM_WEIGHTS: [&[(char, u32)]; 26] = [
    // A
    &[
        ('N', 7),
        ('T', 6),
        ('S', 4),
        ('R', 4),
        ('L', 3),
        ('V', 2),
        ('C', 2),
        ('D', 2),
        ('G', 2),
        ('M', 2),
        ('P', 2),
        ('B', 2),
        ('Y', 2),
    ],
    // B
    &[
        ('E', 20),
        ('L', 5),
        ('O', 5),
        ('U', 5),
        ('A', 3),
        ('I', 3),
        ('R', 3),
        ('Y', 3),
    ],
    // C
    &[
        ('H', 15),
        ('O', 10),
        ('E', 8),
        ('A', 5),
        ('K', 5),
        ('L', 3),
        ('R', 3),
        ('T', 3),
        ('I', 2),
        ('U', 2),
    ],
    // D
    &[
        ('E', 15),
        ('I', 8),
        ('O', 5),
        ('A', 4),
        ('R', 3),
        ('S', 3),
        ('U', 2),
    ],
    // E
    &[
        ('R', 12),
        ('S', 10),
        ('N', 8),
        ('D', 7),
        ('A', 5),
        ('L', 5),
        ('V', 4),
        ('C', 3),
        ('T', 3),
        ('X', 2),
        ('P', 2),
    ],
    // F
    &[
        ('O', 15),
        ('F', 10),
        ('E', 8),
        ('I', 5),
        ('L', 3),
        ('A', 2),
        ('R', 2),
        ('T', 2),
        ('U', 2),
    ],
    // G
    &[
        ('R', 12),
        ('H', 10),
        ('E', 8),
        ('O', 5),
        ('A', 3),
        ('I', 3),
        ('L', 3),
        ('N', 3),
        ('U', 3),
    ],
    // H
    &[
        ('E', 30),
        ('A', 10),
        ('I', 8),
        ('O', 5),
        ('T', 3),
        ('U', 2),
    ],
    // I
    &[
        ('N', 15),
        ('S', 10),
        ('T', 8),
        ('C', 5),
        ('L', 5),
        ('O', 4),
        ('V', 4),
        ('D', 3),
        ('G', 3),
        ('M', 3),
        ('P', 3),
        ('R', 3),
    ],
    // J
    &[
        ('U', 8),
        ('O', 5),
        ('A', 3),
        ('E', 2),
    ],
    // K
    &[
        ('E', 10),
        ('I', 5),
        ('N', 3),
        ('S', 2),
    ],
    // L
    &[
        ('L', 15),
        ('Y', 10),
        ('E', 8),
        ('I', 5),
        ('A', 4),
        ('O', 3),
        ('D', 2),
        ('S', 2),
        ('U', 2),
    ],
    // M
    &[
        ('E', 15),
        ('A', 10),
        ('O', 8),
        ('P', 5),
        ('I', 4),
        ('B', 3),
        ('M', 2),
        ('U', 2),
    ],
    // N
    &[
        ('T', 12),
        ('D', 10),
        ('G', 8),
        ('S', 6),
        ('C', 4),
        ('E', 4),
        ('O', 3),
        ('A', 2),
        ('I', 2),
        ('K', 2),
        ('U', 2),
    ],
    // O
    &[
        ('F', 15),
        ('N', 12),
        ('R', 10),
        ('U', 8),
        ('W', 5),
        ('L', 4),
        ('O', 4),
        ('P', 3),
        ('D', 2),
        ('M', 2),
        ('S', 2),
        ('T', 2),
    ],
    // P
    &[
        ('R', 10),
        ('E', 8),
        ('L', 5),
        ('A', 4),
        ('O', 3),
        ('H', 2),
        ('I', 2),
        ('P', 2),
        ('S', 2),
        ('U', 2),
    ],
    // Q
    &[
        ('U', 100),
    ],
    // R
    &[
        ('E', 20),
        ('A', 10),
        ('O', 8),
        ('I', 6),
        ('S', 4),
        ('T', 4),
        ('D', 3),
        ('G', 2),
        ('K', 2),
        ('M', 2),
        ('N', 2),
        ('P', 2),
        ('U', 2),
        ('Y', 2),
    ],
    // S
    &[
        ('T', 12),
        ('E', 10),
        ('H', 8),
        ('S', 6),
        ('I', 5),
        ('O', 5),
        ('U', 4),
        ('A', 3),
        ('C', 2),
        ('K', 2),
        ('L', 2),
        ('P', 2),
        ('W', 2),
    ],
    // T
    &[
        ('H', 25),
        ('O', 10),
        ('I', 8),
        ('E', 7),
        ('A', 5),
        ('R', 5),
        ('S', 3),
        ('T', 2),
        ('U', 2),
        ('W', 2),
        ('Y', 2),
    ],
    // U
    &[
        ('S', 10),
        ('R', 8),
        ('N', 7),
        ('L', 6),
        ('P', 4),
        ('T', 4),
        ('B', 2),
        ('C', 2),
        ('D', 2),
        ('G', 2),
        ('M', 2),
    ],
    // V
    &[
        ('E', 15),
        ('I', 8),
        ('A', 3),
        ('O', 2),
    ],
    // W
    &[
        ('A', 12),
        ('I', 10),
        ('E', 8),
        ('H', 5),
        ('O', 3),
        ('S', 2),
    ],
    // X
    &[
        ('P', 5),
        ('T', 3),
        ('C', 2),
        ('I', 2),
    ],
    // Y
    &[
        ('S', 10),
        ('O', 8),
        ('E', 5),
        ('A', 2),
    ],
    // Z
    &[
        ('Z', 8),
        ('E', 5),
        ('I', 2),
    ],
];

const fn table_total(weights: &[(char, u32)]) -> u32 {
    let mut total = 0;
    let mut i = 0;

    while i < weights.len() {
        total += weights[i].1;
        i += 1;
    }

    total
}

const fn bigram_totals() -> [u32; 26] {
    let mut totals = [0; 26];
    let mut i = 0;

    while i < BIGRAM_WEIGHTS.len() {
        totals[i] = table_total(BIGRAM_WEIGHTS[i]);
        i += 1;
    }

    totals
}

// The table sums are kept alongside the tables so that a draw doesn’t
// have to add up the weights every time
const UNIGRAM_TOTAL: u32 = table_total(&UNIGRAM_WEIGHTS);
const BIGRAM_TOTALS: [u32; 26] = bigram_totals();

pub fn letter_weight(letter: char) -> Option<u32> {
    let index = (letter as usize).checked_sub('A' as usize)?;

    UNIGRAM_WEIGHTS.get(index).map(|&(_, weight)| weight)
}

// The follower table for a letter and its total weight
pub fn followers(letter: char) -> Option<(&'static [(char, u32)], u32)> {
    let index = (letter as usize).checked_sub('A' as usize)?;

    let weights = BIGRAM_WEIGHTS.get(index).copied()?;

    Some((weights, BIGRAM_TOTALS[index]))
}

// Picks a letter from the table with a probability proportional to its
// weight, where total is the sum of the weights. Consumes exactly one
// number from the generator unless the table is empty.
pub fn weighted_choice(
    weights: &[(char, u32)],
    total: u32,
    random: &mut SeededRandom,
) -> char {
    if total == 0 {
        return 'A';
    }

    let mut num = random.next() * total as f64;

    for &(letter, weight) in weights {
        if num < weight as f64 {
            return letter;
        }

        num -= weight as f64;
    }

    // num can end up just past the last entry when the subtractions
    // accumulate rounding errors
    weights[0].0
}

// Draws a letter from the unigram distribution
pub fn random_letter(random: &mut SeededRandom) -> char {
    weighted_choice(&UNIGRAM_WEIGHTS, UNIGRAM_TOTAL, random)
}

// Draws a letter given the one before it, falling back to the unigram
// distribution when there is no usable bigram data
pub fn random_follower(preceding: char, random: &mut SeededRandom) -> char {
    match followers(preceding) {
        Some((weights, total)) if total > 0 => {
            weighted_choice(weights, total, random)
        },
        _ => random_letter(random),
    }
}

// Scores a word by the rarity of its letters. Each letter is worth
// MAX_WEIGHT - weight + 1 so that common letters like E are worth 1 and
// rare ones like Z are worth MAX_WEIGHT, and then the length of the
// word is added as a bonus.
pub fn word_score(word: &str) -> u32 {
    let mut score = 0;

    for letter in word.chars() {
        let weight = letter_weight(letter.to_ascii_uppercase()).unwrap_or(1);

        score += MAX_WEIGHT - weight + 1;
    }

    score + word.chars().count() as u32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(letter_weight('E'), Some(127));
        assert_eq!(letter_weight('Q'), Some(1));
        assert_eq!(letter_weight('A'), Some(82));
        assert_eq!(letter_weight('Z'), Some(1));
        assert_eq!(letter_weight('a'), None);
        assert_eq!(letter_weight('É'), None);
        assert_eq!(letter_weight(' '), None);

        assert_eq!(
            UNIGRAM_WEIGHTS.iter().map(|&(_, w)| w).max(),
            Some(MAX_WEIGHT),
        );
    }

    #[test]
    fn follower_tables() {
        let (q, q_total) = followers('Q').unwrap();
        assert_eq!(q, &[('U', 100)]);
        assert_eq!(q_total, 100);

        let (a, a_total) = followers('A').unwrap();
        assert_eq!(a[0], ('N', 7));
        assert_eq!(a.len(), 13);
        assert_eq!(a_total, 40);

        assert!(followers('é').is_none());
    }

    #[test]
    fn cached_totals_match_tables() {
        assert_eq!(
            UNIGRAM_WEIGHTS.iter().map(|&(_, weight)| weight).sum::<u32>(),
            UNIGRAM_TOTAL,
        );
        assert_eq!(UNIGRAM_TOTAL, 1003);

        for letter in 'A'..='Z' {
            let (weights, total) = followers(letter).unwrap();

            assert_eq!(
                weights.iter().map(|&(_, weight)| weight).sum::<u32>(),
                total,
            );
        }
    }

    #[test]
    fn choice_follows_declared_order() {
        // The first random number for seed 1 is tiny so the draw picks
        // the first entry of whatever table it is given
        let mut random = SeededRandom::new(1);
        assert_eq!(
            weighted_choice(&[('X', 1), ('Y', 1000)], 1001, &mut random),
            'X',
        );

        let mut random = SeededRandom::new(1);
        assert_eq!(random_letter(&mut random), 'A');
    }

    #[test]
    fn empty_table_defaults_to_a() {
        let mut random = SeededRandom::new(1);

        assert_eq!(weighted_choice(&[], 0, &mut random), 'A');
        assert_eq!(
            weighted_choice(&[('B', 0), ('C', 0)], 0, &mut random),
            'A',
        );

        // Neither draw should have consumed a random number
        assert_eq!(random.next(), 7.825903601782307e-06);
    }

    #[test]
    fn follower_falls_back_to_unigrams() {
        let mut with_fallback = SeededRandom::new(12345);
        let mut unigram_only = SeededRandom::new(12345);

        for _ in 0..20 {
            assert_eq!(
                random_follower('7', &mut with_fallback),
                random_letter(&mut unigram_only),
            );
        }
    }

    #[test]
    fn scores() {
        assert_eq!(word_score(""), 0);
        assert_eq!(word_score("E"), 2);
        assert_eq!(word_score("Z"), 128);
        assert_eq!(word_score("A"), 47);
        assert_eq!(word_score("CAT"), 186);
        assert_eq!(word_score("TOE"), 94);
        assert_eq!(word_score("QUIZ"), 416);
        assert_eq!(word_score("JAZZ"), 430);

        // Lowercase letters score the same as uppercase ones
        assert_eq!(word_score("cat"), 186);

        // Letters outside the table weigh 1, ie, they score like Z
        assert_eq!(word_score("9"), 128);
    }
}
