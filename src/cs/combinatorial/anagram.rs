//! # Anagram generation
//!
//! Produces every anagram (full-length permutation) of a set of distinct letters.
//! Input is validated up front, so a failing call never exposes partial output:
//!
//! - the sequence must be present and non-empty,
//! - every character must be alphabetic,
//! - no two letters may be equal once case is ignored (`['A', 'a']` is rejected).
//!
//! Generation runs the used-marker backtracking of
//! [`for_each_permutation`](super::backtracking::for_each_permutation), so the
//! results come out in the order positions are tried, left to right at every
//! depth. Cost grows as `n!`; use [`permutation_count`] to size a request first.

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::str::FromStr;

use log::debug;
use num_bigint::BigUint;
use num_traits::One;

use super::backtracking::for_each_permutation;
use crate::error::{Error, InvalidInput, Result};

/// A validated, ordered set of pairwise distinct letters.
///
/// The only way to obtain one is through validation, so generating its
/// anagrams cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Validates `letters` and keeps them in their original order and case.
    pub fn new(letters: &[char]) -> Result<Self> {
        validate_letters(Some(letters))?;
        Ok(Self {
            letters: letters.to_vec(),
        })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; an empty set never passes validation.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of anagrams [`permutations`](Self::permutations) will return.
    pub fn permutation_count(&self) -> BigUint {
        permutation_count(self.letters.len())
    }

    /// Every anagram of the set, in backtracking order.
    ///
    /// # Example
    /// ```
    /// use anagrams::LetterSet;
    ///
    /// let set = LetterSet::new(&['x', 'y']).unwrap();
    /// assert_eq!(set.permutations(), vec!["xy", "yx"]);
    /// ```
    pub fn permutations(&self) -> Vec<String> {
        let mut results = Vec::new();
        for_each_permutation(&self.letters, |arrangement| {
            results.push(arrangement.iter().collect::<String>());
        });
        debug!(
            "generated {} anagrams of {} letters",
            results.len(),
            self.letters.len()
        );
        results
    }
}

impl TryFrom<&[char]> for LetterSet {
    type Error = Error;

    fn try_from(letters: &[char]) -> Result<Self> {
        Self::new(letters)
    }
}

impl FromStr for LetterSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let letters: Vec<char> = s.chars().collect();
        Self::new(&letters)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}")?;
        }
        write!(f, "]")
    }
}

/// Returns every anagram of `letters`.
///
/// Fails with [`Error::InvalidInput`] if `letters` is empty, holds a
/// non-alphabetic character, or repeats a letter ignoring case.
///
/// # Example
/// ```
/// use anagrams::generate_permutations;
///
/// let words = generate_permutations(&['a', 'b', 'c']).unwrap();
/// assert_eq!(words, vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
///
/// assert!(generate_permutations(&['a', '1', 'b']).is_err());
/// ```
pub fn generate_permutations(letters: &[char]) -> Result<Vec<String>> {
    Ok(LetterSet::new(letters)?.permutations())
}

/// Like [`generate_permutations`], but an absent input is reported as
/// [`InvalidInput::Missing`] instead of being ruled out by the type.
pub fn generate_permutations_opt(letters: Option<&[char]>) -> Result<Vec<String>> {
    let letters = letters.ok_or(InvalidInput::Missing)?;
    generate_permutations(letters)
}

/// Checks that `letters` is present, non-empty, alphabetic and free of
/// case-insensitive duplicates.
///
/// Every character is checked for being a letter before duplicates are
/// looked for, so a non-letter is reported even if a duplicate precedes it.
pub fn validate_letters(letters: Option<&[char]>) -> Result<()> {
    let letters = letters.ok_or(InvalidInput::Missing)?;
    if letters.is_empty() {
        return Err(InvalidInput::Empty.into());
    }

    if let Some((position, &letter)) = letters
        .iter()
        .enumerate()
        .find(|(_, letter)| !letter.is_alphabetic())
    {
        return Err(InvalidInput::NotALetter { letter, position }.into());
    }

    let mut seen: HashMap<String, usize> = HashMap::with_capacity(letters.len());
    for (position, &letter) in letters.iter().enumerate() {
        match seen.entry(letter.to_lowercase().collect()) {
            Entry::Occupied(entry) => {
                return Err(InvalidInput::DuplicateLetter {
                    letter,
                    first: *entry.get(),
                    position,
                }
                .into());
            }
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
        }
    }
    Ok(())
}

/// Exact number of anagrams of `n` distinct letters, `n!`.
///
/// # Example
/// ```
/// use anagrams::permutation_count;
/// use num_bigint::BigUint;
///
/// assert_eq!(permutation_count(3), BigUint::from(6u32));
/// assert!(permutation_count(21) > BigUint::from(u64::MAX));
/// ```
pub fn permutation_count(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}
