pub mod anagram;
pub mod backtracking;

pub use anagram::{
    generate_permutations, generate_permutations_opt, permutation_count, validate_letters,
    LetterSet,
};
pub use backtracking::{for_each_permutation, permutations};
