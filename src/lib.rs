pub mod cs;
pub mod error;

pub use cs::combinatorial::{
    self, generate_permutations, generate_permutations_opt, permutation_count, validate_letters,
    LetterSet,
};
pub use error::{Error, InvalidInput, Result};
