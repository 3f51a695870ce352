pub mod modular;
pub mod poly;

pub use modular::{reduce, mod_add, mod_sub, mod_neg, mod_mul, centered, residue_distance};
pub use poly::Plaintext;
