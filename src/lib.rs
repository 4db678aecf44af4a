// Reusable library API — visible to both CLI and WASM builds
pub mod alphabet;
pub mod dictionary;
pub mod encrypt;
pub mod errors;
pub mod hints;
pub mod log;
pub mod mapping;
pub mod propagate;
pub mod render;
pub mod samples;
pub mod score;
pub mod search;
pub mod solver;
pub mod template;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use dictionary::Dictionary;
pub use mapping::CandidateMapping;
pub use score::Score;
pub use search::{CryptogramSolver, Solution};
