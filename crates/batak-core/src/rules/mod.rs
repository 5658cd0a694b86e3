pub mod legality;

pub use legality::{PlayContext, is_valid_move, legal_moves};
