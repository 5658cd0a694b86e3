pub mod bot;
pub mod policy;

pub use bot::{
    BidPlan, BidPlanner, ContractProgress, DIFFICULTY_ENV, Difficulty, PlayChoice, PlayPlanner,
    PlayReason, TrumpPlanner, UnknownDifficulty,
};
pub use policy::{HeuristicPolicy, Policy, PolicyContext};
