use serde::{Deserialize, Serialize};

/// Optional table rules. Every flag is independent of the others and of the
/// game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseRules {
    /// Trump may not be played on the first trick while other suits remain.
    pub first_trick_trump_ban: bool,
    /// A failed contract with zero tricks taken costs half again as much.
    pub trump_penalty: bool,
    /// Failing a contract is penalised instead of scored as partial credit.
    pub batak_mandatory: bool,
    /// Each trick short of the contract costs an extra 5 points.
    pub miscount_penalty: bool,
    /// A contract of 12 with zero tricks taken scores exactly -120.
    pub twelve_breaks: bool,
    /// Followers must beat the winning card of the lead or trump suit when able.
    pub forced_overplay: bool,
    /// Whoever takes the last trick earns a flat bonus.
    pub bonus_trick: bool,
}

impl HouseRules {
    pub const BONUS_TRICK_POINTS: i32 = 10;

    /// Points credited to the last-trick winner when the bonus is active.
    pub const fn last_trick_bonus(self) -> i32 {
        if self.bonus_trick {
            Self::BONUS_TRICK_POINTS
        } else {
            0
        }
    }
}
