//! Ledger account model.

use chrono::Duration;

/// Largest amount one bet, transfer or grant may move.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Wallet ceiling enforced when minting funds with `add_money`.
pub const MAX_BALANCE: i64 = 1_000_000_000_000_000_000;

/// Per-(user, guild) ledger record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user_id: u64,
    pub guild_id: u64,
    /// Wallet funds. Exposed to wagers, robbery and fines.
    pub balance: i64,
    /// Bank funds. Only reachable through withdraw.
    pub bank: i64,
    /// Epoch milliseconds of the last claim, `0` if never.
    pub last_daily: i64,
    pub last_work: i64,
    pub last_crime: i64,
}

impl Account {
    /// Converts an entity model to an account.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Account` - The converted domain model
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            user_id: entity.user_id as u64,
            guild_id: entity.guild_id as u64,
            balance: entity.balance,
            bank: entity.bank,
            last_daily: entity.last_daily,
            last_work: entity.last_work,
            last_crime: entity.last_crime,
        }
    }

    /// Wallet plus bank, the figure the leaderboard ranks by.
    pub fn total(&self) -> i64 {
        self.balance.saturating_add(self.bank)
    }

    /// Last stamp recorded for the given cooldown.
    pub fn last_action(&self, kind: CooldownKind) -> i64 {
        match kind {
            CooldownKind::Daily => self.last_daily,
            CooldownKind::Work => self.last_work,
            CooldownKind::Crime => self.last_crime,
        }
    }
}

/// Which of the two money columns an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceField {
    Balance,
    Bank,
}

impl BalanceField {
    pub(crate) fn column(self) -> entity::account::Column {
        match self {
            Self::Balance => entity::account::Column::Balance,
            Self::Bank => entity::account::Column::Bank,
        }
    }
}

/// Cooldown-gated earning actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownKind {
    Daily,
    Work,
    Crime,
}

impl CooldownKind {
    /// Minimum time between two runs of the action.
    pub fn window(self) -> Duration {
        match self {
            Self::Daily => Duration::hours(24),
            Self::Work => Duration::hours(1),
            Self::Crime => Duration::hours(2),
        }
    }

    pub(crate) fn column(self) -> entity::account::Column {
        match self {
            Self::Daily => entity::account::Column::LastDaily,
            Self::Work => entity::account::Column::LastWork,
            Self::Crime => entity::account::Column::LastCrime,
        }
    }
}

/// Counterpart of a transfer or robbery as seen by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub user_id: u64,
    pub bot: bool,
}
