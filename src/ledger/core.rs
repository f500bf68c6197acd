//! Defines the ledger document and the records it holds.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// The category given to transactions that are created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// The emoji shown for goals that are created without one.
pub const DEFAULT_GOAL_EMOJI: &str = "🎯";

/// Round `amount` to whole cents.
///
/// All amounts are rounded when they are written into the ledger, never when
/// they are displayed.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Serde helpers for transaction timestamps.
///
/// Timestamps are written as RFC 3339. Older ledger files store a naive local
/// time such as "2026-01-02T03:04:05.123456", which is read as UTC.
mod created_at_format {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{
        OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
        format_description::well_known::Rfc3339, macros::format_description,
    };

    const NAIVE_DATE_TIME_FORMAT: &[BorrowedFormatItem] = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );

    pub fn serialize<S>(dt: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        time::serde::rfc3339::serialize(dt, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        OffsetDateTime::parse(&s, &Rfc3339)
            .or_else(|_| {
                PrimitiveDateTime::parse(&s, NAIVE_DATE_TIME_FORMAT)
                    .map(PrimitiveDateTime::assume_utc)
            })
            .map_err(serde::de::Error::custom)
    }
}

/// Creates an ID with `prefix` followed by a UUIDv7.
///
/// UUIDv7 embeds the creation time, so IDs sort in the order they were
/// generated and stay unique when many are generated in the same millisecond.
fn generate_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::now_v7().simple())
}

/// The ID of a transaction, e.g. `tx_0190f3c6...`.
///
/// IDs are opaque strings so that documents written by earlier versions of
/// the app keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh, unique transaction ID.
    pub fn generate() -> Self {
        Self(generate_id("tx"))
    }

    /// Wrap an existing ID string.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ID of a savings goal, e.g. `goal_0190f3c6...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Generate a fresh, unique goal ID.
    pub fn generate() -> Self {
        Self(generate_id("goal"))
    }

    /// Wrap an existing ID string.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for GoalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received, e.g. wages.
    #[default]
    Income,
    /// Money spent, e.g. rent.
    Expense,
}

impl TransactionType {
    /// The lowercase name used in forms, query strings and the ledger file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// An income or expense record.
///
/// Transactions are never edited once created, only deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,

    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// A non-empty, trimmed description, e.g. "Salary".
    pub description: String,

    /// A positive amount in dollars, rounded to cents.
    pub amount: f64,

    /// A free text category, e.g. "Housing".
    pub category: String,

    /// When the transaction was recorded.
    #[serde(alias = "date", with = "created_at_format")]
    pub created_at: OffsetDateTime,
}

/// A named savings target.
///
/// The amount `saved` is always between zero and `target` inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The ID of the goal.
    pub id: GoalId,

    /// A non-empty, trimmed name, e.g. "Trip".
    pub name: String,

    /// The glyph displayed next to the goal name.
    pub emoji: String,

    /// The amount the user wants to save, in dollars.
    pub target: f64,

    /// The amount set aside so far, in dollars.
    pub saved: f64,
}

impl Goal {
    /// The amount that still has to be saved to reach the target.
    pub fn remaining(&self) -> f64 {
        round_currency(self.target - self.saved)
    }

    /// Progress towards the target as a percentage between 0 and 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }

        (self.saved / self.target * 100.0).clamp(0.0, 100.0)
    }
}

/// The whole ledger document, as stored on disk.
///
/// Both lists are kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Every income and expense record.
    pub transactions: Vec<Transaction>,

    /// Every savings goal.
    pub goals: Vec<Goal>,
}

impl LedgerState {
    pub(crate) fn find_goal_mut(&mut self, goal_id: &GoalId) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| &goal.id == goal_id)
    }
}
