//! Named filter predicates.
//!
//! Every filter key with special semantics is registered here, in one
//! lookup table. A predicate returns `None` when it does not apply to the
//! record shape, in which case the default matcher takes over.

use super::filter::FilterValue;
use crate::record::Record;
use serde::{Deserialize, Serialize};

pub type Predicate = fn(&Record, &FilterValue) -> Option<bool>;

/// Filter key → predicate.
const REGISTRY: &[(&str, Predicate)] = &[
    ("event_type", event_type),
    ("role", role),
    ("payment_status", payment_status),
    ("earning_range", earning_range),
    ("assignment_count", assignment_count),
    ("task_completion", task_completion),
    // Filtered by the calling screen, not here.
    ("status", pass_through),
    ("amount_range", pass_through),
    ("client_id", pass_through),
    ("staff_assignment_status", pass_through),
    ("date_range", pass_through),
    ("mix_mode", mix_mode),
];

pub fn lookup(key: &str) -> Option<Predicate> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, predicate)| *predicate)
}

/// Lowercased, trimmed tokens of a text or list filter value.
fn tokens(value: &FilterValue) -> Vec<String> {
    match value {
        FilterValue::Text(s) => vec![s.trim().to_lowercase()],
        FilterValue::List(items) => items.iter().map(|s| s.trim().to_lowercase()).collect(),
        FilterValue::Number(n) => vec![crate::record::FieldValue::Number(*n).to_display_string()],
        FilterValue::Bool(b) => vec![b.to_string()],
        FilterValue::Date(d) => vec![d.format("%Y-%m-%d").to_string()],
    }
}

fn pass_through(_: &Record, _: &FilterValue) -> Option<bool> {
    Some(true)
}

fn mix_mode(_: &Record, value: &FilterValue) -> Option<bool> {
    match value {
        FilterValue::Text(s) if s.trim().eq_ignore_ascii_case("both") => Some(true),
        _ => None,
    }
}

fn role(record: &Record, value: &FilterValue) -> Option<bool> {
    let Some(role) = record.text("role") else {
        return Some(false);
    };
    let role = role.trim().to_lowercase();
    Some(tokens(value).iter().any(|t| *t == role))
}

// ── Event types ────────────────────────────────────────────────

/// Normalized user-facing label → canonical stored value.
const EVENT_TYPE_SYNONYMS: &[(&str, &str)] = &[
    ("wedding", "Wedding"),
    ("pre wedding", "Pre-Wedding"),
    ("prewedding", "Pre-Wedding"),
    ("pre wed", "Pre-Wedding"),
    ("post wedding", "Post-Wedding"),
    ("postwedding", "Post-Wedding"),
    ("engagement", "Engagement"),
    ("ring ceremony", "Ring-Ceremony"),
    ("ringceremony", "Ring-Ceremony"),
    ("ring", "Ring-Ceremony"),
    ("haldi", "Haldi"),
    ("mehendi", "Mehendi"),
    ("mehndi", "Mehendi"),
    ("sangeet", "Sangeet"),
    ("reception", "Reception"),
    ("birthday", "Birthday"),
    ("anniversary", "Anniversary"),
    ("maternity", "Maternity"),
    ("baby shower", "Baby-Shower"),
    ("babyshower", "Baby-Shower"),
    ("corporate", "Corporate"),
    ("product shoot", "Product-Shoot"),
    ("product", "Product-Shoot"),
    ("portfolio", "Portfolio"),
    ("other", "Other"),
];

/// Case-folded, with `-`, `_` and runs of whitespace collapsed to one space.
fn normalize_label(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical stored value for a user-facing event type label.
pub fn canonical_event_type(label: &str) -> Option<&'static str> {
    let key = normalize_label(label);
    EVENT_TYPE_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == key)
        .map(|(_, canonical)| *canonical)
}

fn event_type(record: &Record, value: &FilterValue) -> Option<bool> {
    let Some(stored) = record.text("event_type") else {
        return Some(false);
    };
    let selected: Vec<&str> = match value {
        FilterValue::Text(s) => vec![s.as_str()],
        FilterValue::List(items) => items.iter().map(String::as_str).collect(),
        _ => return None,
    };
    Some(selected.iter().any(|label| match canonical_event_type(label) {
        Some(canonical) => stored == canonical,
        None => normalize_label(&stored) == normalize_label(label),
    }))
}

// ── Payment status ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    FullyPaid,
    PartialPaid,
    PendingPayment,
    Overpaid,
    NoEarnings,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 5] = [
        Self::FullyPaid,
        Self::PartialPaid,
        Self::PendingPayment,
        Self::Overpaid,
        Self::NoEarnings,
    ];

    /// Exactly one bucket per (earnings, paid) pair. Precedence:
    /// no earnings, overpaid, fully paid, partially paid, pending.
    pub fn classify(earnings: f64, paid: f64) -> Self {
        let pending = earnings - paid;
        if earnings <= 0.0 {
            Self::NoEarnings
        } else if paid > earnings {
            Self::Overpaid
        } else if pending <= 0.0 {
            Self::FullyPaid
        } else if paid > 0.0 {
            Self::PartialPaid
        } else {
            Self::PendingPayment
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::FullyPaid => "fully_paid",
            Self::PartialPaid => "partial_paid",
            Self::PendingPayment => "pending_payment",
            Self::Overpaid => "overpaid",
            Self::NoEarnings => "no_earnings",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.token() == token)
    }
}

fn payment_status(record: &Record, value: &FilterValue) -> Option<bool> {
    if !record.has_field("total_earnings") {
        return None;
    }
    let earnings = record.number("total_earnings").unwrap_or(0.0);
    let paid = record.number("total_paid").unwrap_or(0.0);
    let status = PaymentStatus::classify(earnings, paid);
    Some(tokens(value).iter().any(|t| match PaymentStatus::from_token(t) {
        Some(wanted) => wanted == status,
        None => true,
    }))
}

// ── Numeric bands ──────────────────────────────────────────────

/// Which of the two historical band definitions a screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandSet {
    /// 5k / 25k / 75k earnings, 1-3 / 4-10 / 10+ assignments.
    #[default]
    Compact,
    /// 10k / 50k / 100k earnings, 1-5 / 6-15 / 15+ assignments.
    Wide,
}

impl BandSet {
    pub fn earning_options(&self) -> &'static [EarningBand] {
        match self {
            Self::Compact => &[
                EarningBand::Under5k,
                EarningBand::From5kTo25k,
                EarningBand::From25kTo75k,
                EarningBand::Above75k,
            ],
            Self::Wide => &[
                EarningBand::Under10k,
                EarningBand::From10kTo50k,
                EarningBand::From50kTo100k,
                EarningBand::Above100k,
            ],
        }
    }

    pub fn assignment_options(&self) -> &'static [AssignmentBand] {
        match self {
            Self::Compact => &[
                AssignmentBand::NoAssignments,
                AssignmentBand::From1To3,
                AssignmentBand::From4To10,
                AssignmentBand::Above10,
            ],
            Self::Wide => &[
                AssignmentBand::NoAssignments,
                AssignmentBand::From1To5,
                AssignmentBand::From6To15,
                AssignmentBand::Above15,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarningBand {
    Under5k,
    From5kTo25k,
    From25kTo75k,
    Above75k,
    Under10k,
    From10kTo50k,
    From50kTo100k,
    Above100k,
}

impl EarningBand {
    const ALL: [EarningBand; 8] = [
        Self::Under5k,
        Self::From5kTo25k,
        Self::From25kTo75k,
        Self::Above75k,
        Self::Under10k,
        Self::From10kTo50k,
        Self::From50kTo100k,
        Self::Above100k,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::Under5k => "under_5k",
            Self::From5kTo25k => "5k_25k",
            Self::From25kTo75k => "25k_75k",
            Self::Above75k => "above_75k",
            Self::Under10k => "under_10k",
            Self::From10kTo50k => "10k_50k",
            Self::From50kTo100k => "50k_100k",
            Self::Above100k => "above_100k",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.token() == token)
    }

    /// Lower bound inclusive, upper bound exclusive.
    pub fn contains(&self, amount: f64) -> bool {
        let (lo, hi) = match self {
            Self::Under5k => (f64::NEG_INFINITY, 5_000.0),
            Self::From5kTo25k => (5_000.0, 25_000.0),
            Self::From25kTo75k => (25_000.0, 75_000.0),
            Self::Above75k => (75_000.0, f64::INFINITY),
            Self::Under10k => (f64::NEG_INFINITY, 10_000.0),
            Self::From10kTo50k => (10_000.0, 50_000.0),
            Self::From50kTo100k => (50_000.0, 100_000.0),
            Self::Above100k => (100_000.0, f64::INFINITY),
        };
        amount >= lo && amount < hi
    }
}

fn earning_range(record: &Record, value: &FilterValue) -> Option<bool> {
    if !record.has_field("total_earnings") {
        return None;
    }
    let earnings = record.number("total_earnings").unwrap_or(0.0);
    Some(tokens(value).iter().any(|t| match EarningBand::from_token(t) {
        Some(band) => band.contains(earnings),
        None => true,
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentBand {
    NoAssignments,
    From1To3,
    From4To10,
    Above10,
    From1To5,
    From6To15,
    Above15,
}

impl AssignmentBand {
    const ALL: [AssignmentBand; 7] = [
        Self::NoAssignments,
        Self::From1To3,
        Self::From4To10,
        Self::Above10,
        Self::From1To5,
        Self::From6To15,
        Self::Above15,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::NoAssignments => "no_assignments",
            Self::From1To3 => "1_3",
            Self::From4To10 => "4_10",
            Self::Above10 => "above_10",
            Self::From1To5 => "1_5",
            Self::From6To15 => "6_15",
            Self::Above15 => "above_15",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.token() == token)
    }

    pub fn contains(&self, count: f64) -> bool {
        match self {
            Self::NoAssignments => count == 0.0,
            Self::From1To3 => (1.0..=3.0).contains(&count),
            Self::From4To10 => (4.0..=10.0).contains(&count),
            Self::Above10 => count > 10.0,
            Self::From1To5 => (1.0..=5.0).contains(&count),
            Self::From6To15 => (6.0..=15.0).contains(&count),
            Self::Above15 => count > 15.0,
        }
    }
}

fn assignment_count(record: &Record, value: &FilterValue) -> Option<bool> {
    if !record.has_field("total_assignments") {
        return None;
    }
    let count = record.number("total_assignments").unwrap_or(0.0);
    Some(tokens(value).iter().any(|t| match AssignmentBand::from_token(t) {
        Some(band) => band.contains(count),
        None => true,
    }))
}

// ── Task completion ────────────────────────────────────────────

fn task_completion(record: &Record, value: &FilterValue) -> Option<bool> {
    if !record.has_field("total_tasks") {
        return None;
    }
    let total = record.number("total_tasks").unwrap_or(0.0);
    let completed = record.number("completed_tasks").unwrap_or(0.0);
    Some(tokens(value).iter().any(|t| match t.as_str() {
        "all_completed" => total > 0.0 && completed == total,
        "pending_tasks" => total > 0.0 && completed < total,
        "no_tasks" => total == 0.0,
        _ => true,
    }))
}
