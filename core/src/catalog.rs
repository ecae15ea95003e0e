//! Fixed reference tables: categories, weights and base durations.
//!
//! RULE: Every categorical draw in the generator comes from these tables.
//! Nothing here is mutated at runtime.

use crate::types::{Hours, Minutes};
use std::fmt;

// ── Channel ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    CallCentre,
    WhatsApp,
    Email,
    LiveChat,
    Branch,
    App,
    Facebook,
    X,
}

impl Channel {
    pub const ALL: [Channel; 8] = [
        Channel::CallCentre,
        Channel::WhatsApp,
        Channel::Email,
        Channel::LiveChat,
        Channel::Branch,
        Channel::App,
        Channel::Facebook,
        Channel::X,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CallCentre => "Call Centre",
            Self::WhatsApp   => "WhatsApp",
            Self::Email      => "Email",
            Self::LiveChat   => "Live Chat",
            Self::Branch     => "Branch",
            Self::App        => "App",
            Self::Facebook   => "Facebook",
            Self::X          => "X",
        }
    }

    /// Typical minutes before the first reply on this channel.
    pub fn base_response_minutes(&self) -> Minutes {
        match self {
            Self::CallCentre => 6,
            Self::LiveChat   => 4,
            Self::WhatsApp   => 10,
            Self::Email      => 60,
            Self::Branch     => 15,
            Self::App        => 3,
            Self::Facebook   => 18,
            Self::X          => 14,
        }
    }

    /// Multiplier applied to resolution time. Digital chat channels
    /// resolve faster, branch visits slower.
    pub fn resolution_factor(&self) -> f64 {
        match self {
            Self::App | Self::LiveChat | Self::WhatsApp => 0.9,
            Self::Branch => 1.1,
            _ => 1.0,
        }
    }
}

// ── Product ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Cards,
    MobileBanking,
    InternetBanking,
    Accounts,
    Loans,
    Payments,
    Atm,
    AgentBanking,
}

impl Product {
    pub const ALL: [Product; 8] = [
        Product::Cards,
        Product::MobileBanking,
        Product::InternetBanking,
        Product::Accounts,
        Product::Loans,
        Product::Payments,
        Product::Atm,
        Product::AgentBanking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cards           => "Cards",
            Self::MobileBanking   => "Mobile Banking",
            Self::InternetBanking => "Internet Banking",
            Self::Accounts        => "Accounts",
            Self::Loans           => "Loans",
            Self::Payments        => "Payments",
            Self::Atm             => "ATM",
            Self::AgentBanking    => "Agent Banking",
        }
    }

    /// Issue categories valid for this product. The sets are a fixed
    /// partition keyed by product; a few labels recur across products.
    pub fn issues(&self) -> &'static [&'static str] {
        match self {
            Self::Cards => &[
                "Declined transaction", "Chargeback dispute", "Card blocked",
                "Fraud alert", "PIN reset",
            ],
            Self::MobileBanking => &[
                "Login failure", "App crash", "OTP not received",
                "Transfer failed", "Bill payment failed",
            ],
            Self::InternetBanking => &[
                "Login failure", "Token/OTP issues", "Beneficiary issues",
                "Transfer failed", "Session timeout",
            ],
            Self::Accounts => &[
                "Charges dispute", "Statement request", "Account blocked",
                "KYC update", "Balance discrepancy",
            ],
            Self::Loans => &[
                "Loan balance query", "Repayment not reflecting", "Reschedule request",
                "Interest dispute", "Top-up query",
            ],
            Self::Payments => &[
                "P2P failed", "Merchant payment failed", "Reversal delay",
                "Duplicate debit", "Settlement delay",
            ],
            Self::Atm => &[
                "Cash not dispensed", "Partial dispense", "Card retained",
                "Reversal delay", "ATM downtime",
            ],
            Self::AgentBanking => &[
                "Float issues", "Cash-out failed", "Reversal delay",
                "Wrong posting", "Service unavailable",
            ],
        }
    }

    /// SLA target before severity adjustment.
    pub fn base_sla_hours(&self) -> Hours {
        match self {
            Self::Cards | Self::MobileBanking | Self::InternetBanking => 24,
            Self::Loans => 72,
            Self::Accounts | Self::Payments | Self::Atm | Self::AgentBanking => 48,
        }
    }
}

/// Typical hours to resolve an issue category, before channel,
/// severity and noise. Unknown categories resolve in a day.
pub fn base_resolution_hours(issue: &str) -> f64 {
    match issue {
        "Declined transaction"     => 10.0,
        "Chargeback dispute"       => 72.0,
        "Fraud alert"              => 18.0,
        "Card blocked"             => 8.0,
        "PIN reset"                => 3.0,
        "Login failure"            => 6.0,
        "App crash"                => 18.0,
        "OTP not received"         => 4.0,
        "Transfer failed"          => 14.0,
        "Bill payment failed"      => 16.0,
        "Token/OTP issues"         => 6.0,
        "Beneficiary issues"       => 20.0,
        "Session timeout"          => 5.0,
        "Charges dispute"          => 60.0,
        "Statement request"        => 12.0,
        "Account blocked"          => 36.0,
        "KYC update"               => 72.0,
        "Balance discrepancy"      => 48.0,
        "Loan balance query"       => 20.0,
        "Repayment not reflecting" => 40.0,
        "Reschedule request"       => 72.0,
        "Interest dispute"         => 96.0,
        "Top-up query"             => 18.0,
        "P2P failed"               => 18.0,
        "Merchant payment failed"  => 18.0,
        "Reversal delay"           => 36.0,
        "Duplicate debit"          => 60.0,
        "Settlement delay"         => 72.0,
        "Cash not dispensed"       => 48.0,
        "Partial dispense"         => 60.0,
        "Card retained"            => 36.0,
        "ATM downtime"             => 12.0,
        "Float issues"             => 24.0,
        "Cash-out failed"          => 18.0,
        "Wrong posting"            => 48.0,
        "Service unavailable"      => 12.0,
        _ => 24.0,
    }
}

// ── Severity / Status / Resolution ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const WEIGHTS: [(Severity, f64); 3] = [
        (Severity::Low, 0.55),
        (Severity::Medium, 0.33),
        (Severity::High, 0.12),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low    => "Low",
            Self::Medium => "Medium",
            Self::High   => "High",
        }
    }

    /// Multiplier applied to resolution time. Urgent cases are worked first.
    pub fn resolution_factor(&self) -> f64 {
        match self {
            Self::High   => 0.85,
            Self::Medium => 1.0,
            Self::Low    => 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Closed,
    Open,
    Escalated,
}

impl Status {
    pub const WEIGHTS: [(Status, f64); 3] = [
        (Status::Closed, 0.78),
        (Status::Open, 0.14),
        (Status::Escalated, 0.08),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Closed    => "Closed",
            Self::Open      => "Open",
            Self::Escalated => "Escalated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Resolved,
    PartiallyResolved,
    Unresolved,
}

impl Resolution {
    /// Outcome mix for closed cases.
    pub const CLOSED_WEIGHTS: [(Resolution, f64); 3] = [
        (Resolution::Resolved, 0.86),
        (Resolution::PartiallyResolved, 0.09),
        (Resolution::Unresolved, 0.05),
    ];

    /// Outcome mix for cases still open (not escalated).
    pub const OPEN_WEIGHTS: [(Resolution, f64); 2] = [
        (Resolution::Unresolved, 0.7),
        (Resolution::PartiallyResolved, 0.3),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Resolved          => "Resolved",
            Self::PartiallyResolved => "Partially Resolved",
            Self::Unresolved        => "Unresolved",
        }
    }
}

// ── Segment / Region ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Retail,
    Sme,
    Corporate,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Retail, Segment::Sme, Segment::Corporate];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Retail    => "Retail",
            Self::Sme       => "SME",
            Self::Corporate => "Corporate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Nairobi,
    Central,
    Coast,
    RiftValley,
    Western,
    Nyanza,
    Eastern,
    NorthEastern,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Nairobi,
        Region::Central,
        Region::Coast,
        Region::RiftValley,
        Region::Western,
        Region::Nyanza,
        Region::Eastern,
        Region::NorthEastern,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nairobi      => "Nairobi",
            Self::Central      => "Central",
            Self::Coast        => "Coast",
            Self::RiftValley   => "Rift Valley",
            Self::Western      => "Western",
            Self::Nyanza       => "Nyanza",
            Self::Eastern      => "Eastern",
            Self::NorthEastern => "North Eastern",
        }
    }
}

// ── Opening hours ────────────────────────────────────────────────────────────

/// Hour-of-day profile for new complaints, peaked over lunch.
/// Weights are relative; the sampler normalises them.
pub const OPENING_HOURS: [(u32, f64); 12] = [
    (8, 0.06),
    (9, 0.07),
    (10, 0.08),
    (11, 0.09),
    (12, 0.09),
    (13, 0.09),
    (14, 0.09),
    (15, 0.09),
    (16, 0.08),
    (17, 0.08),
    (18, 0.07),
    (19, 0.06),
];

macro_rules! impl_display_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_display_label!(Channel, Product, Severity, Status, Resolution, Segment, Region);
