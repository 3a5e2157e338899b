// src/domain/status.rs

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Label shown for a record with no active status.
pub const NEUTRAL_LABEL: &str = "Pending";

/// Badge colours used by the dashboards. The hex values mirror the palette in
/// the layout stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Neutral,
    Green,
    Red,
    Amber,
    Blue,
}

impl BadgeColor {
    pub fn hex(self) -> &'static str {
        match self {
            BadgeColor::Neutral => "#6b7280",
            BadgeColor::Green => "#10b981",
            BadgeColor::Red => "#dc2626",
            BadgeColor::Amber => "#f59e0b",
            BadgeColor::Blue => "#3b82f6",
        }
    }
}

/// A closed set of review statuses for one kind of record.
///
/// The neutral ("pending") state is not a variant: a record without an
/// active status holds `None`.
pub trait StatusKind: Copy + Eq + Debug + 'static {
    /// Every status control a reviewer can click, in display order.
    const CONTROLS: &'static [Self];

    fn label(self) -> &'static str;
    fn color(self) -> BadgeColor;
    /// Form value used by the status controls.
    fn slug(self) -> &'static str;
    /// A transition into this status must carry a clarification.
    fn requires_clarification(self) -> bool;

    /// Inverse of `label`, used when reading stored history rows.
    fn from_label(label: &str) -> Option<Self> {
        Self::CONTROLS.iter().copied().find(|s| s.label() == label)
    }

    fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::CONTROLS
            .iter()
            .copied()
            .find(|s| s.slug().eq_ignore_ascii_case(slug))
    }
}

pub fn status_label<S: StatusKind>(status: Option<S>) -> &'static str {
    status.map(StatusKind::label).unwrap_or(NEUTRAL_LABEL)
}

pub fn status_color<S: StatusKind>(status: Option<S>) -> BadgeColor {
    status.map(StatusKind::color).unwrap_or(BadgeColor::Neutral)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Accepted,
    Rejected,
    Flagged,
}

impl StatusKind for ReportStatus {
    const CONTROLS: &'static [Self] = &[
        ReportStatus::Accepted,
        ReportStatus::Rejected,
        ReportStatus::Flagged,
    ];

    fn label(self) -> &'static str {
        match self {
            ReportStatus::Accepted => "Accepted",
            ReportStatus::Rejected => "Rejected",
            ReportStatus::Flagged => "Flagged",
        }
    }

    fn color(self) -> BadgeColor {
        match self {
            ReportStatus::Accepted => BadgeColor::Green,
            ReportStatus::Rejected => BadgeColor::Red,
            ReportStatus::Flagged => BadgeColor::Amber,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ReportStatus::Accepted => "accepted",
            ReportStatus::Rejected => "rejected",
            ReportStatus::Flagged => "flagged",
        }
    }

    fn requires_clarification(self) -> bool {
        matches!(self, ReportStatus::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Accepted,
    Rejected,
    Finalized,
}

impl StatusKind for ApplicationStatus {
    const CONTROLS: &'static [Self] = &[
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Finalized,
    ];

    fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Finalized => "Finalized",
        }
    }

    fn color(self) -> BadgeColor {
        match self {
            ApplicationStatus::Accepted => BadgeColor::Green,
            ApplicationStatus::Rejected => BadgeColor::Red,
            ApplicationStatus::Finalized => BadgeColor::Blue,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Finalized => "finalized",
        }
    }

    fn requires_clarification(self) -> bool {
        matches!(self, ApplicationStatus::Rejected)
    }
}

/// Job postings are never reviewed; this status set has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unreviewed {}

impl StatusKind for Unreviewed {
    const CONTROLS: &'static [Self] = &[];

    fn label(self) -> &'static str {
        match self {}
    }

    fn color(self) -> BadgeColor {
        match self {}
    }

    fn slug(self) -> &'static str {
        match self {}
    }

    fn requires_clarification(self) -> bool {
        match self {}
    }
}
