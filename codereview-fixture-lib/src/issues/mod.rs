//! Catalogue of the flaws planted in the fixture.
//!
//! This is the answer key: a review of the fixture is complete when it reports
//! every entry returned by [`known_issues`].

use std::fmt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Security,
    Performance,
    Bug,
    Maintainability,
    Style,
}

impl IssueCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Security => "security",
            IssueCategory::Performance => "performance",
            IssueCategory::Bug => "bug",
            IssueCategory::Maintainability => "maintainability",
            IssueCategory::Style => "style",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One planted flaw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownIssue {
    pub id: &'static str,
    pub category: IssueCategory,
    pub severity: Severity,
    /// Function or item the flaw lives in
    pub location: &'static str,
    pub summary: &'static str,
}

const KNOWN_ISSUES: &[KnownIssue] = &[
    KnownIssue {
        id: "SEC-001",
        category: IssueCategory::Security,
        severity: Severity::High,
        location: "API_KEY",
        summary: "hardcoded secret key",
    },
    KnownIssue {
        id: "PERF-001",
        category: IssueCategory::Performance,
        severity: Severity::Medium,
        location: "calculate_fibonacci",
        summary: "exponential double recursion",
    },
    KnownIssue {
        id: "BUG-001",
        category: IssueCategory::Bug,
        severity: Severity::Medium,
        location: "calculate_fibonacci",
        summary: "negative index silently yields 0",
    },
    KnownIssue {
        id: "BUG-002",
        category: IssueCategory::Bug,
        severity: Severity::High,
        location: "process_user_data",
        summary: "missing keys are not handled",
    },
    KnownIssue {
        id: "MAINT-001",
        category: IssueCategory::Maintainability,
        severity: Severity::Low,
        location: "process_user_data",
        summary: "email address is not validated",
    },
    KnownIssue {
        id: "STYLE-001",
        category: IssueCategory::Style,
        severity: Severity::Low,
        location: "process_user_data",
        summary: "console output in library code",
    },
    KnownIssue {
        id: "BUG-003",
        category: IssueCategory::Bug,
        severity: Severity::High,
        location: "divide_numbers",
        summary: "division by zero is not guarded",
    },
];

/// All planted flaws, in catalogue order
#[must_use]
pub fn known_issues() -> &'static [KnownIssue] {
    KNOWN_ISSUES
}

/// Planted flaws located in `location`
#[must_use]
pub fn issues_for(location: &str) -> Vec<&'static KnownIssue> {
    KNOWN_ISSUES
        .iter()
        .filter(|issue| issue.location == location)
        .collect()
}
