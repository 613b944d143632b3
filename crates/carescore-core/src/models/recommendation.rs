use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recommendation urgency. Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: critical 0, high 1, medium 2, low 3.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Display token for a recommendation. The rendering layer owns the mapping
/// from token to glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Icon {
    Activity,
    AlertCircle,
    AlertTriangle,
    Bed,
    Bone,
    Calculator,
    Calendar,
    Clock,
    Droplets,
    Eye,
    FileText,
    Layers,
    Move,
    Pill,
    RefreshCw,
    Repeat,
    RotateCcw,
    Scan,
    Search,
    Shield,
    ShieldCheck,
    Syringe,
    TestTube,
    TrendingUp,
    UserMd,
    Utensils,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub recommendation: String,
    pub rationale: String,
    pub icon: Icon,
}

impl Recommendation {
    pub fn new(
        category: impl Into<String>,
        priority: Priority,
        recommendation: impl Into<String>,
        rationale: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            category: category.into(),
            priority,
            recommendation: recommendation.into(),
            rationale: rationale.into(),
            icon,
        }
    }
}

/// Stable sort by priority rank; items of equal priority keep their
/// insertion order.
pub fn sort_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|r| r.priority.rank());
}
