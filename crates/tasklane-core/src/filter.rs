use serde::{Deserialize, Serialize};

use crate::query::TaskQuery;

/// List filter derived from the navigation fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl Filter {
    /// Resolve a route fragment such as `""`, `"#/"`, `"#/active"` or `"#/completed"`.
    ///
    /// The token is the second `/`-separated segment of the fragment. Missing or
    /// unknown tokens resolve to [`Filter::All`].
    #[must_use]
    pub fn from_route(fragment: &str) -> Self {
        match fragment.split('/').nth(1).unwrap_or_default() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Token the view uses to highlight the selected filter.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Store query selecting the tasks this filter displays.
    #[must_use]
    pub const fn query(self) -> TaskQuery {
        match self {
            Self::All => TaskQuery::all(),
            Self::Active => TaskQuery::completed(false),
            Self::Completed => TaskQuery::completed(true),
        }
    }
}
