// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Catalog queries
//
// Pure views over the catalog combined with stored state. Nothing here
// touches storage.

use crate::catalog::{self, Destination};
use crate::types::{Category, DestinationKey, IndianState, Region};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Active list filter: everything, one region, or one state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Region(Region),
    State(IndianState),
}

impl Filter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Region(region) => region.label(),
            Self::State(state) => state.label(),
        }
    }

    /// Map a chip label back to a filter
    pub fn parse(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(Self::All);
        }
        Region::from_label(label)
            .map(Self::Region)
            .or_else(|| IndianState::from_label(label).map(Self::State))
    }

    /// Whether `destination` passes this filter. A filter value is compared
    /// against both the region and the state of the entry.
    pub fn matches(&self, destination: &Destination) -> bool {
        match self {
            Self::All => true,
            Self::Region(_) | Self::State(_) => {
                let label = self.label();
                destination.region.label() == label || destination.state.label() == label
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter chips for a category: "All", its regions, then its states
pub fn filters_for(category: Category) -> Vec<Filter> {
    std::iter::once(Filter::All)
        .chain(catalog::regions(category).iter().copied().map(Filter::Region))
        .chain(catalog::states(category).iter().copied().map(Filter::State))
        .collect()
}

/// Apply the filter, then the case-insensitive search, keeping catalog order
pub fn filter_destinations<'a>(
    destinations: &'a [Destination],
    filter: Filter,
    search_query: &str,
) -> Vec<&'a Destination> {
    let query = search_query.trim().to_lowercase();

    destinations
        .iter()
        .filter(|d| filter.matches(d))
        .filter(|d| {
            query.is_empty()
                || d.name.to_lowercase().contains(&query)
                || d.state.label().to_lowercase().contains(&query)
                || d.region.label().to_lowercase().contains(&query)
        })
        .collect()
}

/// Visited-versus-total counts for a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub visited: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent; 0 for an empty catalog
    pub percentage: u32,
}

pub fn progress_summary(visited: usize, total: usize) -> ProgressSummary {
    let percentage = if total > 0 {
        (visited as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    ProgressSummary {
        visited,
        total,
        percentage,
    }
}

/// Summary for a category, counting only ids present in its catalog
pub fn category_summary(category: Category, visited: &BTreeSet<String>) -> ProgressSummary {
    let destinations = catalog::destinations(category);
    let count = destinations.iter().filter(|d| visited.contains(d.id)).count();
    progress_summary(count, destinations.len())
}

/// A favorite resolved to its catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteItem {
    pub key: DestinationKey,
    pub destination: &'static Destination,
}

/// Resolve favorite keys against the catalog, dropping keys with no entry
pub fn resolve_favorites<'a>(
    favorites: impl IntoIterator<Item = &'a DestinationKey>,
) -> Vec<FavoriteItem> {
    favorites
        .into_iter()
        .filter_map(|key| {
            catalog::find_by_key(key).map(|destination| FavoriteItem {
                key: key.clone(),
                destination,
            })
        })
        .collect()
}
