use alloc::string::{String, ToString};
use core::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    Descending,
}

impl SortDirection {
    /// Orients an ascending comparison result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ColumnSort {
    column: String,
    direction: SortDirection,
}

/// Single-column sort state.
///
/// Either no column is sorted, or exactly one column is sorted in one direction; a column
/// without a direction (or vice versa) is unrepresentable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SortState {
    active: Option<ColumnSort>,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self { active: None }
    }

    pub fn sorted(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some(ColumnSort {
                column: column.into(),
                direction,
            }),
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.column.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|s| s.direction)
    }

    pub fn is_sorted(&self) -> bool {
        self.active.is_some()
    }

    /// The direction shown on `column`'s header, if it is the sorted column.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }

    /// The state after a click on `column`'s header.
    ///
    /// A different column starts ascending; the same column goes ascending → descending →
    /// unsorted.
    pub fn next(&self, column: &str) -> Self {
        match self.direction_for(column) {
            None => Self::sorted(column.to_string(), SortDirection::Ascending),
            Some(SortDirection::Ascending) => {
                Self::sorted(column.to_string(), SortDirection::Descending)
            }
            Some(SortDirection::Descending) => Self::unsorted(),
        }
    }

    /// Applies a header click in place and returns the new state.
    pub fn toggle(&mut self, column: &str) -> &Self {
        *self = self.next(column);
        self
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
