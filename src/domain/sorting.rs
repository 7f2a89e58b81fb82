// Sortable collection - field-keyed ordering with a toggling direction
use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use icu_locale_core::locale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort direction '{0}' (expected 'asc' or 'desc')")]
pub struct UnknownDirection(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort field '{0}'")]
pub struct UnknownField(pub String);

/// A single column value as seen by the comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// Records that can be ordered by one of their fields.
///
/// A given field must always yield the same `SortValue` variant for every
/// record of the type, so the comparator stays a total order.
pub trait Sortable {
    type Field: Copy + Eq;

    fn sort_value(&self, field: Self::Field) -> SortValue<'_>;
}

/// Compare two column values. Mixed variants compare equal.
pub fn compare_values(a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Spanish collation at tertiary strength: base letters first (an accented
/// vowel sorts with its plain vowel), then accents, then case with
/// lowercase first.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    match collator() {
        Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
        None => {
            let folded_a = a.chars().flat_map(char::to_lowercase);
            let folded_b = b.chars().flat_map(char::to_lowercase);
            folded_a.cmp(folded_b).then_with(|| b.cmp(a))
        }
    }
}

fn collator() -> Option<&'static CollatorBorrowed<'static>> {
    static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();
    COLLATOR
        .get_or_init(|| {
            Collator::try_new(locale!("es").into(), CollatorOptions::default())
                .inspect_err(|e| tracing::warn!("Collator unavailable, using case folding: {}", e))
                .ok()
        })
        .as_ref()
}

/// Return a new sequence ordered by `field`. The input is never mutated and
/// records with equal keys keep their input order in either direction.
pub fn ordered_view<R>(records: &[R], field: R::Field, direction: SortDirection) -> Vec<R>
where
    R: Sortable + Clone,
{
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| {
        direction.apply(compare_values(a.sort_value(field), b.sort_value(field)))
    });
    ordered
}

/// Active sort field and direction of one table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    pub fn with_direction(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Selecting the active field flips the direction; any other field
    /// becomes active and starts descending.
    pub fn set_sort_key(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    pub fn apply<R>(&self, records: &[R]) -> Vec<R>
    where
        R: Sortable<Field = F> + Clone,
    {
        ordered_view(records, self.field, self.direction)
    }
}

impl<F: Copy + Eq + Default> Default for SortState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

/// A table rendered under a given sort state.
#[derive(Debug, Clone, Serialize)]
pub struct TableView<F, R> {
    pub sort: SortState<F>,
    pub rows: Vec<R>,
}
