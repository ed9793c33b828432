//! Filtering and pagination over a collection snapshot.

use domain::{Item, User, DEFAULT_LIMIT, DEFAULT_SKIP};

/// Contiguous slice of a filtered sequence: skip `skip`, then take `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub skip: usize,
    pub limit: usize,
}

impl Window {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Predicate a record must satisfy to be listed.
pub trait Filter<R>: Send + Sync {
    fn matches(&self, record: &R) -> bool;
}

impl<R, F> Filter<R> for F
where
    F: Fn(&R) -> bool + Send + Sync,
{
    fn matches(&self, record: &R) -> bool {
        self(record)
    }
}

/// Inclusive price bounds; an unset bound imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl Filter<Item> for PriceRange {
    fn matches(&self, item: &Item) -> bool {
        item.price_within(self.min, self.max)
    }
}

/// Case-insensitive substring match on a user's email.
#[derive(Debug, Clone)]
pub struct EmailContains(pub String);

impl Filter<User> for EmailContains {
    fn matches(&self, user: &User) -> bool {
        user.email_contains(&self.0)
    }
}

/// Records satisfying every filter, windowed, in input order.
///
/// A `skip` past the end yields an empty result rather than an error.
pub fn list<'a, R, I>(records: I, window: Window, filters: &[&dyn Filter<R>]) -> Vec<R>
where
    R: Clone + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|record| filters.iter().all(|filter| filter.matches(record)))
        .skip(window.skip)
        .take(window.limit)
        .cloned()
        .collect()
}

/// Every record matching `filter`, in input order, with no window.
pub fn search<'a, R, I>(records: I, filter: &dyn Filter<R>) -> Vec<R>
where
    R: Clone + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
