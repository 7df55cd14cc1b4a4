//! Response envelope for collections.

use serde::Serialize;

/// A sequence of items with item-count metadata.
///
/// No server-side paging is performed: the whole collection is returned in
/// one page, so after [`ResultSet::with_counts`] the three counters are equal
/// to each other and to the number of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub limit: usize,
    pub total_count: usize,
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            limit: 0,
            total_count: 0,
        }
    }
}

impl<T> ResultSet<T> {
    /// Converts store records into API items, preserving their order.
    ///
    /// Absent input yields an empty result set. Counters are left at zero;
    /// see [`ResultSet::with_counts`].
    pub fn from_records<R>(records: Option<Vec<R>>) -> Self
    where
        T: From<R>,
    {
        let items = records
            .unwrap_or_default()
            .into_iter()
            .map(T::from)
            .collect();

        Self {
            items,
            ..Self::default()
        }
    }

    /// Applies a fallible transformation to every item, stopping at the
    /// first failure.
    pub fn try_map_items<U, E, F>(self, f: F) -> Result<ResultSet<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;

        Ok(ResultSet {
            items,
            count: self.count,
            limit: self.limit,
            total_count: self.total_count,
        })
    }

    /// Sets `count`, `limit` and `total_count` to the number of items.
    pub fn with_counts(self) -> Self {
        let n = self.items.len();
        Self {
            count: n,
            limit: n,
            total_count: n,
            ..self
        }
    }
}
