use crate::db::seek::{OrderSpec, Predicate, SeekPlan};

///
/// SeekTarget
///
/// Seam to an external query builder. The pager hands a compiled plan over
/// piecewise; implementors translate each part into their own dialect.
///

pub trait SeekTarget {
    /// Add the seek filter. Not called on a first page.
    fn filter(&mut self, predicate: &Predicate);

    /// Replace the ordering with these terms (physical directions).
    fn order_by(&mut self, order: &OrderSpec);

    /// Cap the number of fetched rows.
    fn limit(&mut self, limit: u32);
}

impl SeekPlan {
    /// Push every part of this plan into `target`.
    pub fn apply_to<T: SeekTarget + ?Sized>(&self, target: &mut T) {
        if let Some(predicate) = &self.predicate {
            target.filter(predicate);
        }
        target.order_by(&self.order);
        if let Some(limit) = self.limit {
            target.limit(limit);
        }
    }
}
