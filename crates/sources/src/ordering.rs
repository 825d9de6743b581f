//! Orderings a provider can apply before truncating to the requested limit.

use catalog::Mentor;
use std::cmp::Ordering;

/// Sort order for `find_mentors`.
///
/// Every ordering falls back to ascending id, so results are fully
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentorOrder {
    /// Ascending id only
    Unordered,
    /// `updatedAt` descending
    RecentlyUpdated,
    /// `createdAt` descending
    Newest,
    /// Rating descending, then review count descending
    Reputation,
    /// `totalMentorships` descending, then `updatedAt` descending
    MostActive,
}

impl MentorOrder {
    pub fn compare(&self, a: &Mentor, b: &Mentor) -> Ordering {
        let primary = match self {
            MentorOrder::Unordered => Ordering::Equal,
            MentorOrder::RecentlyUpdated => b.updated_at.cmp(&a.updated_at),
            MentorOrder::Newest => b.created_at.cmp(&a.created_at),
            MentorOrder::Reputation => b
                .rating_or_zero()
                .total_cmp(&a.rating_or_zero())
                .then_with(|| b.reviews_or_zero().cmp(&a.reviews_or_zero())),
            MentorOrder::MostActive => b
                .total_mentorships
                .cmp(&a.total_mentorships)
                .then_with(|| b.updated_at.cmp(&a.updated_at)),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    /// Sort `mentors` in place
    pub fn sort(&self, mentors: &mut [Mentor]) {
        mentors.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mentor;
    use chrono::Duration;

    fn ids(mentors: &[Mentor]) -> Vec<&str> {
        mentors.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_unordered_is_id_order() {
        let mut mentors = vec![mentor("c"), mentor("a"), mentor("b")];
        MentorOrder::Unordered.sort(&mut mentors);
        assert_eq!(ids(&mentors), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_newest_first() {
        let mut old = mentor("a");
        old.created_at -= Duration::days(30);
        let mut mentors = vec![old, mentor("b")];

        MentorOrder::Newest.sort(&mut mentors);
        assert_eq!(ids(&mentors), vec!["b", "a"]);
    }

    #[test]
    fn test_reputation_uses_reviews_as_second_key() {
        let mut few = mentor("a");
        few.rating = Some(4.5);
        few.total_reviews = Some(2);
        let mut many = mentor("b");
        many.rating = Some(4.5);
        many.total_reviews = Some(30);
        let mut best = mentor("c");
        best.rating = Some(4.9);
        let unrated = mentor("d");

        let mut mentors = vec![unrated, few, many, best];
        MentorOrder::Reputation.sort(&mut mentors);
        assert_eq!(ids(&mentors), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_most_active_tie_breaks_on_recency() {
        let mut busy = mentor("a");
        busy.total_mentorships = 9;
        let mut stale = mentor("b");
        stale.total_mentorships = 3;
        stale.updated_at -= Duration::days(1);
        let mut fresh = mentor("c");
        fresh.total_mentorships = 3;

        let mut mentors = vec![stale, fresh, busy];
        MentorOrder::MostActive.sort(&mut mentors);
        assert_eq!(ids(&mentors), vec!["a", "c", "b"]);
    }
}
