//! Enrollment statistics domain service.

use std::collections::HashMap;

use crate::domain::entities::CourseCount;
use crate::domain::value_objects::CourseCountWithName;

/// Label used when a counted course no longer exists upstream.
pub const UNKNOWN_COURSE_NAME: &str = "Unknown";

/// Pure derivations over enrollment aggregates.
pub struct EnrollmentStatsService;

impl EnrollmentStatsService {
    /// Sum of all per-course counts.
    pub fn total(counts: &[CourseCount]) -> i64 {
        counts.iter().map(|c| c.count).sum()
    }

    /// Distinct course ids in first-seen order.
    pub fn distinct_course_ids(counts: &[CourseCount]) -> Vec<i32> {
        let mut ids = Vec::with_capacity(counts.len());
        for c in counts {
            if !ids.contains(&c.course_id) {
                ids.push(c.course_id);
            }
        }
        ids
    }

    /// Join counts with course names, keeping the order of `counts`.
    ///
    /// A course id with no matching name is labelled [`UNKNOWN_COURSE_NAME`]
    /// instead of failing the join.
    pub fn label_counts<'a, N>(counts: &[CourseCount], names: N) -> Vec<CourseCountWithName>
    where
        N: IntoIterator<Item = (i32, &'a str)>,
    {
        let names: HashMap<i32, &str> = names.into_iter().collect();

        counts
            .iter()
            .map(|c| {
                let course_name = match names.get(&c.course_id) {
                    Some(name) => (*name).to_string(),
                    None => {
                        tracing::debug!(course_id = c.course_id, "No course found for count row");
                        UNKNOWN_COURSE_NAME.to_string()
                    }
                };
                CourseCountWithName {
                    course_id: c.course_id,
                    course_name,
                    count: c.count,
                }
            })
            .collect()
    }

    /// Highest counts first, at most `limit` entries.
    ///
    /// The sort is stable: equal counts keep their enumeration order.
    pub fn top_courses(mut rows: Vec<CourseCountWithName>, limit: usize) -> Vec<CourseCountWithName> {
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows.truncate(limit);
        rows
    }
}
