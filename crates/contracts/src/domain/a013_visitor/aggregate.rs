use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// A web visitor's access log entry, keyed in practice by IP + user agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub visitor_id: i32,
    pub visitor_ip: String,
    pub visitor_user_agent: String,
    pub visitor_accept: Option<String>,
    pub visitor_encoding: Option<String>,
    pub visitor_language: Option<String>,
    pub visitor_host: Option<String>,
    pub first_visit_time: DateTime<Utc>,
    pub last_visit_time: DateTime<Utc>,
}

impl Visitor {
    /// Build a fresh entry; both timestamps start at `now`.
    pub fn new_for_insert(dto: VisitorDto, now: DateTime<Utc>) -> Self {
        let (first, last) = visit_timestamps(None, now);
        Self {
            visitor_id: 0,
            visitor_ip: dto.visitor_ip,
            visitor_user_agent: dto.visitor_user_agent,
            visitor_accept: dto.visitor_accept,
            visitor_encoding: dto.visitor_encoding,
            visitor_language: dto.visitor_language,
            visitor_host: dto.visitor_host,
            first_visit_time: first,
            last_visit_time: last,
        }
    }

    /// Re-visit: keep the original first-visit time, advance the last one.
    pub fn touch_visit(&mut self, now: DateTime<Utc>) {
        let (first, last) = visit_timestamps(Some(self.first_visit_time), now);
        self.first_visit_time = first;
        self.last_visit_time = last;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.visitor_ip.trim().is_empty() {
            return Err("Visitor IP cannot be empty".into());
        }
        if self.visitor_user_agent.trim().is_empty() {
            return Err("Visitor user agent cannot be empty".into());
        }
        Ok(())
    }
}

/// Visit-timestamp rule: the first-visit time is set once, when no previous
/// value exists; the last-visit time always advances to `now`.
pub fn visit_timestamps(
    previous_first_visit: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    (previous_first_visit.unwrap_or(now), now)
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisitorDto {
    pub visitor_ip: String,
    pub visitor_user_agent: String,
    pub visitor_accept: Option<String>,
    pub visitor_encoding: Option<String>,
    pub visitor_language: Option<String>,
    pub visitor_host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn first_visit_sets_both_timestamps() {
        let now = Utc::now();
        let (first, last) = visit_timestamps(None, now);
        assert_eq!(first, now);
        assert_eq!(last, now);
    }

    #[test]
    fn revisit_keeps_first_and_advances_last() {
        let first_seen = Utc::now();
        let later = first_seen + Duration::minutes(42);
        let (first, last) = visit_timestamps(Some(first_seen), later);
        assert_eq!(first, first_seen);
        assert_eq!(last, later);
    }

    #[test]
    fn touch_visit_applies_the_rule() {
        let start = Utc::now();
        let mut visitor = Visitor::new_for_insert(
            VisitorDto {
                visitor_ip: "198.51.100.7".into(),
                visitor_user_agent: "Mozilla/5.0".into(),
                ..Default::default()
            },
            start,
        );
        let later = start + Duration::hours(1);
        visitor.touch_visit(later);
        assert_eq!(visitor.first_visit_time, start);
        assert_eq!(visitor.last_visit_time, later);
    }
}
