use chrono::Utc;

use super::repository;
use contracts::domain::a013_visitor::aggregate::{Visitor, VisitorDto};

/// Record a visit.
///
/// A new IP + user agent pair gets a fresh row with both timestamps at now;
/// a returning pair keeps its first-visit time and advances the last one.
/// The timestamp rule itself lives in the contracts crate
/// (`visit_timestamps`), applied here at the single write site.
pub async fn record_visit(dto: VisitorDto) -> anyhow::Result<Visitor> {
    let now = Utc::now();

    match repository::get_by_ip_and_agent(&dto.visitor_ip, &dto.visitor_user_agent).await? {
        Some(mut existing) => {
            existing.touch_visit(now);
            existing.visitor_accept = dto.visitor_accept;
            existing.visitor_encoding = dto.visitor_encoding;
            existing.visitor_language = dto.visitor_language;
            existing.visitor_host = dto.visitor_host;
            repository::update(&existing).await?;
            Ok(existing)
        }
        None => {
            let mut visitor = Visitor::new_for_insert(dto, now);
            visitor
                .validate()
                .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
            let id = repository::insert(&visitor).await?;
            visitor.visitor_id = id;
            Ok(visitor)
        }
    }
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<Visitor>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Visitor>> {
    repository::list_all().await
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    repository::delete(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(ip: &str) -> VisitorDto {
        VisitorDto {
            visitor_ip: ip.into(),
            visitor_user_agent: "Mozilla/5.0 (X11; Linux x86_64)".into(),
            visitor_language: Some("fr-FR".into()),
            ..Default::default()
        }
    }

    #[test]
    fn first_visit_sets_both_timestamps_together() {
        test_support::run(async {
            let visitor = record_visit(dto("203.0.113.10")).await.unwrap();
            assert_eq!(visitor.first_visit_time, visitor.last_visit_time);
            assert!(visitor.visitor_id > 0);
        });
    }

    #[test]
    fn revisit_keeps_first_visit_and_advances_last() {
        test_support::run(async {
            let first = record_visit(dto("203.0.113.20")).await.unwrap();
            let again = record_visit(dto("203.0.113.20")).await.unwrap();

            assert_eq!(again.visitor_id, first.visitor_id);
            assert_eq!(again.first_visit_time, first.first_visit_time);
            assert!(again.last_visit_time >= first.last_visit_time);

            // Still a single row for the pair
            let rows = list_all().await.unwrap();
            assert_eq!(
                rows.iter()
                    .filter(|v| v.visitor_ip == "203.0.113.20")
                    .count(),
                1
            );
        });
    }
}
