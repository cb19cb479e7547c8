use chrono::Utc;

use super::repository;
use contracts::domain::a010_graph_rule::aggregate::{GraphRule, GraphRuleDto};

pub async fn create(dto: GraphRuleDto) -> anyhow::Result<i32> {
    let aggregate = GraphRule::new_for_insert(dto, Utc::now());

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn update(dto: GraphRuleDto) -> anyhow::Result<()> {
    let id = dto.id.ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::update(&aggregate).await
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn deactivate(rule_name: &str) -> anyhow::Result<()> {
    let done = repository::deactivate(rule_name).await?;
    if !done {
        return Err(anyhow::anyhow!("Unknown graph rule: {}", rule_name));
    }
    Ok(())
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<GraphRule>> {
    repository::get_by_id(id).await
}

pub async fn get_by_name(rule_name: &str) -> anyhow::Result<Option<GraphRule>> {
    repository::get_by_name(rule_name).await
}

pub async fn list_all() -> anyhow::Result<Vec<GraphRule>> {
    repository::list_all().await
}

pub async fn list_public() -> anyhow::Result<Vec<GraphRule>> {
    repository::list_public().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(name: &str, public: bool) -> GraphRuleDto {
        GraphRuleDto {
            rule_name: name.into(),
            rule_packages: vec!["anaconda".into()],
            rule_langs: vec!["fr_FR".into(), "ja_JP".into()],
            rule_relbranch: "f41".into(),
            rule_visibility_public: public,
            ..Default::default()
        }
    }

    #[test]
    fn rules_without_packages_are_rejected() {
        test_support::run(async {
            let mut empty = dto("empty-rule", false);
            empty.rule_packages.clear();
            assert!(create(empty).await.is_err());
        });
    }

    #[test]
    fn deactivated_rules_leave_the_public_list() {
        test_support::run(async {
            create(dto("installer-coverage", true)).await.unwrap();

            let listed = list_public().await.unwrap();
            assert!(listed.iter().any(|r| r.rule_name == "installer-coverage"));

            deactivate("installer-coverage").await.unwrap();

            let listed = list_public().await.unwrap();
            assert!(!listed.iter().any(|r| r.rule_name == "installer-coverage"));
        });
    }

    #[test]
    fn duplicate_rule_name_is_rejected() {
        test_support::run(async {
            create(dto("dup-rule", false)).await.unwrap();
            assert!(create(dto("dup-rule", false)).await.is_err());
        });
    }
}
