use contracts::domain::a010_graph_rule::aggregate::GraphRule;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_graphrules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub graph_rule_id: i32,
    pub rule_name: String,
    pub rule_packages: Json,
    pub rule_langs: Json,
    pub rule_relbranch: String,
    pub created_on: chrono::DateTime<chrono::Utc>,
    pub rule_status: bool,
    pub rule_visibility_public: bool,
    pub created_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GraphRule {
    fn from(m: Model) -> Self {
        GraphRule {
            graph_rule_id: m.graph_rule_id,
            rule_name: m.rule_name,
            rule_packages: serde_json::from_value(m.rule_packages).unwrap_or_default(),
            rule_langs: serde_json::from_value(m.rule_langs).unwrap_or_default(),
            rule_relbranch: m.rule_relbranch,
            created_on: m.created_on,
            rule_status: m.rule_status,
            rule_visibility_public: m.rule_visibility_public,
            created_by: m.created_by,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &GraphRule) -> ActiveModel {
    ActiveModel {
        graph_rule_id: NotSet,
        rule_name: Set(aggregate.rule_name.clone()),
        rule_packages: Set(serde_json::json!(aggregate.rule_packages)),
        rule_langs: Set(serde_json::json!(aggregate.rule_langs)),
        rule_relbranch: Set(aggregate.rule_relbranch.clone()),
        created_on: Set(aggregate.created_on),
        rule_status: Set(aggregate.rule_status),
        rule_visibility_public: Set(aggregate.rule_visibility_public),
        created_by: Set(aggregate.created_by.clone()),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<GraphRule>> {
    let items = Entity::find()
        .order_by_asc(Column::RuleName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Active rules visible to anonymous visitors
pub async fn list_public() -> anyhow::Result<Vec<GraphRule>> {
    let items = Entity::find()
        .filter(Column::RuleStatus.eq(true))
        .filter(Column::RuleVisibilityPublic.eq(true))
        .order_by_asc(Column::RuleName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<GraphRule>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_name(rule_name: &str) -> anyhow::Result<Option<GraphRule>> {
    let result = Entity::find()
        .filter(Column::RuleName.eq(rule_name))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &GraphRule) -> anyhow::Result<i32> {
    let active = to_active(aggregate);
    let inserted = active.insert(conn()).await?;
    Ok(inserted.graph_rule_id)
}

pub async fn update(aggregate: &GraphRule) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.graph_rule_id = Set(aggregate.graph_rule_id);
    active.update(conn()).await?;
    Ok(())
}

/// Retire a rule without deleting its definition
pub async fn deactivate(rule_name: &str) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::RuleStatus, Expr::value(false))
        .filter(Column::RuleName.eq(rule_name))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
