use contracts::domain::a013_visitor::aggregate::Visitor;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_visitors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub visitor_id: i32,
    pub visitor_ip: String,
    pub visitor_user_agent: String,
    pub visitor_accept: Option<String>,
    pub visitor_encoding: Option<String>,
    pub visitor_language: Option<String>,
    pub visitor_host: Option<String>,
    pub first_visit_time: chrono::DateTime<chrono::Utc>,
    pub last_visit_time: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Visitor {
    fn from(m: Model) -> Self {
        Visitor {
            visitor_id: m.visitor_id,
            visitor_ip: m.visitor_ip,
            visitor_user_agent: m.visitor_user_agent,
            visitor_accept: m.visitor_accept,
            visitor_encoding: m.visitor_encoding,
            visitor_language: m.visitor_language,
            visitor_host: m.visitor_host,
            first_visit_time: m.first_visit_time,
            last_visit_time: m.last_visit_time,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Visitor) -> ActiveModel {
    ActiveModel {
        visitor_id: NotSet,
        visitor_ip: Set(aggregate.visitor_ip.clone()),
        visitor_user_agent: Set(aggregate.visitor_user_agent.clone()),
        visitor_accept: Set(aggregate.visitor_accept.clone()),
        visitor_encoding: Set(aggregate.visitor_encoding.clone()),
        visitor_language: Set(aggregate.visitor_language.clone()),
        visitor_host: Set(aggregate.visitor_host.clone()),
        first_visit_time: Set(aggregate.first_visit_time),
        last_visit_time: Set(aggregate.last_visit_time),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Visitor>> {
    let items = Entity::find()
        .order_by_desc(Column::LastVisitTime)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<Visitor>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// One log row per IP + user agent pair
pub async fn get_by_ip_and_agent(
    ip: &str,
    user_agent: &str,
) -> anyhow::Result<Option<Visitor>> {
    let result = Entity::find()
        .filter(Column::VisitorIp.eq(ip))
        .filter(Column::VisitorUserAgent.eq(user_agent))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Visitor) -> anyhow::Result<i32> {
    let active = to_active(aggregate);
    let inserted = active.insert(conn()).await?;
    Ok(inserted.visitor_id)
}

pub async fn update(aggregate: &Visitor) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.visitor_id = Set(aggregate.visitor_id);
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
