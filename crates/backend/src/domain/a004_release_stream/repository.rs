use chrono::Utc;
use contracts::domain::a004_release_stream::aggregate::ReleaseStream;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_relstreams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub relstream_id: i32,
    pub relstream_name: String,
    pub relstream_slug: String,
    pub relstream_server: String,
    pub relstream_built: Option<String>,
    pub relstream_built_tags: Json,
    pub built_tags_last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub srcpkg_format: Option<String>,
    pub top_url: String,
    pub web_url: Option<String>,
    pub krb_service: Option<String>,
    pub auth_type: Option<String>,
    pub amqp_server: Option<String>,
    pub msgbus_exchange: Option<String>,
    pub major_milestones: Json,
    pub relstream_phases: Json,
    pub relstream_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn string_list(value: Json) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

impl From<Model> for ReleaseStream {
    fn from(m: Model) -> Self {
        ReleaseStream {
            relstream_id: m.relstream_id,
            relstream_name: m.relstream_name,
            relstream_slug: m.relstream_slug,
            relstream_server: m.relstream_server,
            relstream_built: m.relstream_built,
            relstream_built_tags: string_list(m.relstream_built_tags),
            built_tags_last_updated: m.built_tags_last_updated,
            srcpkg_format: m.srcpkg_format,
            top_url: m.top_url,
            web_url: m.web_url,
            krb_service: m.krb_service,
            auth_type: m.auth_type,
            amqp_server: m.amqp_server,
            msgbus_exchange: m.msgbus_exchange,
            major_milestones: string_list(m.major_milestones),
            relstream_phases: string_list(m.relstream_phases),
            relstream_status: m.relstream_status,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &ReleaseStream) -> ActiveModel {
    ActiveModel {
        relstream_id: NotSet,
        relstream_name: Set(aggregate.relstream_name.clone()),
        relstream_slug: Set(aggregate.relstream_slug.clone()),
        relstream_server: Set(aggregate.relstream_server.clone()),
        relstream_built: Set(aggregate.relstream_built.clone()),
        relstream_built_tags: Set(serde_json::json!(aggregate.relstream_built_tags)),
        built_tags_last_updated: Set(aggregate.built_tags_last_updated),
        srcpkg_format: Set(aggregate.srcpkg_format.clone()),
        top_url: Set(aggregate.top_url.clone()),
        web_url: Set(aggregate.web_url.clone()),
        krb_service: Set(aggregate.krb_service.clone()),
        auth_type: Set(aggregate.auth_type.clone()),
        amqp_server: Set(aggregate.amqp_server.clone()),
        msgbus_exchange: Set(aggregate.msgbus_exchange.clone()),
        major_milestones: Set(serde_json::json!(aggregate.major_milestones)),
        relstream_phases: Set(serde_json::json!(aggregate.relstream_phases)),
        relstream_status: Set(aggregate.relstream_status),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<ReleaseStream>> {
    let items = Entity::find()
        .order_by_asc(Column::RelstreamSlug)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_enabled() -> anyhow::Result<Vec<ReleaseStream>> {
    let items = Entity::find()
        .filter(Column::RelstreamStatus.eq(true))
        .order_by_asc(Column::RelstreamSlug)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<ReleaseStream>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<ReleaseStream>> {
    let result = Entity::find()
        .filter(Column::RelstreamSlug.eq(slug))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &ReleaseStream) -> anyhow::Result<i32> {
    let active = to_active(aggregate);
    let inserted = active.insert(conn()).await?;
    Ok(inserted.relstream_id)
}

pub async fn update(aggregate: &ReleaseStream) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.relstream_id = Set(aggregate.relstream_id);
    active.update(conn()).await?;
    Ok(())
}

/// Replace the build-tag list and stamp its refresh time
pub async fn set_built_tags(slug: &str, tags: &[String]) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(
            Column::RelstreamBuiltTags,
            Expr::value(serde_json::json!(tags)),
        )
        .col_expr(Column::BuiltTagsLastUpdated, Expr::value(Utc::now()))
        .filter(Column::RelstreamSlug.eq(slug))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
