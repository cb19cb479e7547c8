use contracts::domain::a005_release_branch::aggregate::ReleaseBranch;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_relbranches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub relbranch_id: i32,
    pub relbranch_name: String,
    pub relbranch_slug: String,
    pub relstream_slug: String,
    pub lang_set: String,
    pub scm_branch: Option<String>,
    pub created_on: chrono::DateTime<chrono::Utc>,
    pub current_phase: Option<String>,
    pub calendar_url: Option<String>,
    pub schedule_json: Option<Json>,
    pub sync_calendar: bool,
    pub notifications_flag: bool,
    pub track_trans_flag: bool,
    pub created_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ReleaseBranch {
    fn from(m: Model) -> Self {
        ReleaseBranch {
            relbranch_id: m.relbranch_id,
            relbranch_name: m.relbranch_name,
            relbranch_slug: m.relbranch_slug,
            relstream_slug: m.relstream_slug,
            lang_set: m.lang_set,
            scm_branch: m.scm_branch,
            created_on: m.created_on,
            current_phase: m.current_phase,
            calendar_url: m.calendar_url,
            schedule_json: m.schedule_json,
            sync_calendar: m.sync_calendar,
            notifications_flag: m.notifications_flag,
            track_trans_flag: m.track_trans_flag,
            created_by: m.created_by,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &ReleaseBranch) -> ActiveModel {
    ActiveModel {
        relbranch_id: NotSet,
        relbranch_name: Set(aggregate.relbranch_name.clone()),
        relbranch_slug: Set(aggregate.relbranch_slug.clone()),
        relstream_slug: Set(aggregate.relstream_slug.clone()),
        lang_set: Set(aggregate.lang_set.clone()),
        scm_branch: Set(aggregate.scm_branch.clone()),
        created_on: Set(aggregate.created_on),
        current_phase: Set(aggregate.current_phase.clone()),
        calendar_url: Set(aggregate.calendar_url.clone()),
        schedule_json: Set(aggregate.schedule_json.clone()),
        sync_calendar: Set(aggregate.sync_calendar),
        notifications_flag: Set(aggregate.notifications_flag),
        track_trans_flag: Set(aggregate.track_trans_flag),
        created_by: Set(aggregate.created_by.clone()),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<ReleaseBranch>> {
    let items = Entity::find()
        .order_by_asc(Column::RelbranchSlug)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Branches under one release stream
pub async fn list_by_stream(relstream_slug: &str) -> anyhow::Result<Vec<ReleaseBranch>> {
    let items = Entity::find()
        .filter(Column::RelstreamSlug.eq(relstream_slug))
        .order_by_asc(Column::RelbranchSlug)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<ReleaseBranch>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<ReleaseBranch>> {
    let result = Entity::find()
        .filter(Column::RelbranchSlug.eq(slug))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &ReleaseBranch) -> anyhow::Result<i32> {
    let active = to_active(aggregate);
    let inserted = active.insert(conn()).await?;
    Ok(inserted.relbranch_id)
}

pub async fn update(aggregate: &ReleaseBranch) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.relbranch_id = Set(aggregate.relbranch_id);
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
