use contracts::domain::a009_sync_stat::aggregate::SyncStat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_syncstats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sync_id: i32,
    pub package_name: String,
    pub job_uuid: String,
    pub project_version: Option<String>,
    pub source: Option<String>,
    pub stats_raw_json: Option<Json>,
    pub stats_processed_json: Option<Json>,
    pub sync_iter_count: i32,
    pub sync_visibility: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SyncStat {
    fn from(m: Model) -> Self {
        SyncStat {
            sync_id: m.sync_id,
            package_name: m.package_name,
            job_uuid: Uuid::parse_str(&m.job_uuid).unwrap_or_default(),
            project_version: m.project_version,
            source: m.source,
            stats_raw_json: m.stats_raw_json,
            stats_processed_json: m.stats_processed_json,
            sync_iter_count: m.sync_iter_count,
            sync_visibility: m.sync_visibility,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_by_package(package_name: &str) -> anyhow::Result<Vec<SyncStat>> {
    let items = Entity::find()
        .filter(Column::PackageName.eq(package_name))
        .order_by_desc(Column::SyncIterCount)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_job(job_uuid: Uuid) -> anyhow::Result<Vec<SyncStat>> {
    let items = Entity::find()
        .filter(Column::JobUuid.eq(job_uuid.to_string()))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Latest visible snapshot for a package, by iteration count
pub async fn latest_for_package(package_name: &str) -> anyhow::Result<Option<SyncStat>> {
    let result = Entity::find()
        .filter(Column::PackageName.eq(package_name))
        .filter(Column::SyncVisibility.eq(true))
        .order_by_desc(Column::SyncIterCount)
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &SyncStat) -> anyhow::Result<i32> {
    let active = ActiveModel {
        sync_id: NotSet,
        package_name: Set(aggregate.package_name.clone()),
        job_uuid: Set(aggregate.job_uuid.to_string()),
        project_version: Set(aggregate.project_version.clone()),
        source: Set(aggregate.source.clone()),
        stats_raw_json: Set(aggregate.stats_raw_json.clone()),
        stats_processed_json: Set(aggregate.stats_processed_json.clone()),
        sync_iter_count: Set(aggregate.sync_iter_count),
        sync_visibility: Set(aggregate.sync_visibility),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.sync_id)
}

/// Hide all older snapshots of a package from default listings
pub async fn hide_for_package(package_name: &str) -> anyhow::Result<u64> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::SyncVisibility, Expr::value(false))
        .filter(Column::PackageName.eq(package_name))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete(sync_id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(sync_id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
