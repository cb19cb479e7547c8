use chrono::Utc;
use contracts::domain::a006_package::aggregate::Package;
use contracts::enums::trans_format::TranslationFormat;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_packages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub package_id: i32,
    pub package_name: String,
    pub upstream_name: Option<String>,
    pub component: Option<String>,
    pub upstream_url: String,
    pub platform_slug: String,
    pub platform_name: Option<String>,
    pub platform_url: Option<String>,
    pub release_streams: Json,
    pub details_json: Option<Json>,
    pub details_json_last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub name_map_json: Option<Json>,
    pub release_branch_map_json: Option<Json>,
    pub mapping_last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub stats_diff_json: Option<Json>,
    pub stats_last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub upstream_latest_stats_json: Option<Json>,
    pub upstream_last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub downstream_last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub translation_file_ext: String,
    pub created_by: Option<String>,
    pub maintainers_json: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Package {
    fn from(m: Model) -> Self {
        Package {
            package_id: m.package_id,
            package_name: m.package_name,
            upstream_name: m.upstream_name,
            component: m.component,
            upstream_url: m.upstream_url,
            platform_slug: m.platform_slug,
            platform_name: m.platform_name,
            platform_url: m.platform_url,
            release_streams: serde_json::from_value(m.release_streams).unwrap_or_default(),
            details_json: m.details_json,
            details_json_last_updated: m.details_json_last_updated,
            name_map_json: m.name_map_json,
            release_branch_map_json: m.release_branch_map_json,
            mapping_last_updated: m.mapping_last_updated,
            stats_diff_json: m.stats_diff_json,
            stats_last_updated: m.stats_last_updated,
            upstream_latest_stats_json: m.upstream_latest_stats_json,
            upstream_last_updated: m.upstream_last_updated,
            downstream_last_updated: m.downstream_last_updated,
            translation_file_ext: TranslationFormat::from_code(&m.translation_file_ext)
                .unwrap_or_default(),
            created_by: m.created_by,
            maintainers_json: m.maintainers_json,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Package) -> ActiveModel {
    ActiveModel {
        package_id: NotSet,
        package_name: Set(aggregate.package_name.clone()),
        upstream_name: Set(aggregate.upstream_name.clone()),
        component: Set(aggregate.component.clone()),
        upstream_url: Set(aggregate.upstream_url.clone()),
        platform_slug: Set(aggregate.platform_slug.clone()),
        platform_name: Set(aggregate.platform_name.clone()),
        platform_url: Set(aggregate.platform_url.clone()),
        release_streams: Set(serde_json::json!(aggregate.release_streams)),
        details_json: Set(aggregate.details_json.clone()),
        details_json_last_updated: Set(aggregate.details_json_last_updated),
        name_map_json: Set(aggregate.name_map_json.clone()),
        release_branch_map_json: Set(aggregate.release_branch_map_json.clone()),
        mapping_last_updated: Set(aggregate.mapping_last_updated),
        stats_diff_json: Set(aggregate.stats_diff_json.clone()),
        stats_last_updated: Set(aggregate.stats_last_updated),
        upstream_latest_stats_json: Set(aggregate.upstream_latest_stats_json.clone()),
        upstream_last_updated: Set(aggregate.upstream_last_updated),
        downstream_last_updated: Set(aggregate.downstream_last_updated),
        translation_file_ext: Set(aggregate.translation_file_ext.code().to_string()),
        created_by: Set(aggregate.created_by.clone()),
        maintainers_json: Set(aggregate.maintainers_json.clone()),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Package>> {
    let items = Entity::find()
        .order_by_asc(Column::PackageName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_platform(platform_slug: &str) -> anyhow::Result<Vec<Package>> {
    let items = Entity::find()
        .filter(Column::PlatformSlug.eq(platform_slug))
        .order_by_asc(Column::PackageName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<Package>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_name(package_name: &str) -> anyhow::Result<Option<Package>> {
    let result = Entity::find()
        .filter(Column::PackageName.eq(package_name))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Package) -> anyhow::Result<i32> {
    let active = to_active(aggregate);
    let inserted = active.insert(conn()).await?;
    Ok(inserted.package_id)
}

pub async fn update(aggregate: &Package) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.package_id = Set(aggregate.package_id);
    active.update(conn()).await?;
    Ok(())
}

/// Replace the stats diff blob and stamp the stats refresh time
pub async fn set_stats_diff(package_name: &str, diff: Json) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::StatsDiffJson, Expr::value(diff))
        .col_expr(Column::StatsLastUpdated, Expr::value(Utc::now()))
        .filter(Column::PackageName.eq(package_name))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// Replace the platform details blob and stamp its refresh time
pub async fn set_details(package_name: &str, details: Json) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::DetailsJson, Expr::value(details))
        .col_expr(Column::DetailsJsonLastUpdated, Expr::value(Utc::now()))
        .filter(Column::PackageName.eq(package_name))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
