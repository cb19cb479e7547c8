use chrono::Utc;
use contracts::domain::a003_trans_platform::aggregate::TransPlatform;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_transplatforms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub platform_id: i32,
    pub engine_name: String,
    pub subject: Option<String>,
    pub api_url: String,
    pub platform_slug: String,
    pub server_status: bool,
    pub projects_json: Option<Json>,
    pub projects_last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub auth_login_id: Option<String>,
    pub auth_token_key: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TransPlatform {
    fn from(m: Model) -> Self {
        TransPlatform {
            platform_id: m.platform_id,
            engine_name: m.engine_name,
            subject: m.subject,
            api_url: m.api_url,
            platform_slug: m.platform_slug,
            server_status: m.server_status,
            projects_json: m.projects_json,
            projects_last_updated: m.projects_last_updated,
            auth_login_id: m.auth_login_id,
            auth_token_key: m.auth_token_key,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<TransPlatform>> {
    let items = Entity::find()
        .order_by_asc(Column::PlatformSlug)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_enabled() -> anyhow::Result<Vec<TransPlatform>> {
    let items = Entity::find()
        .filter(Column::ServerStatus.eq(true))
        .order_by_asc(Column::PlatformSlug)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<TransPlatform>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<TransPlatform>> {
    let result = Entity::find()
        .filter(Column::PlatformSlug.eq(slug))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &TransPlatform) -> anyhow::Result<i32> {
    let active = ActiveModel {
        platform_id: NotSet,
        engine_name: Set(aggregate.engine_name.clone()),
        subject: Set(aggregate.subject.clone()),
        api_url: Set(aggregate.api_url.clone()),
        platform_slug: Set(aggregate.platform_slug.clone()),
        server_status: Set(aggregate.server_status),
        projects_json: Set(aggregate.projects_json.clone()),
        projects_last_updated: Set(aggregate.projects_last_updated),
        auth_login_id: Set(aggregate.auth_login_id.clone()),
        auth_token_key: Set(aggregate.auth_token_key.clone()),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.platform_id)
}

pub async fn update(aggregate: &TransPlatform) -> anyhow::Result<()> {
    let active = ActiveModel {
        platform_id: Set(aggregate.platform_id),
        engine_name: Set(aggregate.engine_name.clone()),
        subject: Set(aggregate.subject.clone()),
        api_url: Set(aggregate.api_url.clone()),
        platform_slug: Set(aggregate.platform_slug.clone()),
        server_status: Set(aggregate.server_status),
        projects_json: Set(aggregate.projects_json.clone()),
        projects_last_updated: Set(aggregate.projects_last_updated),
        auth_login_id: Set(aggregate.auth_login_id.clone()),
        auth_token_key: Set(aggregate.auth_token_key.clone()),
    };
    active.update(conn()).await?;
    Ok(())
}

/// Replace the cached projects payload and stamp its refresh time
pub async fn set_projects(slug: &str, projects: Json) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::ProjectsJson, Expr::value(projects))
        .col_expr(Column::ProjectsLastUpdated, Expr::value(Utc::now()))
        .filter(Column::PlatformSlug.eq(slug))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
