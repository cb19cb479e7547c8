use contracts::domain::a011_cache_api::aggregate::CachedResponse;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_cacheapi")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cache_api_id: i32,
    pub base_url: String,
    pub resource: String,
    pub request_args: Json,
    pub request_kwargs: String,
    pub response_content: String,
    pub response_content_json: Option<Json>,
    pub expiry: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CachedResponse {
    fn from(m: Model) -> Self {
        CachedResponse {
            cache_api_id: m.cache_api_id,
            base_url: m.base_url,
            resource: m.resource,
            request_args: serde_json::from_value(m.request_args).unwrap_or_default(),
            request_kwargs: m.request_kwargs,
            response_content: m.response_content,
            response_content_json: m.response_content_json,
            expiry: m.expiry,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<CachedResponse>> {
    let items = Entity::find()
        .order_by_asc(Column::BaseUrl)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Most recent entry for a base URL + resource pair. Expiry is returned to
/// the caller untouched; no eviction happens here.
pub async fn get_for_resource(
    base_url: &str,
    resource: &str,
) -> anyhow::Result<Option<CachedResponse>> {
    let result = Entity::find()
        .filter(Column::BaseUrl.eq(base_url))
        .filter(Column::Resource.eq(resource))
        .order_by_desc(Column::CacheApiId)
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &CachedResponse) -> anyhow::Result<i32> {
    let active = ActiveModel {
        cache_api_id: NotSet,
        base_url: Set(aggregate.base_url.clone()),
        resource: Set(aggregate.resource.clone()),
        request_args: Set(serde_json::json!(aggregate.request_args)),
        request_kwargs: Set(aggregate.request_kwargs.clone()),
        response_content: Set(aggregate.response_content.clone()),
        response_content_json: Set(aggregate.response_content_json.clone()),
        expiry: Set(aggregate.expiry),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.cache_api_id)
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
