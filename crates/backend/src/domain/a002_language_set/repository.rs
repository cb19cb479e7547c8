use contracts::domain::a002_language_set::aggregate::LanguageSet;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_langset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub lang_set_id: i32,
    pub lang_set_name: String,
    pub lang_set_slug: String,
    pub lang_set_color: String,
    pub locale_ids: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LanguageSet {
    fn from(m: Model) -> Self {
        LanguageSet {
            lang_set_id: m.lang_set_id,
            lang_set_name: m.lang_set_name,
            lang_set_slug: m.lang_set_slug,
            lang_set_color: m.lang_set_color,
            locale_ids: serde_json::from_value(m.locale_ids).unwrap_or_default(),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<LanguageSet>> {
    let items = Entity::find()
        .order_by_asc(Column::LangSetName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<LanguageSet>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<LanguageSet>> {
    let result = Entity::find()
        .filter(Column::LangSetSlug.eq(slug))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &LanguageSet) -> anyhow::Result<i32> {
    let active = ActiveModel {
        lang_set_id: NotSet,
        lang_set_name: Set(aggregate.lang_set_name.clone()),
        lang_set_slug: Set(aggregate.lang_set_slug.clone()),
        lang_set_color: Set(aggregate.lang_set_color.clone()),
        locale_ids: Set(serde_json::json!(aggregate.locale_ids)),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.lang_set_id)
}

pub async fn update(aggregate: &LanguageSet) -> anyhow::Result<()> {
    let active = ActiveModel {
        lang_set_id: Set(aggregate.lang_set_id),
        lang_set_name: Set(aggregate.lang_set_name.clone()),
        lang_set_slug: Set(aggregate.lang_set_slug.clone()),
        lang_set_color: Set(aggregate.lang_set_color.clone()),
        locale_ids: Set(serde_json::json!(aggregate.locale_ids)),
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
