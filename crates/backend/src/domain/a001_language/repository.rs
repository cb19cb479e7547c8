use contracts::domain::a001_language::aggregate::Language;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_locales")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub locale_id: String,
    pub lang_name: String,
    pub locale_alias: Option<String>,
    pub locale_script: Option<String>,
    pub lang_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Language {
    fn from(m: Model) -> Self {
        Language {
            locale_id: m.locale_id,
            lang_name: m.lang_name,
            locale_alias: m.locale_alias,
            locale_script: m.locale_script,
            lang_status: m.lang_status,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Language) -> ActiveModel {
    ActiveModel {
        locale_id: Set(aggregate.locale_id.clone()),
        lang_name: Set(aggregate.lang_name.clone()),
        locale_alias: Set(aggregate.locale_alias.clone()),
        locale_script: Set(aggregate.locale_script.clone()),
        lang_status: Set(aggregate.lang_status),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Language>> {
    let items = Entity::find()
        .order_by_asc(Column::LangName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_enabled() -> anyhow::Result<Vec<Language>> {
    let items = Entity::find()
        .filter(Column::LangStatus.eq(true))
        .order_by_asc(Column::LangName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_locale(locale_id: &str) -> anyhow::Result<Option<Language>> {
    let result = Entity::find_by_id(locale_id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Language) -> anyhow::Result<String> {
    let active = to_active(aggregate);
    let inserted = active.insert(conn()).await?;
    Ok(inserted.locale_id)
}

pub async fn update(aggregate: &Language) -> anyhow::Result<()> {
    let active = to_active(aggregate);
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(locale_id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(locale_id.to_string())
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
