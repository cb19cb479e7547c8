use chrono::Utc;
use contracts::domain::a007_job_template::aggregate::JobTemplate;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_jobtemplates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub job_template_id: i32,
    pub job_template_type: String,
    pub job_template_name: String,
    pub job_template_desc: Option<String>,
    pub job_template_params: Json,
    pub job_template_json: Option<Json>,
    pub last_accessed: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for JobTemplate {
    fn from(m: Model) -> Self {
        JobTemplate {
            job_template_id: m.job_template_id,
            job_template_type: m.job_template_type,
            job_template_name: m.job_template_name,
            job_template_desc: m.job_template_desc,
            job_template_params: serde_json::from_value(m.job_template_params)
                .unwrap_or_default(),
            job_template_json: m.job_template_json,
            last_accessed: m.last_accessed,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &JobTemplate) -> ActiveModel {
    ActiveModel {
        job_template_id: NotSet,
        job_template_type: Set(aggregate.job_template_type.clone()),
        job_template_name: Set(aggregate.job_template_name.clone()),
        job_template_desc: Set(aggregate.job_template_desc.clone()),
        job_template_params: Set(serde_json::json!(aggregate.job_template_params)),
        job_template_json: Set(aggregate.job_template_json.clone()),
        last_accessed: Set(aggregate.last_accessed),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<JobTemplate>> {
    let items = Entity::find()
        .order_by_asc(Column::JobTemplateType)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<JobTemplate>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_type(template_type: &str) -> anyhow::Result<Option<JobTemplate>> {
    let result = Entity::find()
        .filter(Column::JobTemplateType.eq(template_type))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &JobTemplate) -> anyhow::Result<i32> {
    let active = to_active(aggregate);
    let inserted = active.insert(conn()).await?;
    Ok(inserted.job_template_id)
}

pub async fn update(aggregate: &JobTemplate) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.job_template_id = Set(aggregate.job_template_id);
    active.update(conn()).await?;
    Ok(())
}

/// Stamp the template as used just now
pub async fn touch_last_accessed(template_type: &str) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::LastAccessed, Expr::value(Utc::now()))
        .filter(Column::JobTemplateType.eq(template_type))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
