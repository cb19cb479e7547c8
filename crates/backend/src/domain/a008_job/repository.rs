use contracts::domain::a008_job::aggregate::Job;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub job_id: i32,
    pub job_uuid: String,
    pub job_type: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub yml_text: Option<String>,
    pub log_json: Option<Json>,
    pub job_result: Option<bool>,
    pub remarks: Option<String>,
    pub template_id: Option<i32>,
    pub params_json: Option<Json>,
    pub output_json: Option<Json>,
    pub triggered_by: Option<String>,
    pub visible_on_url: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Job {
    fn from(m: Model) -> Self {
        Job {
            job_id: m.job_id,
            job_uuid: Uuid::parse_str(&m.job_uuid).unwrap_or_default(),
            job_type: m.job_type,
            start_time: m.start_time,
            end_time: m.end_time,
            yml_text: m.yml_text,
            log_json: m.log_json,
            job_result: m.job_result,
            remarks: m.remarks,
            template_id: m.template_id,
            params_json: m.params_json,
            output_json: m.output_json,
            triggered_by: m.triggered_by,
            visible_on_url: m.visible_on_url,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Job>> {
    let items = Entity::find()
        .order_by_desc(Column::StartTime)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Jobs exposed on their public log URL
pub async fn list_visible() -> anyhow::Result<Vec<Job>> {
    let items = Entity::find()
        .filter(Column::VisibleOnUrl.eq(true))
        .order_by_desc(Column::StartTime)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_uuid(job_uuid: Uuid) -> anyhow::Result<Option<Job>> {
    let result = Entity::find()
        .filter(Column::JobUuid.eq(job_uuid.to_string()))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Job) -> anyhow::Result<i32> {
    let active = ActiveModel {
        job_id: NotSet,
        job_uuid: Set(aggregate.job_uuid.to_string()),
        job_type: Set(aggregate.job_type.clone()),
        start_time: Set(aggregate.start_time),
        end_time: Set(aggregate.end_time),
        yml_text: Set(aggregate.yml_text.clone()),
        log_json: Set(aggregate.log_json.clone()),
        job_result: Set(aggregate.job_result),
        remarks: Set(aggregate.remarks.clone()),
        template_id: Set(aggregate.template_id),
        params_json: Set(aggregate.params_json.clone()),
        output_json: Set(aggregate.output_json.clone()),
        triggered_by: Set(aggregate.triggered_by.clone()),
        visible_on_url: Set(aggregate.visible_on_url),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.job_id)
}

/// Settle a finished job: end time, result, optional output blob
pub async fn set_finished(
    job_uuid: Uuid,
    end_time: chrono::DateTime<chrono::Utc>,
    result: bool,
    output_json: Option<Json>,
) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let mut update = Entity::update_many()
        .col_expr(Column::EndTime, Expr::value(end_time))
        .col_expr(Column::JobResult, Expr::value(result));
    if let Some(output) = output_json {
        update = update.col_expr(Column::OutputJson, Expr::value(output));
    }
    let res = update
        .filter(Column::JobUuid.eq(job_uuid.to_string()))
        .exec(conn())
        .await?;
    Ok(res.rows_affected > 0)
}

/// Append-replace the job log blob
pub async fn set_log(job_uuid: Uuid, log_json: Json) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let res = Entity::update_many()
        .col_expr(Column::LogJson, Expr::value(log_json))
        .filter(Column::JobUuid.eq(job_uuid.to_string()))
        .exec(conn())
        .await?;
    Ok(res.rows_affected > 0)
}

pub async fn delete(job_uuid: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::JobUuid.eq(job_uuid.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
