use chrono::Utc;
use contracts::domain::a012_report::aggregate::Report;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ts_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub report_id: i32,
    pub report_subject: String,
    pub report_json: Option<Json>,
    pub report_updated: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Report {
    fn from(m: Model) -> Self {
        Report {
            report_id: m.report_id,
            report_subject: m.report_subject,
            report_json: m.report_json,
            report_updated: m.report_updated,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Report>> {
    let items = Entity::find()
        .order_by_asc(Column::ReportSubject)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_subject(subject: &str) -> anyhow::Result<Option<Report>> {
    let result = Entity::find()
        .filter(Column::ReportSubject.eq(subject))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Report) -> anyhow::Result<i32> {
    let active = ActiveModel {
        report_id: NotSet,
        report_subject: Set(aggregate.report_subject.clone()),
        report_json: Set(aggregate.report_json.clone()),
        report_updated: Set(aggregate.report_updated),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.report_id)
}

/// Replace a report body and stamp its refresh time
pub async fn set_body(subject: &str, body: Json) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::ReportJson, Expr::value(body))
        .col_expr(Column::ReportUpdated, Expr::value(Utc::now()))
        .filter(Column::ReportSubject.eq(subject))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
