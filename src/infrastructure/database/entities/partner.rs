// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "partners")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub upload_key: String,
    pub date_added: ChronoDateTimeWithTimeZone,
    pub platform: Option<String>,
    pub partner_type: Option<String>,
    pub config: Option<String>,
    pub partner_status: String,
    pub has_landing_page: bool,
    pub support_channel: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub commission: Option<f64>,
    pub notes: Option<String>,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
