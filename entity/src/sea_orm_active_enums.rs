use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Playing position of a footballer, stored as a 3-character code.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(3))",
    enum_name = "position"
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    #[sea_orm(string_value = "GK")]
    Gk,
    #[sea_orm(string_value = "DEF")]
    Def,
    #[sea_orm(string_value = "MID")]
    Mid,
    #[sea_orm(string_value = "ATT")]
    Att,
}
