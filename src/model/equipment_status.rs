use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// All equipment status names known to the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentStatusNamesDto {
    pub names: Vec<String>,
}
