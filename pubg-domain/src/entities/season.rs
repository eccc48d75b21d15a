use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub is_current_season: bool,
    pub is_offseason: bool,
}
