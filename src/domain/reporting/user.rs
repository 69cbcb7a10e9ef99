use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Entity, UserId};

/// The dashboard owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub avatar: Option<String>,
}

impl Entity for UserProfile {
    const KIND: &'static str = "User";

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}
