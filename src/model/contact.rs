use serde::{Deserialize, Serialize};

/// A message sent through the public contact page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    pub subject: String,
    pub message: String,
}
