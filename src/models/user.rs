use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

pub const SAMPLE_USER_NAME: &str = "Sample User";
pub const SAMPLE_USER_EMAIL: &str = "user@example.com";

/// Document stored in the `users` collection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SampleUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: BsonDateTime,
}

impl SampleUser {
    /// Seed document, stamped with the current time
    pub fn sample() -> Self {
        Self {
            id: None,
            name: SAMPLE_USER_NAME.to_string(),
            email: SAMPLE_USER_EMAIL.to_string(),
            created_at: BsonDateTime::now(),
        }
    }
}
