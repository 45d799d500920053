use crate::bootstrap::ProvisionBackend;
use crate::models::{AppUser, CollectionState, SampleUser};
use crate::utils::{
    create_collection_error, insert_error, user_creation_error, BootstrapError, DriverFailure,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{ClientOptions, CreateCollectionOptions};
use mongodb::results::CollectionType;
use mongodb::{Client, Database};
use std::time::Duration;

/// Administrative connection used for provisioning
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
}

impl MongoDB {
    pub async fn connect(uri: &str) -> Result<Self, BootstrapError> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| BootstrapError::ConnectionError(format!("invalid MONGODB_URI: {}", e)))?;

        // Servidor fora do ar deve falhar rápido, não travar o init do container
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));
        client_options.app_name = Some("mongo-bootstrap".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| BootstrapError::ConnectionError(e.to_string()))?;

        // Test connection
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| BootstrapError::ConnectionError(format!("ping failed: {}", e)))?;

        Ok(Self { client })
    }

    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }
}

/// Plain collection with default options is reusable, anything else conflicts
pub fn classify_collection(
    collection_type: &CollectionType,
    options: &CreateCollectionOptions,
) -> CollectionState {
    match collection_type {
        CollectionType::Collection => {}
        CollectionType::View => return CollectionState::Conflicting("exists as a view".into()),
        CollectionType::Timeseries => {
            return CollectionState::Conflicting("exists as a timeseries collection".into())
        }
        _ => return CollectionState::Conflicting("exists with an unknown type".into()),
    }

    if options.capped == Some(true) {
        return CollectionState::Conflicting("exists as a capped collection".into());
    }
    if options.validator.is_some() {
        return CollectionState::Conflicting("exists with a validator".into());
    }

    CollectionState::Present
}

#[async_trait]
impl ProvisionBackend for MongoDB {
    async fn create_user(&self, database: &str, user: &AppUser) -> Result<(), BootstrapError> {
        let reply = self
            .database(database)
            .run_command(user.create_user_command())
            .await
            .map_err(|e| user_creation_error(&user.username, database, DriverFailure::from(&e)))?;

        log::debug!("   createUser reply: {}", reply);
        Ok(())
    }

    async fn collection_state(
        &self,
        database: &str,
        collection: &str,
    ) -> Result<CollectionState, BootstrapError> {
        let inspect_error = |e: mongodb::error::Error| {
            BootstrapError::CollectionExistsError(format!(
                "could not inspect collection '{}': {}",
                collection,
                DriverFailure::from(&e)
            ))
        };

        let mut cursor = self
            .database(database)
            .list_collections()
            .filter(doc! { "name": collection })
            .await
            .map_err(inspect_error)?;

        match cursor.try_next().await.map_err(inspect_error)? {
            Some(spec) => Ok(classify_collection(&spec.collection_type, &spec.options)),
            None => Ok(CollectionState::Missing),
        }
    }

    async fn create_collection(&self, database: &str, collection: &str) -> Result<(), BootstrapError> {
        self.database(database)
            .create_collection(collection)
            .await
            .map_err(|e| create_collection_error(collection, DriverFailure::from(&e)))
    }

    async fn insert_sample(
        &self,
        database: &str,
        collection: &str,
        document: &SampleUser,
    ) -> Result<Option<ObjectId>, BootstrapError> {
        let result = self
            .database(database)
            .collection::<SampleUser>(collection)
            .insert_one(document)
            .await
            .map_err(|e| insert_error(collection, DriverFailure::from(&e)))?;

        Ok(result.inserted_id.as_object_id())
    }
}

/// Helper for the ignored live tests
#[cfg(test)]
pub async fn find_all(db: &Database, collection: &str) -> Vec<mongodb::bson::Document> {
    db.collection::<mongodb::bson::Document>(collection)
        .find(doc! {})
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap()
}
