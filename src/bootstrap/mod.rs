// ==================== DATABASE BOOTSTRAP ====================
// Provisiona o banco alvo na primeira subida do container:
// usuário da aplicação, collection `users` e um documento de exemplo.
// Quatro passos em sequência, sem retry e sem rollback.

use crate::config::BootstrapConfig;
use crate::models::{AppUser, CollectionState, SampleUser};
use crate::utils::BootstrapError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use std::future::Future;
use std::time::Instant;

pub const USERS_COLLECTION: &str = "users";

/// Server operations the bootstrap needs
#[async_trait]
pub trait ProvisionBackend: Send + Sync {
    async fn create_user(&self, database: &str, user: &AppUser) -> Result<(), BootstrapError>;

    async fn collection_state(
        &self,
        database: &str,
        collection: &str,
    ) -> Result<CollectionState, BootstrapError>;

    async fn create_collection(&self, database: &str, collection: &str) -> Result<(), BootstrapError>;

    async fn insert_sample(
        &self,
        database: &str,
        collection: &str,
        document: &SampleUser,
    ) -> Result<Option<ObjectId>, BootstrapError>;
}

#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub database: String,
    pub username: String,
    pub collection: String,
    pub collection_created: bool,
    pub inserted_id: Option<ObjectId>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u128,
}

/// Resolve configuration first, only then open the connection and provision
pub async fn execute<R, C, Fut, B>(resolve: R, connect: C) -> Result<BootstrapReport, BootstrapError>
where
    R: FnOnce() -> Result<BootstrapConfig, BootstrapError>,
    C: FnOnce(BootstrapConfig) -> Fut,
    Fut: Future<Output = Result<(BootstrapConfig, B), BootstrapError>>,
    B: ProvisionBackend,
{
    let config = resolve()?;
    let (config, backend) = connect(config).await?;
    run(&backend, &config).await
}

/// Runs the four steps in order against an already connected backend
pub async fn run<B: ProvisionBackend + ?Sized>(
    backend: &B,
    config: &BootstrapConfig,
) -> Result<BootstrapReport, BootstrapError> {
    let started_at = Utc::now();
    let timer = Instant::now();
    let database = config.database.as_str();

    // 1. Banco alvo: o MongoDB cria no primeiro write
    log::info!("🗄️  Target database: {}", database);

    // 2. Usuário da aplicação
    let app_user = AppUser::read_write(&config.username, &config.password, database);
    log::info!("👤 Creating user '{}' with readWrite on '{}'...", app_user.username, database);
    backend.create_user(database, &app_user).await?;
    log::info!("   ✅ User '{}' created", app_user.username);

    // 3. Collection
    let collection_created = match backend.collection_state(database, USERS_COLLECTION).await? {
        CollectionState::Missing => {
            log::info!("📁 Creating collection '{}'...", USERS_COLLECTION);
            backend.create_collection(database, USERS_COLLECTION).await?;
            log::info!("   ✅ Collection '{}' created", USERS_COLLECTION);
            true
        }
        CollectionState::Present => {
            log::info!("📁 Collection '{}' already exists — skipping create", USERS_COLLECTION);
            false
        }
        CollectionState::Conflicting(reason) => {
            return Err(BootstrapError::CollectionExistsError(format!(
                "collection '{}' {}",
                USERS_COLLECTION, reason
            )));
        }
    };

    // 4. Documento de exemplo
    let sample = SampleUser::sample();
    log::info!("🌱 Inserting sample document into '{}'...", USERS_COLLECTION);
    let inserted_id = backend.insert_sample(database, USERS_COLLECTION, &sample).await?;
    match &inserted_id {
        Some(id) => log::info!("   ✅ Inserted sample user {}", id),
        None => log::info!("   ✅ Inserted sample user"),
    }

    Ok(BootstrapReport {
        database: database.to_string(),
        username: app_user.username,
        collection: USERS_COLLECTION.to_string(),
        collection_created,
        inserted_id,
        started_at,
        elapsed_ms: timer.elapsed().as_millis(),
    })
}
