use mongodb::error::{Error as DriverError, ErrorKind, WriteFailure};
use std::fmt;

/// Código do servidor para `createUser` quando o usuário já existe
pub const USER_ALREADY_EXISTS: i32 = 51003;
/// Código do servidor para `create` quando a collection (ou view) já existe
pub const NAMESPACE_EXISTS: i32 = 48;

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapError {
    ConfigurationError(String),
    ConnectionError(String),
    UserCreationError(String),
    CollectionExistsError(String),
    InsertError(String),
}

impl BootstrapError {
    /// Stable kind name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            BootstrapError::ConfigurationError(_) => "ConfigurationError",
            BootstrapError::ConnectionError(_) => "ConnectionError",
            BootstrapError::UserCreationError(_) => "UserCreationError",
            BootstrapError::CollectionExistsError(_) => "CollectionExistsError",
            BootstrapError::InsertError(_) => "InsertError",
        }
    }
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            BootstrapError::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
            BootstrapError::UserCreationError(msg) => write!(f, "User creation error: {}", msg),
            BootstrapError::CollectionExistsError(msg) => write!(f, "Collection exists: {}", msg),
            BootstrapError::InsertError(msg) => write!(f, "Insert error: {}", msg),
        }
    }
}

impl std::error::Error for BootstrapError {}

/// What we keep from a driver error: the server code (if the server answered) and a message
#[derive(Debug, Clone, PartialEq)]
pub struct DriverFailure {
    pub code: Option<i32>,
    pub code_name: Option<String>,
    pub message: String,
}

impl DriverFailure {
    pub fn is(&self, code: i32) -> bool {
        self.code == Some(code)
    }
}

impl fmt::Display for DriverFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.code_name.as_deref()) {
            (Some(code), Some(name)) if !name.is_empty() => {
                write!(f, "{} {} - {}", code, name, self.message)
            }
            (Some(code), _) => write!(f, "{} - {}", code, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl From<&DriverError> for DriverFailure {
    fn from(err: &DriverError) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Command(cmd) => DriverFailure {
                code: Some(cmd.code),
                code_name: Some(cmd.code_name.clone()),
                message: cmd.message.clone(),
            },
            ErrorKind::Write(WriteFailure::WriteError(write)) => DriverFailure {
                code: Some(write.code),
                code_name: write.code_name.clone(),
                message: write.message.clone(),
            },
            _ => DriverFailure {
                code: None,
                code_name: None,
                message: err.to_string(),
            },
        }
    }
}

/// createUser: qualquer falha (duplicado, role negada) é UserCreationError
pub fn user_creation_error(username: &str, database: &str, failure: DriverFailure) -> BootstrapError {
    if failure.is(USER_ALREADY_EXISTS) {
        BootstrapError::UserCreationError(format!(
            "user '{}' already exists in '{}' ({})",
            username, database, failure
        ))
    } else {
        BootstrapError::UserCreationError(format!(
            "could not create user '{}' in '{}': {}",
            username, database, failure
        ))
    }
}

/// create: NamespaceExists vira CollectionExistsError, o resto também é fatal
pub fn create_collection_error(collection: &str, failure: DriverFailure) -> BootstrapError {
    if failure.is(NAMESPACE_EXISTS) {
        BootstrapError::CollectionExistsError(format!(
            "collection '{}' already exists ({})",
            collection, failure
        ))
    } else {
        BootstrapError::CollectionExistsError(format!(
            "could not create collection '{}': {}",
            collection, failure
        ))
    }
}

pub fn insert_error(collection: &str, failure: DriverFailure) -> BootstrapError {
    BootstrapError::InsertError(format!("insert into '{}' failed: {}", collection, failure))
}
