use mongodb::bson::{doc, Bson, Document};

pub const READ_WRITE_ROLE: &str = "readWrite";

#[derive(Debug, Clone, PartialEq)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn to_bson(&self) -> Bson {
        Bson::Document(doc! { "role": self.role.as_str(), "db": self.db.as_str() })
    }
}

/// Database user created for the application. Lives in the target database.
#[derive(Debug, Clone, PartialEq)]
pub struct AppUser {
    pub username: String,
    pub password: String,
    pub roles: Vec<RoleGrant>,
}

impl AppUser {
    /// Usuário com readWrite somente no banco alvo
    pub fn read_write(username: &str, password: &str, database: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            roles: vec![RoleGrant {
                role: READ_WRITE_ROLE.to_string(),
                db: database.to_string(),
            }],
        }
    }

    /// `createUser` command body
    pub fn create_user_command(&self) -> Document {
        let roles: Vec<Bson> = self.roles.iter().map(RoleGrant::to_bson).collect();
        doc! {
            "createUser": self.username.as_str(),
            "pwd": self.password.as_str(),
            "roles": roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_is_scoped_to_target_database() {
        let user = AppUser::read_write("appuser", "pw", "testdb");
        assert_eq!(
            user.roles,
            vec![RoleGrant { role: "readWrite".into(), db: "testdb".into() }]
        );
    }

    #[test]
    fn test_create_user_command_shape() {
        let cmd = AppUser::read_write("appuser", "pw", "testdb").create_user_command();

        // createUser precisa ser a primeira chave do comando
        assert_eq!(cmd.keys().next().map(String::as_str), Some("createUser"));
        assert_eq!(cmd.get_str("createUser").unwrap(), "appuser");
        assert_eq!(cmd.get_str("pwd").unwrap(), "pw");

        let roles = cmd.get_array("roles").unwrap();
        assert_eq!(roles.len(), 1);
        let role = roles[0].as_document().unwrap();
        assert_eq!(role.get_str("role").unwrap(), "readWrite");
        assert_eq!(role.get_str("db").unwrap(), "testdb");
    }
}
