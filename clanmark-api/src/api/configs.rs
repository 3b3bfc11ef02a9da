use rocket::{
    figment::Figment,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Config {
    pub api_key: Option<String>,
    /// Header carrying the id of the signed in user, set by the auth gateway.
    pub user_header: String,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            user_header: "X-User-Id".to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct DatabaseConfig {
    /// Without an url bookmarks are kept in memory.
    pub url: Option<String>,
    pub max_connections: usize,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 8,
            run_migrations: true,
        }
    }
}

pub fn config_provider() -> Figment {
    use rocket::figment::providers::{Env, Serialized};

    rocket::figment::Figment::from(rocket::Config::default())
        .merge(Serialized::defaults(Config::default()))
        .merge(("databases.main", DatabaseConfig::default()))
        .merge(Env::prefixed("CM_").global())
}

/// Read the `databases.main` section. A section that does not deserialize is
/// an error, it never degrades to the in-memory store.
pub fn get_database_config(
    figment: &Figment,
) -> Result<DatabaseConfig, rocket::figment::Error> {
    figment.extract_inner::<DatabaseConfig>("databases.main")
}
