use rocket::fairing::AdHoc;

use crate::api::configs;
use crate::db::DatabaseInfo;

/// Connects the configured database and puts it into managed state.
///
/// Ignition is aborted if the `databases.main` section is malformed, or if
/// the database can not be reached or migrated.
pub fn init() -> AdHoc {
    AdHoc::try_on_ignite("Database", |rocket| async move {
        let config = match configs::get_database_config(rocket.figment()) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "invalid database configuration");
                return Err(rocket);
            }
        };
        match DatabaseInfo::from(config).connect().await {
            Ok(db) => Ok(rocket.manage(db)),
            Err(e) => {
                tracing::error!(error = ?e, "failed to initialize database");
                Err(rocket)
            }
        }
    })
}
