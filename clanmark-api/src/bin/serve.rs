use clanmark_api::api::configs::{self, Config};
use clanmark_api::utils::logging;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let figment = configs::config_provider();
    let config = figment.extract::<Config>()?;
    let _guard = logging::setup_log(config.log_dir.as_deref());

    _ = clanmark_api::build(figment).launch().await?;
    Ok(())
}
