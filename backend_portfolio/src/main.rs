// backend_portfolio/src/main.rs
mod error;
mod settings;
mod site;

use crate::error::{Result, ServerError};
use crate::settings::SiteSettings;

#[rocket::main]
async fn main() -> Result<()> {
    let rocket = site::build_rocket(SiteSettings::figment())?;

    rocket
        .launch()
        .await
        .map_err(|err| ServerError::Launch(err.to_string()))?;

    Ok(())
}
