// backend_portfolio/src/site.rs
use log::{info, warn};
use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::fs::{FileServer, NamedFile};
use rocket::{catch, catchers, get, routes, Build, Request, Rocket, State};
use std::path::PathBuf;

use crate::error::Result;
use crate::settings::SiteSettings;

/// Assemble the site serving the bundle in `public_dir`.
pub fn build_rocket(figment: Figment) -> Result<Rocket<Build>> {
    let settings = SiteSettings::from_figment(&figment)?;
    let files = FileServer::from(&settings.public_dir);

    Ok(rocket::custom(figment)
        .mount("/", files)
        .mount("/", routes![spa_fallback])
        .register("/", catchers![not_found])
        .attach(AdHoc::on_liftoff("Site summary", |rocket| {
            Box::pin(async move {
                if let Some(settings) = rocket.state::<SiteSettings>() {
                    info!("Serving site from {}", settings.public_dir.display());
                }
            })
        }))
        .manage(settings))
}

/// Serve `index.html` for client-side routes. Ranked after `FileServer` (rank 10)
/// so real files always win.
/// ### Arguments
/// - `path`: any path that did not match a file under `public_dir`; `None` when
///   a segment is rejected (dotfiles, `..`)
/// ### Returns
/// - `index.html` for extensionless paths, `404` otherwise
/// ### Examples
/// - `curl -i http://localhost:8000/about` → index.html
/// - `curl -i http://localhost:8000/img/missing.png` → 404
/// - `curl -i http://localhost:8000/.env` → 404
#[get("/<path..>", rank = 20)]
pub async fn spa_fallback(path: Option<PathBuf>, settings: &State<SiteSettings>) -> Option<NamedFile> {
    if path?.extension().is_some() {
        return None;
    }

    match NamedFile::open(settings.index_file()).await {
        Ok(file) => Some(file),
        Err(err) => {
            warn!("Cannot open {}: {err}", settings.index_file().display());
            None
        }
    }
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> String {
    format!("Nothing found at {}", req.uri())
}
