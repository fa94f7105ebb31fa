use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod mailer;
mod models;

use config::Config;
use db::Database;
use mailer::{Mailer, SmtpMailer};

pub struct AppState {
    pub db: Arc<Database>,
    pub mailer: Arc<dyn Mailer>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    // Connect eagerly so a misconfigured store shows up in the logs at
    // startup; requests retry on their own if this fails
    let db = Arc::new(Database::new(config.database_url.clone()));
    if let Err(e) = db.connect() {
        log::warn!("Database not ready at startup: {}", e);
    }

    if config.smtp.is_none() {
        log::warn!("EMAIL_USER/EMAIL_PASS not set - notification emails will fail");
    }
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(config.smtp.clone()));

    log::info!("Starting portfolio backend on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                mailer: Arc::clone(&mailer),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::contact::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
