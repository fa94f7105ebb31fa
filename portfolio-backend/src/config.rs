use std::env;

/// SMTP account settings.
///
/// `user` doubles as the owner address: it is the authenticated sender and
/// the recipient of the owner notification.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub user: String,
    pub password: String,
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        // Mail is only configured when both credentials are present;
        // otherwise sends fail per-request while the server keeps running.
        let smtp = match (env::var("EMAIL_USER"), env::var("EMAIL_PASS")) {
            (Ok(user), Ok(password)) => Some(SmtpConfig {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                user,
                password,
            }),
            _ => None,
        };

        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            database_url: env::var("DATABASE_URL").ok(),
            smtp,
        }
    }
}
