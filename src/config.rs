use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_DATA_DIR: &str = "db";

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "JWT_SECRET must be set".to_owned())?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("invalid PORT value: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let data_dir = env::var("DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_owned())
            .into();

        Ok(Config {
            jwt_secret,
            port,
            data_dir,
        })
    }
}
