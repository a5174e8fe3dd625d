use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub validate: bool,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let log_filter = env::var("NPCF_LOG")
            .unwrap_or_else(|_| "npcf=info".to_string());

        let validate = env::var("NPCF_VALIDATE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let pretty = env::var("NPCF_PRETTY")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Self {
            log_filter,
            validate,
            pretty,
        })
    }
}
