use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "DATABASE_URL")]
    pub database_url: Option<String>,
    #[envconfig(from = "DATABASE_NAME")]
    pub database_name: Option<String>,
    #[envconfig(from = "PORT", default = "8000")]
    pub port: u16,
}

impl Config {
    /// Connection string and database name, when both are configured.
    pub fn database(&self) -> Option<(&str, &str)> {
        match (&self.database_url, &self.database_name) {
            (Some(url), Some(name)) => Some((url, name)),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            database_name: None,
            port: 8000,
        }
    }
}
