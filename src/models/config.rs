use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
  pub service: ServiceConfig,
  pub database: DatabaseConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
  pub env: String,
  pub http_host: String,
  pub http_port: u16,
  pub default_user_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
  pub uri: String,
  pub name: String,
  pub max_pool_size: u32,
  pub connect_timeout_milliseconds: u64,
  pub server_selection_timeout_milliseconds: u64,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      service: ServiceConfig {
        env: "".to_string(),
        http_host: "".to_string(),
        http_port: 0,
        default_user_id: "".to_string(),
      },
      database: DatabaseConfig {
        uri: "".to_string(),
        name: "".to_string(),
        max_pool_size: 0,
        connect_timeout_milliseconds: 0,
        server_selection_timeout_milliseconds: 0,
      },
    }
  }
}
