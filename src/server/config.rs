use std::error::Error;
use std::fs;

use crate::models::config::Config;
use crate::models::errors::InternalError;
use crate::server::Server;

impl Server {
  pub(super) async fn init_service_config(&self) -> Result<(), Box<dyn Error>> {
    let path = "minimart.server.init_service_config";

    let yaml_string = fs::read_to_string("config.yaml").map_err(|e| InternalError {
      temp: false,
      err: Box::new(e),
      msg: "failed to load service config file".into(),
      path: path.into(),
    })?;

    let parsed_config: Config = serde_yaml::from_str(&yaml_string).map_err(|e| InternalError {
      temp: false,
      err: Box::new(e),
      msg: "failed to parse config data".into(),
      path: path.into(),
    })?;

    let mut config = self.service_config.lock().await;
    *config = parsed_config;

    Ok(())
  }
}
