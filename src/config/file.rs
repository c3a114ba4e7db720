// src/config/file.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use crate::error::{Error, Result};
use super::FromIni;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("pearl.xml"),
            output_path: PathBuf::from("kwic.csv"),
            log_file: None,
        }
    }
}

impl FromIni for FileConfig {
    fn from_ini_section(&mut self, _section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        match key {
            "input_path" => {
                self.input_path = PathBuf::from(value.trim_matches('"'));
                Some(Ok(()))
            },
            "output_path" => {
                self.output_path = PathBuf::from(value.trim_matches('"'));
                Some(Ok(()))
            },
            "log_file" => {
                let value = value.trim_matches('"');
                self.log_file = if value.is_empty() { None } else { Some(PathBuf::from(value)) };
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::Config("input_path must not be empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::Config("output_path must not be empty".to_string()));
        }
        if self.input_path == self.output_path {
            return Err(Error::Config(
                format!("output_path would overwrite the input document: {:?}", self.output_path)
            ));
        }
        Ok(())
    }
}
