//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_SCHEMA: &str = "kms_316";
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_CHARSET: &str = "euckr";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "config.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file, `.env` when omitted"
    )]
    pub env_file: Option<String>,

    #[arg(
        short = 'j',
        long = "jobs",
        help = "Path to a job table overriding the bundled one"
    )]
    pub jobs_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show a character with its account and inventory
    Character { name: String },
    /// Show an account
    Account { username: String },
    /// Show a leaderboard: level, meso, fame or rebirths
    Ranking {
        kind: String,
        #[arg(short = 'l', long = "limit", default_value_t = 10)]
        limit: u64,
        #[arg(long = "include-gms")]
        include_gms: bool,
    },
    /// Show who is logged in
    Online,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Configuration, String> {
        let conf = serde_yaml::from_reader(
            std::fs::File::open(path).map_err(|e| format!("Failed to open config file: {}", e))?,
        )
        .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(conf)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &str) -> Result<Configuration, String> {
        if std::path::Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration file at {}, using defaults", path);
            Ok(Configuration::default())
        }
    }
}

/// Connection settings. Every field may use `${VAR}` substitution.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: Option<EnvField<String>>,
    pub schema: Option<EnvField<String>>,
    pub user: Option<EnvField<String>>,
    pub password: Option<EnvField<String>>,
    pub port: Option<EnvField<u16>>,
    /// Character set the schema stores text in. Connections always use
    /// utf8mb4 and let the server transcode.
    pub charset: Option<EnvField<String>>,
}

impl DatabaseConfig {
    pub fn host(&self) -> &str {
        self.host.as_ref().map_or(DEFAULT_HOST, |host| host.as_str())
    }

    pub fn schema(&self) -> &str {
        self.schema.as_ref().map_or(DEFAULT_SCHEMA, |schema| schema.as_str())
    }

    pub fn user(&self) -> &str {
        self.user.as_ref().map_or(DEFAULT_USER, |user| user.as_str())
    }

    pub fn password(&self) -> &str {
        self.password.as_ref().map_or("", |password| password.as_str())
    }

    pub fn port(&self) -> u16 {
        self.port.as_ref().map_or(DEFAULT_PORT, |port| **port)
    }

    pub fn charset(&self) -> &str {
        self.charset.as_ref().map_or(DEFAULT_CHARSET, |charset| charset.as_str())
    }
}
