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

use azurite_common::character::CharacterField;
use azurite_common::jobs::JobTable;
use azurite_store::Database;
use azurite_store::config::{Arguments, Command, Configuration};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    let config = Configuration::load_or_default(&arguments.config_file)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let jobs = match &arguments.jobs_file {
        Some(path) => JobTable::load(path),
        None => JobTable::bundled(),
    };
    let jobs = match jobs {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("Failed to load job table: {}", e);
            return Err(e.into());
        }
    };
    tracing::debug!("Loaded {} jobs", jobs.len());

    tracing::info!(
        "Using database {} at {}:{}",
        config.database.schema(),
        config.database.host(),
        config.database.port()
    );
    let database = Database::new(&config.database, jobs);

    let output = match arguments.command {
        Command::Character { name } => {
            let character = database.character_by_name(&name).await?;
            json!({
                "character": character.snapshot(),
                "account": character.account().snapshot(),
                "inventory": character.inventory(),
                "avatar": character.avatar_url(),
            })
        }
        Command::Account { username } => {
            let account = database.account_by_username(&username).await?;
            json!({ "account": account.snapshot() })
        }
        Command::Ranking {
            kind,
            limit,
            include_gms,
        } => {
            let field = match kind.as_str() {
                "level" => CharacterField::Level,
                "meso" | "mesos" => CharacterField::Meso,
                "fame" => CharacterField::Fame,
                "rebirth" | "rebirths" => CharacterField::Rebirths,
                other => return Err(format!("Unknown ranking {}", other).into()),
            };
            let ranking = database.ranking(field, limit, include_gms).await?;
            json!({ "ranking": field.to_string(), "entries": ranking })
        }
        Command::Online => {
            let count = database.online_count().await?;
            let players = database.online_players().await?;
            json!({ "count": count, "players": players })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
