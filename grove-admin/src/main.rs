/*
 * main.rs
 *
 * grove-admin - Administration tool for grove silo storage
 * Copyright (C) 2026 the grove authors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! Administration tool for grove silo storage.

extern crate color_backtrace;
extern crate grove;
extern crate grove_core;

#[macro_use]
extern crate log;
extern crate pretty_env_logger;

#[macro_use]
extern crate serde;
extern crate structopt;
extern crate tokio;
extern crate toml;

mod config;

use self::config::{Command, Config};
use grove::{Config as GroveConfig, Server};
use grove_core::{flatten, Result};
use std::process;

#[tokio::main]
async fn main() {
    color_backtrace::install();

    if let Err(error) = run().await {
        eprintln!("grove-admin: {}", error);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let Config {
        database_url,
        pool_size,
        log_level,
        session_key,
        command,
    } = Config::parse_args()?;

    pretty_env_logger::formatted_builder()
        .filter_level(log_level)
        .init();

    debug!("Building grove server configuration");
    let config = GroveConfig {
        database_url: &database_url,
        pool_size,
        session_key,
    };

    let server = Server::new(config)?;

    match command {
        Command::Migrate => {
            server.migrate().await?;
            println!("Schema is up to date");
        }
        Command::CreateUser {
            username,
            display_name,
            password,
        } => {
            let user_id = server
                .create_user(&username, &display_name, &password)
                .await?;

            println!("Created user '{}' with ID {}", username, user_id);
        }
        Command::CreateSilo {
            name,
            slug,
            cover_image,
        } => {
            let (silo_id, page_id) = server
                .create_silo(&name, &slug, cover_image.as_deref())
                .await?;

            println!(
                "Created silo '{}' with ID {} (home page ID {})",
                slug, silo_id, page_id,
            );
        }
        Command::ListSilos => {
            for silo in server.list_silos().await? {
                println!("{}\t{}\t{}", silo.id(), silo.slug(), silo.name());
            }
        }
        Command::Tree { silo_slug } => {
            let silo = server.get_silo_by_slug(&silo_slug).await?;
            let tree = server.get_page_tree(silo.id()).await?;

            for node in flatten(&tree) {
                let depth = node.path().matches('/').count();

                println!(
                    "{:indent$}{} ({}) [{}]",
                    "",
                    node.slug(),
                    node.title(),
                    node.id(),
                    indent = depth * 2,
                );
            }
        }
    }

    Ok(())
}
