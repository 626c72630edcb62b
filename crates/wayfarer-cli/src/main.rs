//! Wayfarer CLI application
//!
//! Command-line interface and MCP server for the wayfarer travel planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WayfarerMcpServer};
use renderer::TerminalRenderer;
use wayfarer_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Wayfarer started");

    match command {
        Some(Trip { command }) => {
            Cli::new(planner, renderer)
                .handle_trip_command(command)
                .await
        }
        Some(Flight { command }) => {
            Cli::new(planner, renderer)
                .handle_flight_command(command)
                .await
        }
        Some(Hotel { command }) => {
            Cli::new(planner, renderer)
                .handle_hotel_command(command)
                .await
        }
        Some(Activity { command }) => {
            Cli::new(planner, renderer)
                .handle_activity_command(command)
                .await
        }
        Some(Itinerary(args)) => Cli::new(planner, renderer).handle_itinerary(args).await,
        Some(Search { command }) => {
            Cli::new(planner, renderer)
                .handle_search_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Wayfarer MCP server");
            run_stdio_server(WayfarerMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_trips().await,
    }
}
