use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::comments::CommentsOptions;
use commands::config::{load_config, ConfigSetOptions};
use commands::filter::FilterOptions;
use commands::posts::PostsOptions;
use commands::show::ShowOptions;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber at the level selected by the global flags.
fn init_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli))
        .with_writer(std::io::stderr)
        .init();
}

fn log_level(cli: &Cli) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, config);

    match &cli.command {
        Some(Commands::Posts {
            query,
            autor,
            estado,
            etiqueta,
            categoria,
            busqueda,
            ordenar,
            pagina,
            limite,
            viewer,
        }) => {
            let opts = PostsOptions {
                query: query.clone(),
                autor: autor.clone(),
                estado: estado.clone(),
                etiqueta: etiqueta.clone(),
                categoria: categoria.clone(),
                busqueda: busqueda.clone(),
                ordenar: *ordenar,
                pagina: *pagina,
                limite: *limite,
                viewer: viewer.clone(),
            };
            commands::posts::execute(&ctx, &opts)
        }
        Some(Commands::Show { id, viewer }) => {
            let opts = ShowOptions {
                id: id.clone(),
                viewer: viewer.clone(),
            };
            commands::show::execute(&ctx, &opts)
        }
        Some(Commands::Comments {
            post_id,
            estado,
            pagina,
            limite,
            viewer,
        }) => {
            let opts = CommentsOptions {
                post_id: post_id.clone(),
                estado: estado.clone(),
                pagina: *pagina,
                limite: *limite,
                viewer: viewer.clone(),
            };
            commands::comments::execute(&ctx, &opts)
        }
        Some(Commands::Stats) => commands::stats::execute(&ctx),
        Some(Commands::Init { force }) => commands::init::execute(&ctx, *force),
        Some(Commands::Filter {
            file,
            query,
            fields,
        }) => {
            let opts = FilterOptions {
                file,
                query,
                fields,
            };
            commands::filter::execute(&ctx, &opts)
        }
        Some(Commands::Parse { query }) => commands::parse::execute(&ctx, query),
        Some(Commands::Config { command }) => match command {
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
            Some(ConfigCommands::Set { key, value }) => {
                let opts = ConfigSetOptions {
                    key: key.clone(),
                    value: value.clone(),
                };
                commands::config::execute_set(&ctx, &opts)
            }
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(*shell).map_err(CommandError::Io)
        }
        None => {
            if !ctx.quiet {
                println!("blogq - query, list and summarize blog posts");
                println!("Use --help for usage information");
            }
            Ok(())
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "STORE_ERROR",
        CommandError::NotFound { .. } => "NOT_FOUND",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Input(_) => "INPUT_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Input(_) | CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Store(_) => 4,
        CommandError::Config(_) | CommandError::NotFound { .. } => 5,
    }
}
