use std::sync::Arc;
use std::{io, process};

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ssm_param::application::services::ParamService;
use ssm_param::cli::args::{Cli, Commands};
use ssm_param::cli::commands::execute_command;
use ssm_param::cli::{output, CliResult};
use ssm_param::infrastructure::{connect, SsmStore};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        print_completions(*shell, &mut cmd);
        return;
    }

    setup_logging(cli.debug);

    let Some(command) = &cli.command else {
        let mut cmd = Cli::command();
        eprintln!("{}", cmd.render_help());
        process::exit(1);
    };

    if let Err(e) = run(&cli, command).await {
        output::error(&e);
        process::exit(1);
    }
}

async fn run(cli: &Cli, command: &Commands) -> CliResult<()> {
    let session = connect(cli.profile.as_deref(), cli.region.as_deref()).await?;
    let service = ParamService::new(Arc::new(SsmStore::new(session.client)));
    execute_command(command, &service).await
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Max verbosity is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter (SDK internals drown out our own spans)
    let noisy_modules = ["hyper", "aws_smithy_runtime", "aws_config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
