use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub(crate) enum RunOutcome {
    Serve(SocketAddr, mergington::config::AppConfig),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    run_with(Cli::parse())
}

fn run_with(cli: Cli) -> RunOutcome {
    if let Some(path) = cli.activities.as_ref()
        && !path.is_file()
    {
        eprintln!("error: activities catalog not found: {}", path.display());
        return RunOutcome::Exit(2);
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    RunOutcome::Serve(
        addr,
        mergington::config::AppConfig {
            app_name: cli.app_name,
            activities_file: cli.activities,
        },
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "mergington",
    version,
    about = "School extracurricular activities signup server"
)]
struct Cli {
    #[arg(long, default_value_t = 3000, env = "MERGINGTON_PORT")]
    port: u16,
    #[arg(long, default_value = "Mergington High School")]
    app_name: String,
    #[arg(long, env = "MERGINGTON_ACTIVITIES")]
    activities: Option<PathBuf>,
}
