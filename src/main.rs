mod cli;

#[tokio::main]
async fn main() {
    match cli::run() {
        cli::RunOutcome::Serve(addr, config) => {
            println!("listening on http://{addr}");
            mergington::serve(addr, config).await;
        }
        cli::RunOutcome::Exit(code) => std::process::exit(code),
    }
}
