use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match endpoint_scout::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = endpoint_scout::cli::usage_exit_code(&e);
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = endpoint_scout::cmd::execute(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
