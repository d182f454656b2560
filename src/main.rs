use sorted_stack::config::Config;
use sorted_stack::output;
use sorted_stack::session::Session;
use std::process::ExitCode;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    output::init(config.color);

    let mut session = Session::new(config);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();

    match session.run(stdin, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.report());
            ExitCode::FAILURE
        }
    }
}
