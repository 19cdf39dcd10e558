//! Terminal client for the Property Pulse auth API.
//!
//! Drives the same `SessionController` as the browser, with the token kept in
//! a file instead of `localStorage`.

mod api;
mod host;
mod store;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use session::{AuthError, SessionController, SessionStatus, UserProfile};

use crate::api::ReqwestAuthApi;
use crate::host::ConsoleHost;
use crate::store::FileStore;

type CliController = SessionController<FileStore, ReqwestAuthApi, ConsoleHost>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Already reported to the terminal through a notice.
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("not signed in; run `login` first")]
    NotSignedIn,
    #[error("auth api is unreachable or unhealthy")]
    Unhealthy,
}

#[derive(Parser, Debug)]
#[command(name = "property-pulse-cli", about = "Property Pulse auth session CLI")]
struct Cli {
    #[arg(long, env = "PROPERTY_PULSE_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[arg(long, env = "PROPERTY_PULSE_TOKEN_FILE", default_value = ".property-pulse/token")]
    token_file: String,

    /// Log controller activity to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the auth API is up.
    Health,
    /// Sign in and store the issued token.
    Login(LoginArgs),
    /// Register a new account and store the issued token.
    Signup(SignupArgs),
    /// Validate the stored token and show the signed-in user.
    Whoami,
    /// Forget the stored token.
    Logout,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "PROPERTY_PULSE_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long, env = "PROPERTY_PULSE_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long)]
    phone: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let controller = SessionController::new(
        FileStore::new(&cli.token_file),
        ReqwestAuthApi::new(&cli.api_url),
        ConsoleHost,
    );

    match run(&controller, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Auth(e)) if e.is_user_visible() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(controller: &CliController, command: Command) -> Result<(), CliError> {
    match command {
        Command::Health => {
            if session::api::probe_health(controller.api()).await {
                println!("ok");
                Ok(())
            } else {
                Err(CliError::Unhealthy)
            }
        }
        Command::Login(args) => {
            controller.initialize().await;
            controller.login(&args.email, &args.password).await?;
            print_user(controller);
            Ok(())
        }
        Command::Signup(args) => {
            controller.initialize().await;
            controller
                .signup(
                    &args.first_name,
                    &args.last_name,
                    &args.email,
                    &args.password,
                    args.phone.as_deref(),
                )
                .await?;
            print_user(controller);
            Ok(())
        }
        Command::Whoami => match controller.initialize().await {
            SessionStatus::Authenticated => {
                print_user(controller);
                Ok(())
            }
            SessionStatus::Unauthenticated | SessionStatus::Validating => Err(CliError::NotSignedIn),
        },
        Command::Logout => {
            controller.logout();
            Ok(())
        }
    }
}

fn print_user(controller: &CliController) {
    if let Some(user) = controller.snapshot().user {
        println!("{}", describe_user(&user));
    }
}

fn describe_user(user: &UserProfile) -> String {
    let mut line = format!("{} <{}>", user.full_name(), user.email);
    if user.is_admin() {
        line.push_str(" [admin]");
    }
    line
}
