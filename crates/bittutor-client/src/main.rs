use anyhow::{Context, Result};
use bittutor_client::config::ClientConfig;
use bittutor_client::form::{fields, FormValues};
use bittutor_client::SubmissionClient;
use bittutor_protocol::ServerResponse;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bittutor", version, about = "Register or sign in to a BitTutor server")]
struct Cli {
    /// Server URL, overrides the configured one
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Open the sign-in page in the browser after registering
    #[arg(long, global = true)]
    open: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Register(RegisterArgs),
    /// Sign in with an existing account
    Login(LoginArgs),
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    fullname: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    /// Highest completed level of studies
    #[arg(long)]
    studies: String,
    #[arg(long)]
    age: String,
    #[arg(long, default_value = "")]
    resume: String,
    /// Profile picture to upload
    #[arg(long)]
    image: Option<PathBuf>,
}

impl RegisterArgs {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new()
            .with_value(fields::FULL_NAME, self.fullname)
            .with_value(fields::EMAIL, self.email)
            .with_value(fields::PASSWORD, self.password)
            .with_value(fields::STUDIES, self.studies)
            .with_value(fields::AGE, self.age)
            .with_value(fields::RESUME, self.resume);

        if let Some(image) = self.image {
            form.set_file(fields::IMAGE, image);
        }

        form
    }
}

#[derive(Args)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

impl LoginArgs {
    fn into_form(self) -> FormValues {
        FormValues::new()
            .with_value(fields::EMAIL, self.email)
            .with_value(fields::PASSWORD, self.password)
    }
}

fn report(response: &ServerResponse) {
    println!("result: {}", response.result_text());
    println!("operation: {}", response.operation);
    println!("{}", response.body());
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bittutor=info,bittutor_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if cli.open {
        config.open_browser = true;
    }
    config.validate()?;

    let client = SubmissionClient::new(&config).context("Failed to create HTTP client")?;

    match cli.command {
        Command::Register(args) => {
            let outcome = client
                .register(&args.into_form())
                .await
                .context("Registration failed")?;

            report(&outcome.response);
            println!("Registration complete!");
            println!("Sign in at {}", outcome.sign_in_url);

            if config.open_browser {
                if let Err(e) = open::that(&outcome.sign_in_url) {
                    tracing::warn!("Failed to open browser: {}", e);
                }
            }
        }
        Command::Login(args) => {
            let response = client
                .login(&args.into_form())
                .await
                .context("Login failed")?;

            report(&response);
        }
    }

    Ok(())
}
