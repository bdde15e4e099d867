//! NovaCard CLI - relay server and command-line submissions
//!
//! # Commands
//!
//! ```bash
//! novacard serve                         # Start relay server (port 3000)
//! novacard validate --full-name ... ...  # Check a submission without sending it
//! novacard submit --full-name ... ...    # Validate, then forward once to the webhook
//! ```
//!
//! The webhook URL comes from `--webhook-url` or `NOVACARD_WEBHOOK_URL`
//! (a `.env` file is loaded when present).

use clap::{Args, Parser, Subcommand};
use novacard::{load_upload, validate, RawFormInput, RelayConfig, SubmissionPayload, WebhookRelay};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "novacard")]
#[command(about = "Validate NovaCard details and relay them to a webhook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP relay server
    Serve {
        /// Port to listen on (default: NOVACARD_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Webhook URL (default: NOVACARD_WEBHOOK_URL)
        #[arg(long)]
        webhook_url: Option<String>,

        /// Serve the compiled frontend from this directory
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Validate form values without sending them
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Validate form values, then forward them to the webhook
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Webhook URL (default: NOVACARD_WEBHOOK_URL)
        #[arg(long)]
        webhook_url: Option<String>,
    },
}

#[derive(Args)]
struct FormArgs {
    /// Full name (at least 2 characters)
    #[arg(long)]
    full_name: String,

    /// Contact number, e.g. +919876543210
    #[arg(long)]
    contact_number: String,

    /// Birth date as DD-MM-YYYY
    #[arg(long)]
    birth_date: String,

    /// Profile picture (JPG, PNG or GIF, up to 5MB)
    #[arg(long)]
    profile_pic: PathBuf,

    /// Signature image (JPG or PNG, up to 2MB)
    #[arg(long)]
    signature: PathBuf,
}

impl FormArgs {
    fn load(&self) -> Result<RawFormInput, Box<dyn std::error::Error>> {
        let profile_pic = load_upload(&self.profile_pic)
            .map_err(|e| format!("Cannot read {}: {}", self.profile_pic.display(), e))?;
        let signature = load_upload(&self.signature)
            .map_err(|e| format!("Cannot read {}: {}", self.signature.display(), e))?;

        Ok(RawFormInput {
            full_name: self.full_name.clone(),
            contact_number: self.contact_number.clone(),
            birth_date: self.birth_date.clone(),
            profile_pic: vec![profile_pic],
            signature: vec![signature],
        })
    }
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            webhook_url,
            static_dir,
        } => cmd_serve(port, webhook_url, static_dir).await,

        Commands::Validate { form } => cmd_validate(&form),

        Commands::Submit { form, webhook_url } => cmd_submit(&form, webhook_url).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    port: Option<u16>,
    webhook_url: Option<String>,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = RelayConfig::from_env(webhook_url, port)?;
    if let Some(dir) = static_dir {
        config = config.with_static_dir(dir);
    }
    novacard::server::start_server(config).await?;
    Ok(())
}

/// Validate and print the outcome. Returns the payload when valid.
fn check(form: &FormArgs) -> Result<SubmissionPayload, Box<dyn std::error::Error>> {
    let input = form.load()?;

    match validate(&input) {
        Ok(values) => {
            eprintln!("✔️  All fields valid");
            eprintln!("   Name:       {}", values.full_name);
            eprintln!("   Contact:    {}", values.contact_number);
            eprintln!("   Birth date: {}", values.birth_date);
            eprintln!(
                "   Files:      {} ({} bytes), {} ({} bytes)",
                values.profile_picture.file_name,
                values.profile_picture.size(),
                values.signature.file_name,
                values.signature.size()
            );
            Ok(values.into())
        }
        Err(errors) => {
            eprintln!("❌ {} invalid field(s):", errors.len());
            for (field, message) in errors.iter() {
                eprintln!("   - {}: {}", field.label(), message);
            }
            Err("Validation failed".into())
        }
    }
}

fn cmd_validate(form: &FormArgs) -> Result<(), Box<dyn std::error::Error>> {
    check(form)?;
    Ok(())
}

async fn cmd_submit(form: &FormArgs, webhook_url: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::from_env(webhook_url, None)?;
    let payload = check(form)?;

    eprintln!("📤 Submitting...");
    let result = WebhookRelay::from_config(&config).submit(&payload).await;

    if result.success {
        eprintln!("✨ {}", result.message);
        Ok(())
    } else {
        Err(result.message.into())
    }
}
