#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Feedback relay API server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use feedback_relay::{
    domain::feedback::{
        recipients::RecipientDirectory,
        service::{FeedbackServiceImpl, MailSettings},
    },
    infrastructure::{
        email::smtp::{SmtpConfig, SmtpMailer},
        http::{HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP and email configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    // Recipient entries may come from the real environment, so a missing
    // .env file is tolerated
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No environment file loaded: {}", e);
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let recipients = RecipientDirectory::from_env(args.smtp.default_recipient.clone());
    let settings = MailSettings::from(&args.smtp);
    let mailer = SmtpMailer::new(args.smtp);

    let feedback = FeedbackServiceImpl::new(settings, recipients, Arc::new(mailer));

    HttpServer::new(feedback, args.server).await?.run().await
}
