//! Command-line shell around the handoff workflow: collects the form
//! input as arguments, runs one submission, and feeds callback URLs read
//! from standard input back into the workflow.

use crate::application::workflow::{HandoffWorkflow, SubmissionInput, WorkflowState};
use crate::domain::deep_link::parse_callback;
use crate::domain::environment::{DeepLinkConfig, Environment, Environments};
use crate::domain::ports::{LinkOpenerBox, PaymentApiBox};
use crate::infrastructure::device::DeviceInfo;
use crate::infrastructure::http::HttpPaymentApi;
use crate::infrastructure::opener::{PrintLinkOpener, SystemLinkOpener};
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::warn;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a payment session and hand off to the external Tap-to-Pay app.
    Submit(SubmitArgs),
    /// Parse a deep-link callback URL and print the outcome.
    Callback(CallbackArgs),
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Payment amount, as typed (at most two decimal places).
    #[arg(long)]
    pub amount: String,

    /// Store the session is scoped to.
    #[arg(long)]
    pub store_id: String,

    /// Optional order identifier forwarded to the external app.
    #[arg(long, default_value = "")]
    pub order_id: String,

    /// Target environment.
    #[arg(long, value_enum, default_value = "development")]
    pub environment: Environment,

    /// Print the launch link instead of handing it to the OS URL handler.
    #[arg(long)]
    pub print_link: bool,
}

#[derive(Args)]
pub struct CallbackArgs {
    /// The inbound callback URL.
    pub url: String,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Submit(args) => run_submit(args).await,
        Command::Callback(args) => run_callback(args),
    }
}

async fn run_submit(args: SubmitArgs) -> Result<()> {
    let api: PaymentApiBox = Box::new(HttpPaymentApi::new(DeviceInfo::detect()));
    let opener: LinkOpenerBox = if args.print_link {
        Box::new(PrintLinkOpener)
    } else {
        Box::new(SystemLinkOpener)
    };

    let mut workflow = HandoffWorkflow::new(
        api,
        opener,
        Environments::from_env(),
        DeepLinkConfig::from_env(),
    );

    workflow.prefetch_ip().await;

    let input = SubmissionInput {
        amount: args.amount,
        store_id: args.store_id,
        order_id: args.order_id,
        environment: args.environment,
    };
    workflow.submit(&input).await;

    if workflow.state() == &WorkflowState::AwaitingCallback {
        eprintln!("Awaiting callback. Paste the return URL and press Enter:");
        let mut inbox = spawn_deep_link_inbox();
        if let Some(url) = inbox.recv().await {
            workflow.on_deep_link(&url);
        }
    }

    let text = workflow.result_text();
    if !text.is_empty() {
        println!("{}", text.trim_end_matches('\n'));
    }
    Ok(())
}

fn run_callback(args: CallbackArgs) -> Result<()> {
    let url = Url::parse(&args.url).into_diagnostic()?;
    print!("{}", parse_callback(&url).render());
    Ok(())
}

/// Reads callback URLs from stdin for the lifetime of the process and
/// delivers them on a channel, decoupled from any submission's call
/// stack. Unparseable lines are skipped.
fn spawn_deep_link_inbox() -> mpsc::UnboundedReceiver<Url> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Url::parse(line) {
                Ok(url) => {
                    if tx.send(url).is_err() {
                        break;
                    }
                }
                Err(err) => warn!(error = %err, "ignoring unparseable callback line"),
            }
        }
    });
    rx
}
