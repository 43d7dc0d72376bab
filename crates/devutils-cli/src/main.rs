// Rust guideline compliant 2026-10-17

//! Tracker Devutils CLI Application
//!
//! Command-line access to the helpers a tracker's templates and forms use.

use clap::Parser;
use devutils_cli::{commands, init_tracing, Output};
use devutils_core::Request;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "devutils",
    version,
    about = "Tracker devutils: history, role and CLA helpers for an issue tracker",
    long_about = "Helpers for an issue tracker stored as JSONL files: attachment status from the audit history, role predicates, ok-message cleanup, CLA lookups and the random open issue redirect.",
    after_help = "Examples:\n  devutils init\n  devutils link-status msg 16\n  devutils history user 4 --user 1\n  devutils history-ok --user 4 --class user --id 5\n  devutils cla-check octocat,hubot\n  devutils random-issue\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Tracker directory (default: ./.tracker)
    #[arg(long, global = true)]
    tracker_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a tracker directory
    Init,

    /// Show whether a message or file is attached to an issue
    LinkStatus {
        /// Entity class (e.g. msg, file)
        class: String,

        /// Entity id
        id: String,
    },

    /// Show the audit history of an entity
    History {
        /// Entity class
        class: String,

        /// Entity id
        id: String,

        /// Only show the history if this user may see it
        #[arg(long)]
        user: Option<String>,
    },

    /// Check whether a user may view an entity's history
    HistoryOk {
        /// Requesting user id
        #[arg(long)]
        user: String,

        /// Class of the viewed entity
        #[arg(long)]
        class: String,

        /// Id of the viewed entity
        #[arg(long)]
        id: Option<String>,
    },

    /// Check whether a user is a coordinator
    Coordinator {
        /// User id
        #[arg(long)]
        user: String,
    },

    /// Check whether a user is a triager
    Triager {
        /// User id
        user_id: String,
    },

    /// Remove counter properties from an ok message read from stdin
    CleanOkMessage,

    /// Report CLA status for GitHub usernames
    ClaCheck {
        /// Comma-separated GitHub usernames
        names: String,
    },

    /// Print the redirect URL of a random open issue
    RandomIssue {
        /// Seed for a reproducible choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List registered utilities and actions
    Utils,
}

impl Commands {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Commands::Init => "init",
            Commands::LinkStatus { .. } => "link-status",
            Commands::History { .. } => "history",
            Commands::HistoryOk { .. } => "history-ok",
            Commands::Coordinator { .. } => "coordinator",
            Commands::Triager { .. } => "triager",
            Commands::CleanOkMessage => "clean-ok-message",
            Commands::ClaCheck { .. } => "cla-check",
            Commands::RandomIssue { .. } => "random-issue",
            Commands::Utils => "utils",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.as_ref().map_or("devutils", Commands::name);
    let out = Output::new(cli.json, command);

    let _guard = match init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", out.render_error(&err));
            return ExitCode::from(2);
        }
    };

    match run(cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            let rendered = out.render_error(&err);
            if out.is_json() {
                println!("{rendered}");
            } else {
                eprintln!("{rendered}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &Output) -> anyhow::Result<()> {
    let tracker_dir = cli.tracker_dir.as_deref();

    match cli.command {
        Some(Commands::Init) => {
            commands::init::execute(tracker_dir, out)?;
        }
        Some(Commands::LinkStatus { class, id }) => {
            commands::link_status::execute(tracker_dir, &class, &id, out)?;
        }
        Some(Commands::History { class, id, user }) => {
            commands::history::execute(tracker_dir, &class, &id, user.as_deref(), out)?;
        }
        Some(Commands::HistoryOk { user, class, id }) => {
            let request = Request::new(user, class, id);
            commands::roles::check_request(tracker_dir, "is_history_ok", &request, out)?;
        }
        Some(Commands::Coordinator { user }) => {
            let request = Request::new(user, "user", None);
            commands::roles::check_request(tracker_dir, "is_coordinator", &request, out)?;
        }
        Some(Commands::Triager { user_id }) => {
            commands::roles::check_user(tracker_dir, "is_triager", &user_id, out)?;
        }
        Some(Commands::CleanOkMessage) => {
            commands::message::execute(std::io::stdin().lock(), out)?;
        }
        Some(Commands::ClaCheck { names }) => {
            commands::cla::execute(tracker_dir, &names, out)?;
        }
        Some(Commands::RandomIssue { seed }) => {
            commands::random::execute(tracker_dir, seed, out)?;
        }
        Some(Commands::Utils) => {
            commands::utils::execute(out)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
