//! Command-line argument definition and processing.

use std::process::ExitCode;

use clap::Parser;

/// vidya-lingo - translate portal text into the learner's language
#[derive(Parser, Debug)]
#[command(name = "vidya-lingo")]
#[command(version)]
#[command(about = "Translate learning-portal text into the selected display language", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Select and persist the display language (name or tag, e.g. Hindi or hi)
    #[arg(short = 'L', long)]
    pub language: Option<String>,

    /// List supported languages and mark the current one
    #[arg(long)]
    pub list_languages: bool,

    /// Translate texts through the cache and batch dispatcher
    #[arg(short, long, num_args = 1..)]
    pub translate: Vec<String>,

    /// Translate a single text with one direct request
    #[arg(long)]
    pub translate_one: Option<String>,

    /// Target language for --translate / --translate-one without persisting it
    #[arg(long)]
    pub to: Option<String>,
}

/// What: Run the actions requested on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Process exit code.
///
/// Details:
/// - Order: `--language`, `--list-languages`, `--translate`, `--translate-one`.
/// - With no action flags, prints the current language.
pub async fn process_args(args: &Args) -> ExitCode {
    use crate::args::{lang, translate};

    let settings = vidya_lingo::config::settings();
    let context = lang::user_context();
    let mut ok = true;

    if let Some(id) = &args.language {
        ok &= lang::handle_set_language(&context, id);
    }
    if args.list_languages {
        lang::handle_list_languages(&context);
    }

    let wants_translation = !args.translate.is_empty() || args.translate_one.is_some();
    if wants_translation {
        let target = match lang::target_context(&context, args.to.as_deref()) {
            Ok(target) => target,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        };
        if !args.translate.is_empty() {
            ok &= translate::handle_translate(&args.translate, target.clone(), &settings).await;
        }
        if let Some(text) = &args.translate_one {
            ok &= translate::handle_translate_one(text, target.language(), &settings).await;
        }
    }

    if args.language.is_none() && !args.list_languages && !wants_translation {
        println!("{}", context.language());
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
