mod bot;
mod command;
mod config;
mod render;
mod router;

use std::io::{self, BufRead, Write};

use clap::Parser;
use common::config::Validate;
use common::games::tictactoe::OpponentKind;
use common::{ConversationId, log, logger};

use bot::{HELP_TEXT, dispatch, input_error_text};
use command::{Command, parse_command};
use config::{ClientConfig, get_config_manager};
use router::ConversationRouter;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a bot in the terminal")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
    /// Overrides the opponent from the config (random, minimax, first-empty)
    #[arg(long)]
    opponent: Option<OpponentKind>,
    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,
    /// Name used in the end-of-game messages
    #[arg(long)]
    name: Option<String>,
    /// Conversation id the terminal session is filed under
    #[arg(long, default_value = "terminal")]
    conversation: String,
    #[arg(long)]
    use_log_prefix: bool,
}

fn resolve_config(args: &Args) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(opponent) = args.opponent {
        config.opponent = opponent;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(name) = &args.name {
        config.player_name = name.clone();
    }
    if args.use_log_prefix && config.log_prefix.is_none() {
        config.log_prefix = Some("Client".to_string());
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    logger::init_logger(config.log_prefix.clone());

    let conversation = ConversationId::new(args.conversation.clone());
    let mut router = ConversationRouter::new(config.opponent, config.seed);
    log!("Playing as {} against {} opponent", config.player_name, config.opponent);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", HELP_TEXT)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let replies = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(&mut router, &conversation, &config.player_name, command),
            Err(err) => vec![input_error_text(&err).to_string()],
        };

        for reply in replies {
            writeln!(stdout, "{}", reply)?;
        }
        stdout.flush()?;
    }

    router.discard(&conversation);
    Ok(())
}
