use std::io::{self, Write};

use battleship_client::{
    init_logging, FeedbackLog, GameController, HttpSession, Orientation, DEFAULT_LOG_CAP,
    DEFAULT_SERVER,
};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Console client for a battleship rules server")]
struct Cli {
    /// Base URL of the game server.
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Start with manual ship placement instead of a random fleet.
    #[arg(long)]
    manual: bool,

    /// Feedback log size cap in characters.
    #[arg(long, default_value_t = DEFAULT_LOG_CAP)]
    log_cap: usize,
}

fn print_help() {
    println!("Commands:");
    println!("  fire <cell>          fire at the opponent board (a bare cell like B7 also fires)");
    println!("  place [<cell>] <H|V> place the next ship (uses the marked cell if none given)");
    println!("  mark <cell>          pre-fill the placement start cell");
    println!("  new [manual]         start a new game; 'manual' places ships yourself");
    println!("  show                 reprint the boards");
    println!("  help                 show this help");
    println!("  quit                 leave the game");
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn print_screen(game: &GameController) {
    println!("\nOpponent board:");
    print!("{}", game.opponent_view().render());
    println!("\nYour board:");
    print!("{}", game.own_view().render());
    if let Some(state) = game.state() {
        println!("\nYou sunk: {}", join_or_none(&state.human_sunk));
        println!("Opponent sunk: {}", join_or_none(&state.ai_sunk));
    }
    if let Some(prompt) = game.placement_prompt() {
        println!("{prompt}");
    }
    let recent: Vec<&str> = game.log().lines().take(6).collect();
    if !recent.is_empty() {
        println!("---");
        for line in &recent {
            println!("{line}");
        }
    }
}

async fn dispatch(game: &mut GameController, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(word) => word.to_ascii_lowercase(),
        None => return false,
    };
    let args: Vec<&str> = parts.collect();
    match command.as_str() {
        "fire" | "f" => match args.first() {
            Some(label) => game.fire_label(label).await,
            None => println!("Usage: fire <cell>"),
        },
        "place" | "p" => match args.as_slice() {
            [orient] => match Orientation::parse(orient) {
                Some(o) => game.place(None, o).await,
                None => println!("Orientation must be H or V."),
            },
            [start, orient] => match Orientation::parse(orient) {
                Some(o) => game.place(Some(*start), o).await,
                None => println!("Orientation must be H or V."),
            },
            _ => println!("Usage: place [<cell>] <H|V>"),
        },
        "mark" | "m" => match args.first() {
            Some(label) => game.select_own_label(label),
            None => println!("Usage: mark <cell>"),
        },
        "new" | "n" => {
            let manual = args.first().is_some_and(|a| a.eq_ignore_ascii_case("manual"));
            game.new_game(!manual).await;
        }
        "show" | "s" => {}
        "help" | "h" | "?" => {
            print_help();
            return false;
        }
        "quit" | "exit" | "q" => return true,
        // A bare cell label fires, the closest thing to clicking the board.
        _ => game.fire_label(&command).await,
    }
    print_screen(game);
    false
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let session = HttpSession::new(&cli.server)?;
    let mut game = GameController::with_log(Box::new(session), FeedbackLog::new(cli.log_cap));

    println!("Connecting to {} ...", cli.server);
    game.new_game(!cli.manual).await;
    print_screen(&game);
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if dispatch(&mut game, line).await {
            break;
        }
    }
    Ok(())
}
