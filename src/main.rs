use clap::Parser;

use burger_house_rs::catalog::{load_catalog, Catalog};
use burger_house_rs::cli::{Cli, Command};
use burger_house_rs::engine::{shared_engine, OllamaEngine};
use burger_house_rs::error::{KioskError, Result};
use burger_house_rs::interface::{
    display_combo, display_intent, display_menu, display_recommendations, prompt_order_text,
    prompt_yes_no,
};
use burger_house_rs::models::{Intent, MenuItem};
use burger_house_rs::recommender::{assemble_combo, build_reply_prompt, resolve_intent};
use burger_house_rs::session::SessionContext;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::Order => cmd_order(&cli),
        Command::Ask { ref text } => cmd_ask(&cli, text),
        Command::Menu => cmd_menu(&cli),
    }
}

/// Load the catalog named on the command line, or the built-in menu.
fn load_session_catalog(cli: &Cli) -> Result<Catalog> {
    match &cli.file {
        Some(path) => load_catalog(path),
        None => Ok(Catalog::builtin()),
    }
}

/// Interactive ordering session.
fn cmd_order(cli: &Cli) -> Result<()> {
    let catalog = load_session_catalog(cli)?;
    let engine = shared_engine(&cli.engine_config());

    println!("Welcome to Burger House ({} menus)", catalog.len());
    if engine.is_available() {
        println!("Engine connected ({})", engine.model());
    } else {
        println!("Engine unreachable; orders fall back to standard recommendations.");
    }

    let mut session = SessionContext::new();

    loop {
        println!();
        let user_text = prompt_order_text()?;
        if user_text.is_empty() {
            break;
        }

        handle_request(&catalog, &user_text, engine, &mut session);

        if !prompt_yes_no("Order something else?", true)? {
            break;
        }
    }

    println!("Thank you for visiting Burger House!");
    Ok(())
}

/// One-shot analysis of a single request.
fn cmd_ask(cli: &Cli, text: &str) -> Result<()> {
    let catalog = load_session_catalog(cli)?;
    let engine = shared_engine(&cli.engine_config());

    if !engine.is_available() {
        println!("Engine unreachable; showing standard recommendations.");
    }

    let (intent, recommendations) = resolve_intent(&catalog, text, engine);

    display_intent(&intent);
    display_recommendations(&recommendations);

    let combo = assemble_combo(&recommendations, &catalog, intent.budget);
    display_combo(combo.as_ref());

    Ok(())
}

/// Print the menu grouped by category.
fn cmd_menu(cli: &Cli) -> Result<()> {
    let catalog = load_session_catalog(cli)?;
    display_menu(&catalog);
    Ok(())
}

/// Run one request through the pipeline under the session lock and
/// render the outcome.
fn handle_request(
    catalog: &Catalog,
    user_text: &str,
    engine: &OllamaEngine,
    session: &mut SessionContext,
) {
    let outcome = session.lock.run(|| {
        let (intent, recommendations) = resolve_intent(catalog, user_text, engine);

        // Free-form clerk reply; failures are non-fatal and just skip it.
        let reply = if engine.is_available() {
            engine
                .generate(&build_reply_prompt(user_text, &recommendations), false)
                .unwrap_or_default()
        } else {
            String::new()
        };

        (intent, recommendations, reply)
    });

    match outcome {
        Ok((intent, recommendations, reply)) => {
            display_intent(&intent);
            display_recommendations(&recommendations);

            let combo = assemble_combo(&recommendations, catalog, intent.budget);
            display_combo(combo.as_ref());

            if !reply.is_empty() {
                println!();
                println!("Clerk: {}", reply);
            }

            remember_result(session, intent, &recommendations, reply);
        }
        Err(KioskError::LockContention) => {
            println!("Still processing the previous request; please try again shortly.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }
}

fn remember_result(
    session: &mut SessionContext,
    intent: Intent,
    recommendations: &[&MenuItem],
    reply: String,
) {
    session.last_recommendations = recommendations.iter().map(|m| m.name.clone()).collect();
    session.last_intent = Some(intent);
    session.reply_text = reply;
}
