use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::{Arg, ArgAction, Command};
use dotenvy;
use std::env;
use tracing::{error, info};

use crate::types::catalog::DestinationCategory;
use crate::types::itinerary::{BudgetTier, INTEREST_OPTIONS};
use crate::{App, CategoryFilter, HttpTourismApi, MessageOrigin, Page};

/// CLI entry point for the ecotour tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("ecotour")
        .version("0.1.0")
        .about("Command-line client for the Jharkhand eco-tourism backend")
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .global(true)
                .help("Backend base URL (or set ECOTOUR_BACKEND_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .global(true)
                .default_value("30")
                .help("Request timeout in seconds"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("destinations")
                .about("List destinations, optionally filtered by category")
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .value_name("TAG")
                        .help("One of: all, eco, cultural, adventure, festivals")
                        .default_value("all"),
                ),
        )
        .subcommand(Command::new("events").about("List festivals and cultural events"))
        .subcommand(Command::new("guides").about("List local guides"))
        .subcommand(
            Command::new("plan")
                .about("Generate a trip itinerary")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .required(true)
                        .help("Traveller name"),
                )
                .arg(
                    Arg::new("days")
                        .short('d')
                        .long("days")
                        .value_name("COUNT")
                        .default_value("3")
                        .help("Trip length in days (1-10)"),
                )
                .arg(
                    Arg::new("interest")
                        .short('i')
                        .long("interest")
                        .value_name("INTEREST")
                        .action(ArgAction::Append)
                        .required(true)
                        .help(format!(
                            "Interest to include (repeatable). Options: {}",
                            INTEREST_OPTIONS.join(", ")
                        )),
                )
                .arg(
                    Arg::new("budget")
                        .short('b')
                        .long("budget")
                        .value_name("TIER")
                        .default_value("medium")
                        .help("One of: budget, medium, premium"),
                )
                .arg(
                    Arg::new("requirements")
                        .short('r')
                        .long("requirements")
                        .value_name("TEXT")
                        .help("Special requirements (optional)"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search destinations and events")
                .arg(
                    Arg::new("query")
                        .help("Free-text query")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("chat").about("Chat with the tourism assistant (line-oriented)"))
        .subcommand(Command::new("seed").about("Ask the backend to seed sample data"))
        .get_matches();

    // Resolve base URL from CLI or environment
    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("ECOTOUR_BACKEND_URL").ok())
        .ok_or("Backend base URL is required. Set ECOTOUR_BACKEND_URL environment variable or use --base-url")?;

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    let api = HttpTourismApi::new(base_url.clone())
        .with_timeout(Duration::from_secs(timeout_seconds));
    let mut app = App::new(Arc::new(api));

    info!("Base URL: {}", base_url);

    // Same fire-and-forget seed the web shell issues on initial load.
    app.start().await;

    match matches.subcommand() {
        Some(("destinations", sub)) => {
            let tag = sub.get_one::<String>("category").unwrap();
            app.set_destination_filter(parse_filter(tag)?);
            app.open(Page::Destinations).await;
            print_destinations(&app);
        }
        Some(("events", _)) => {
            app.open(Page::Events).await;
            print_events(&app);
        }
        Some(("guides", _)) => {
            app.open(Page::Community).await;
            print_guides(&app);
        }
        Some(("plan", sub)) => {
            app.open(Page::Itinerary).await;
            app.itinerary.user_name = sub.get_one::<String>("name").unwrap().clone();
            let days: u8 = sub.get_one::<String>("days").unwrap().parse()?;
            app.itinerary.set_days(days)?;
            for interest in sub.get_many::<String>("interest").unwrap() {
                app.itinerary.toggle_interest(interest);
            }
            app.itinerary.budget = parse_budget(sub.get_one::<String>("budget").unwrap())?;
            if let Some(requirements) = sub.get_one::<String>("requirements") {
                app.itinerary.special_requirements = requirements.clone();
            }

            match app.generate_itinerary().await {
                Ok(()) => print_plan(&app),
                Err(e) => {
                    error!("Itinerary generation failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Some(("search", sub)) => {
            app.search.query = sub.get_one::<String>("query").unwrap().clone();
            if app.run_search().await {
                print_search_results(&app);
            } else {
                println!("No search results.");
            }
        }
        Some(("chat", _)) => {
            run_chat(&mut app).await?;
        }
        Some(("seed", _)) => {
            // start() already seeded; report for the explicit subcommand.
            println!("Seed request sent to {base_url}.");
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn parse_filter(tag: &str) -> Result<CategoryFilter, String> {
    if tag.eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }
    DestinationCategory::ALL
        .into_iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(tag))
        .map(CategoryFilter::Only)
        .ok_or_else(|| format!("Unknown category tag: {tag}"))
}

fn parse_budget(tier: &str) -> Result<BudgetTier, String> {
    match tier.to_ascii_lowercase().as_str() {
        "budget" => Ok(BudgetTier::Budget),
        "medium" => Ok(BudgetTier::Medium),
        "premium" => Ok(BudgetTier::Premium),
        other => Err(format!("Unknown budget tier: {other}")),
    }
}

fn print_destinations<A: crate::TourismApi>(app: &App<A>) {
    let visible = app.visible_destinations();
    if let Some(notice) = app.destinations.notice() {
        println!("! {notice}");
    }
    if visible.is_empty() {
        println!("No destinations found in this category.");
        return;
    }
    for destination in visible {
        println!(
            "{} [{}] - {}",
            destination.name, destination.category, destination.location
        );
        println!("  Best time: {}", destination.best_time_to_visit);
        println!(
            "  Entry fee: {}",
            destination.entry_fee.as_deref().unwrap_or("Free")
        );
        if let Some(tips) = &destination.eco_tips {
            if let Some(tip) = tips.first() {
                println!("  Eco tip: {tip}");
            }
        }
    }
}

fn print_events<A: crate::TourismApi>(app: &App<A>) {
    if let Some(notice) = app.events.notice() {
        println!("! {notice}");
    }
    if app.events.items().is_empty() {
        println!("No events currently scheduled.");
        return;
    }
    for event in app.events.items() {
        println!("{} - {} ({})", event.name, event.location, event.date);
        if event.registration_required {
            println!("  Registration required");
        }
    }
}

fn print_guides<A: crate::TourismApi>(app: &App<A>) {
    if let Some(notice) = app.guides.notice() {
        println!("! {notice}");
    }
    for guide in app.guides.items() {
        println!(
            "{} - {} ({:.1}, {} reviews) {}",
            guide.name, guide.specialization, guide.rating, guide.reviews_count, guide.price_per_day
        );
        println!("  Languages: {}", guide.languages.join(", "));
    }
}

fn print_plan<A: crate::TourismApi>(app: &App<A>) {
    let Some(plan) = app.itinerary.plan() else {
        return;
    };
    println!("Your {}-day Jharkhand adventure", plan.days);
    print_section("Destinations", &plan.destinations);
    print_section("Activities", &plan.activities);
    print_section("Accommodation", &plan.accommodation_suggestions);
    print_section("Transportation", &plan.transport_suggestions);
    println!("Estimated budget: {}", plan.total_cost_estimate);
}

fn print_section(title: &str, entries: &[String]) {
    println!("{title}:");
    for entry in entries {
        println!("  - {entry}");
    }
}

fn print_search_results<A: crate::TourismApi>(app: &App<A>) {
    let Some(results) = app.search.results() else {
        return;
    };
    if results.is_empty() {
        println!("No results.");
        return;
    }
    if !results.destinations.is_empty() {
        println!("Destinations:");
        for destination in &results.destinations {
            println!("  {} - {}", destination.name, destination.location);
        }
    }
    if !results.events.is_empty() {
        println!("Events:");
        for event in &results.events {
            println!("  {} - {}", event.name, event.location);
        }
    }
}

async fn run_chat<A: crate::TourismApi>(app: &mut App<A>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Jharkhand Tourism Assistant. Empty line to quit.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        if app.send_chat_message(input).await {
            let session = app.chat_session();
            if let Some(reply) = session
                .messages()
                .iter()
                .rev()
                .find(|m| m.origin == MessageOrigin::Assistant)
            {
                println!("{}", reply.text);
            }
        }
    }
    Ok(())
}
