use clap::{Parser, Subcommand};
use sikdan_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sikdan")]
#[command(about = "학교 급식 조회 - school meal menu lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the meal page URL
    #[arg(long, global = true)]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the meal menu for one date (today by default)
    Show {
        /// Date in YYYY.MM.DD form
        #[arg(long)]
        date: Option<String>,
    },

    /// Search upcoming days for a food and jump to the first hit
    Find {
        /// Food name to look for
        term: String,

        /// Date to start from (today by default)
        #[arg(long)]
        from: Option<String>,
    },

    /// Write a config file from favorite foods and allergy codes
    Init {
        /// Favorite foods, separated by commas or newlines
        #[arg(long, default_value = "")]
        favorites: String,

        /// Allergy code numbers 1-19, separated by commas or spaces
        #[arg(long, default_value = "")]
        allergies: String,
    },

    /// Open the school's meal page in a browser
    Site,
}

fn main() -> Result<()> {
    // Keep log lines off the rendered menu unless RUST_LOG asks for them
    sikdan_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let window_days = config.search.window_days;
    let url_override = cli.url.clone();

    match cli.command {
        Some(Commands::Show { date }) => {
            let mut session =
                build_session(&config, url_override.as_deref(), MealDate::today())?;
            cmd_show(&mut session, date)
        }
        Some(Commands::Find { term, from }) => {
            let start = match from {
                Some(text) => MealDate::parse(&text)?,
                None => MealDate::today(),
            };
            let mut session = build_session(&config, url_override.as_deref(), start)?;
            cmd_find(&mut session, &term, window_days)
        }
        Some(Commands::Init {
            favorites,
            allergies,
        }) => cmd_init(cli.config.as_deref(), &favorites, &allergies),
        Some(Commands::Site) => {
            cmd_site(url_override.as_deref().unwrap_or(&config.source.url));
            Ok(())
        }
        None => {
            let mut session =
                build_session(&config, url_override.as_deref(), MealDate::today())?;
            interactive(&mut session, &config, window_days)
        }
    }
}

fn build_session(
    config: &Config,
    url_override: Option<&str>,
    start: MealDate,
) -> Result<MealSession<HttpMealSource>> {
    let url = url_override
        .map(str::to_string)
        .unwrap_or_else(|| config.source.url.clone());
    let source = HttpMealSource::with_timeout(url, config.source.timeout())?;
    let prefs = config.preferences.to_preferences();
    Ok(MealSession::new(source, prefs, start).with_window_days(config.search.window_days))
}

fn cmd_show(session: &mut MealSession<HttpMealSource>, date: Option<String>) -> Result<()> {
    let view = match date {
        Some(text) => session.view(&text)?,
        None => session.view_date(MealDate::today())?,
    };
    print_view(&view);
    Ok(())
}

fn cmd_find(
    session: &mut MealSession<HttpMealSource>,
    term: &str,
    window_days: u32,
) -> Result<()> {
    match session.find(term)? {
        FindOutcome::Found { count, view } => {
            println!(
                "'{}'이(가) 포함된 날짜 {}건 발견. 가장 빠른 날짜로 이동합니다.",
                term.trim(),
                count
            );
            print_view(&view);
        }
        FindOutcome::NotFound => {
            println!(
                "'{}'을(를) 포함한 급식을 찾지 못했습니다. ({}일 이내 범위)",
                term.trim(),
                window_days
            );
        }
    }
    Ok(())
}

fn cmd_init(config_path: Option<&std::path::Path>, favorites: &str, allergies: &str) -> Result<()> {
    let codes = Preferences::parse_allergen_codes(allergies);

    let mut config = Config::default();
    config.preferences.favorites = Preferences::parse_favorites(favorites);
    config.preferences.allergy_codes = codes.iter().map(|c| c.number()).collect();

    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_config_path);
    config.save_to(&path)?;

    println!("✓ Saved config to {}", path.display());
    println!("  favorites: {}", config.preferences.favorites.join(", "));
    let details: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    println!("  allergy codes: {}", details.join(", "));
    Ok(())
}

fn cmd_site(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!("Failed to open browser: {}", e);
        println!("{}", url);
    }
}

fn interactive(
    session: &mut MealSession<HttpMealSource>,
    config: &Config,
    window_days: u32,
) -> Result<()> {
    println!("날짜(YYYY.MM.DD) 입력 · '<' / '>' 이동 · 'find 음식' 검색 · 'site' · 'quit'");

    loop {
        print!("{} > ", session.current_date());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();

        match input {
            "" => continue,
            "quit" | "q" => break,
            "<" => step(session, Direction::Back),
            ">" => step(session, Direction::Forward),
            "site" => cmd_site(&config.source.url),
            _ if input == "find" || input.starts_with("find ") => {
                let term = input.strip_prefix("find").unwrap_or("");
                if let Err(e) = cmd_find(session, term, window_days) {
                    println!("{}", e);
                }
            }
            // Anything else is a direct date query
            _ => match session.view(input) {
                Ok(view) => print_view(&view),
                Err(e) => println!("{}", e),
            },
        }
    }

    Ok(())
}

fn step(session: &mut MealSession<HttpMealSource>, direction: Direction) {
    match session.step(direction) {
        Ok(StepOutcome::Moved(view)) => print_view(&view),
        Ok(StepOutcome::AtBoundary) => match direction {
            Direction::Back => println!("이전 검색 결과가 없습니다."),
            Direction::Forward => println!("다음 검색 결과가 없습니다."),
        },
        Err(e) => println!("{}", e),
    }
}

fn print_view(view: &MenuView) {
    println!();
    println!("╭─────────────────────────────╮");
    println!("│  {} 급식", view.date);
    println!("╰─────────────────────────────╯");

    let Some(menu) = &view.menu else {
        println!("급식 정보가 없습니다.");
        println!();
        return;
    };

    for line in &menu.lines {
        let marker = match (line.favorite, line.allergy) {
            (true, true) => "★⚠",
            (true, false) => "★ ",
            (false, true) => "⚠ ",
            (false, false) => "  ",
        };
        println!(" {} {}", marker, line.text);
    }
    println!();

    for food in &menu.matched_favorites {
        println!("♥ {}이(가) 나오는 날입니다!", food);
    }
    if !menu.matched_allergens.is_empty() {
        let details: Vec<String> = menu
            .matched_allergens
            .iter()
            .map(|c| c.to_string())
            .collect();
        println!("⚠ {} 이(가) 포함된 음식이 있습니다!", details.join(", "));
    }
}
