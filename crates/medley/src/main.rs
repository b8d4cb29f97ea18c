use std::fs;
use std::io::{self, IsTerminal, Read};

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use medley_api::CmsClient;
use medley_config::{
    config_exists, load_config, open_in_editor, resolve_api_token, resolve_base_url,
    resolve_default_media_type, resolve_simple_output, save_config, set_config_value,
};
use medley_core::{MediaType, MedleyError};
use medley_media::{detect_media_type, embed_markup, validate_media_url};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Fetch articles from the CMS API and print their embeds
    Fetch {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        per_page: u32,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Open config file in editor
    Edit,
}

#[derive(Debug, Parser)]
#[command(name = "medley")]
#[command(version, about = "Media URL resolver and embed generator", long_about = None)]
struct Cli {
    /// Force a media type instead of detecting one
    #[arg(long = "type")]
    media_type: Option<String>,
    #[arg(long)]
    input: Option<String>,
    /// Validate only, without printing markup
    #[arg(long)]
    check: bool,
    #[arg(long)]
    simple: bool,
    #[arg(value_name = "URL")]
    urls: Vec<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle config commands first
    if let Some(Commands::Config { action }) = &cli.command {
        if let Err(err) = handle_config_command(action) {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
        return;
    }

    let mut config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
    };

    let simple = cli.simple || resolve_simple_output(&config).unwrap_or(false);

    if let Some(Commands::Fetch { page, per_page }) = &cli.command {
        run_fetch(&mut config, *page, *per_page, simple).await;
        return;
    }

    let mut urls = gather_inputs(&cli).unwrap_or_else(|err| {
        eprintln!("{} {err}", style("Error:").red());
        std::process::exit(1);
    });

    if urls.is_empty() {
        eprintln!("{} no input URLs provided", style("Error:").red());
        std::process::exit(1);
    }

    let explicit_type = match cli.media_type.as_deref() {
        Some(value) => match MediaType::from_input(value) {
            Some(media_type) => Some(media_type),
            None => {
                eprintln!("{} unknown media type: {value}", style("Error:").red());
                std::process::exit(1);
            }
        },
        None => None,
    };
    let default_type = resolve_default_media_type(&config);

    let mut success = 0usize;
    let mut failed = 0usize;

    for url in urls.drain(..) {
        match process_url(&url, explicit_type, default_type, cli.check, simple) {
            Ok(()) => success += 1,
            Err(err) => {
                failed += 1;
                eprintln!("{} {url}: {err}", style("Failed").red());
            }
        }
    }

    print_summary(success + failed, success, failed);
}

fn gather_inputs(cli: &Cli) -> Result<Vec<String>, MedleyError> {
    let mut urls = cli.urls.clone();

    if let Some(path) = &cli.input {
        let content = fs::read_to_string(path).map_err(|err| {
            MedleyError::InvalidInput(format!("failed to read input file: {err}"))
        })?;
        urls.extend(parse_lines(&content));
    }

    if urls.is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| MedleyError::InvalidInput(format!("failed to read stdin: {err}")))?;
        urls.extend(parse_lines(&buffer));
    }

    Ok(urls)
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

fn process_url(
    url: &str,
    explicit_type: Option<MediaType>,
    default_type: Option<MediaType>,
    check: bool,
    simple: bool,
) -> Result<(), MedleyError> {
    let media_type = match explicit_type
        .or_else(|| detect_media_type(url))
        .or(default_type)
    {
        Some(media_type) => media_type,
        None => prompt_media_type(url)?,
    };

    let validation = validate_media_url(url, media_type);
    if !validation.is_valid {
        let message = validation
            .error
            .unwrap_or_else(|| "invalid media URL".to_string());
        return Err(MedleyError::InvalidInput(message));
    }

    if check {
        if simple {
            println!("{url}");
        } else {
            println!(
                "{} {} URL: {url}",
                style("Valid").green(),
                media_type.display_name()
            );
        }
        return Ok(());
    }

    let markup = match media_type {
        MediaType::Image => format!(r#"<img src="{url}" alt="" loading="lazy">"#),
        other => embed_markup(url, other),
    };
    if markup.is_empty() {
        return Err(MedleyError::UnsupportedInput(
            "no embeddable identifier found".to_string(),
        ));
    }

    print_markup(url, media_type, &markup, simple);
    Ok(())
}

fn prompt_media_type(url: &str) -> Result<MediaType, MedleyError> {
    if !io::stdin().is_terminal() {
        return Err(MedleyError::UnsupportedInput(
            "could not detect a media type".to_string(),
        ));
    }

    let options = MediaType::all();
    let labels: Vec<&str> = options.iter().map(|kind| kind.display_name()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select a media type for {url}"))
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|err| MedleyError::InvalidInput(format!("selection failed: {err}")))?;

    Ok(options[selection])
}

fn print_markup(url: &str, media_type: MediaType, markup: &str, simple: bool) {
    if simple {
        println!("{markup}");
        return;
    }

    println!(
        "{} {} - {url}",
        style("From:").cyan(),
        media_type.display_name()
    );
    println!("{} {markup}", style("Embed:").green());
    println!();
}

fn resolve_or_prompt_base_url(config: &mut medley_config::MedleyConfigData) -> Option<String> {
    // Check environment variable and existing config first
    if let Some(value) = resolve_base_url(config) {
        return Some(value);
    }

    // If config file exists, respect its (empty) value and never prompt
    if config_exists().unwrap_or(false) || !io::stdin().is_terminal() {
        return None;
    }

    // Config file doesn't exist - first time setup
    let theme = ColorfulTheme::default();
    println!(
        "{} {}",
        style("First-time setup:").bold().cyan(),
        "Let's configure your medley settings"
    );

    let input: String = Input::with_theme(&theme)
        .with_prompt("CMS API base URL (e.g. https://api.example.com)")
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();

    if !input.trim().is_empty() {
        config.api.base_url = Some(input.trim().to_string());
    }

    // Always create config file on first run
    if let Err(err) = save_config(config) {
        eprintln!("{} {err}", style("Warning:").yellow());
    } else {
        println!(
            "{} Config file created at ~/.medley/config.toml",
            style("✓").green()
        );
    }

    config.api.base_url.clone()
}

async fn run_fetch(
    config: &mut medley_config::MedleyConfigData,
    page: u32,
    per_page: u32,
    simple: bool,
) {
    let base_url = match resolve_or_prompt_base_url(config) {
        Some(value) => value,
        None => {
            eprintln!(
                "{} no API base URL configured (set api.base_url or MEDLEY_API_URL)",
                style("Error:").red()
            );
            std::process::exit(1);
        }
    };

    let client = CmsClient::new(base_url, resolve_api_token(config));
    let listing = match client.fetch_articles(page, per_page).await {
        Ok(listing) => listing,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
    };

    let mut success = 0usize;
    let mut failed = 0usize;

    for article in &listing.data {
        let Some(media_url) = article.embedded_media.as_deref() else {
            continue;
        };
        match process_url(media_url, Some(article.media_type), None, false, simple) {
            Ok(()) => success += 1,
            Err(err) => {
                failed += 1;
                eprintln!(
                    "{} {} ({media_url}): {err}",
                    style("Failed").red(),
                    article.title
                );
            }
        }
    }

    if !simple {
        println!(
            "{} page {} of {} articles total",
            style("Fetched:").bold(),
            listing.page,
            listing.total
        );
    }
    print_summary(success + failed, success, failed);
}

fn handle_config_command(action: &ConfigAction) -> Result<(), MedleyError> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config()?;
            let value = get_nested_config_value(&config, key);
            match value {
                Some(v) => println!("{} = {}", key, v),
                None => println!("{} = <null>", key),
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            set_config_value(key, value)?;
            println!("{} Set {} = {}", style("✓").green(), key, value);
            Ok(())
        }
        ConfigAction::List => {
            let config = load_config()?;
            println!("Current configuration:");
            println!("\n[api]");
            println!(
                "base_url = {}",
                config.api.base_url.as_deref().unwrap_or("<null>")
            );
            println!(
                "token = {}",
                config.api.token.as_deref().unwrap_or("<null>")
            );
            println!("\n[default]");
            println!(
                "media_type = {}",
                config.default.media_type.as_deref().unwrap_or("<null>")
            );
            println!("\n[output]");
            println!("simple = {}", config.output.simple.unwrap_or(false));
            Ok(())
        }
        ConfigAction::Edit => {
            open_in_editor()?;
            Ok(())
        }
    }
}

fn get_nested_config_value(
    config: &medley_config::MedleyConfigData,
    key_path: &str,
) -> Option<String> {
    let parts: Vec<&str> = key_path.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => config.api.base_url.clone(),
        ["api", "token"] => config.api.token.clone(),
        ["default", "media_type"] => config.default.media_type.clone(),
        ["output", "simple"] => config.output.simple.map(|b| b.to_string()),
        _ => None,
    }
}

fn print_summary(total: usize, success: usize, failed: usize) {
    println!(
        "{} Total: {} | Success: {} | Failed: {}",
        style("Summary:").bold(),
        total,
        success,
        failed
    );
}
