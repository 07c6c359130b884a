use clap::Parser;
use woning_retrofit_toolbox::{app, cli::Cli, config, i18n};

/// Entry point: loads the config, resolves the language and runs one command.
fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = try_run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::debug!("language resolved: {lang}, overrides_loaded={}", tr.has_overrides());
    let output = app::run(cli, &cfg, &tr)?;
    println!("{output}");
    Ok(())
}
