use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use waste_sort::{cli, client, config, error, image, verifier};
use cli::{Cli, Commands};
use client::HttpClient;
use config::Config;
use error::{Result, WasteSortError};
use verifier::StaticToken;
use waste_sort_common::{
    resolve_postal_code, submit_analysis, translate, AnalysisResult, Coordinates, Language,
    LanguageContext, PostalCode, SubmitGuard, SubmitOutcome, SubmitPhase,
};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    let mut ctx = LanguageContext::init(&config, config::system_locale().as_deref());
    debug!(language = %ctx.current(), "language resolved");

    match cli.command {
        Commands::Analyze { image: image_path, postal_code, token, language, output } => {
            let language = language.unwrap_or(ctx.current());
            let t = |key: &'static str| translate(language, key);
            println!("♻️ {}\n", t("title"));

            let postal_code = PostalCode::parse(postal_code.trim())
                .map_err(|_| WasteSortError::InvalidPostalCode(postal_code.clone()))?;

            // 1. 画像読み込み
            println!("[1/3] {}", t("uploadPhoto"));
            let image = image::load_image(&image_path)?;
            println!("✔ {} ({})\n", image.file_name, image.size_label());

            // 2. 検証・送信
            println!("[2/3] {}", t("analyzing"));
            let client = HttpClient::new(config.endpoints())?;
            let verifier = StaticToken::new(token);
            let guard = SubmitGuard::default();
            let outcome = submit_analysis(
                &client,
                &verifier,
                &guard,
                Some(&postal_code),
                Some(&image),
                language,
                |phase: SubmitPhase| debug!(?phase, "submit phase"),
            )
            .await;

            // 3. 結果
            match outcome {
                SubmitOutcome::Completed(AnalysisResult::Success { html }) => {
                    println!("✔ {}\n", t("analysisComplete"));
                    match output {
                        Some(path) => {
                            std::fs::write(&path, &html)?;
                            println!("[3/3] ✔ {}", path.display());
                        }
                        None => println!("{}", html),
                    }
                    info!(postal_code = %postal_code, "analysis completed");
                }
                SubmitOutcome::Completed(AnalysisResult::Failure { error }) => {
                    return Err(WasteSortError::AnalysisFailed(error));
                }
                SubmitOutcome::VerificationUnavailable => return Err(WasteSortError::MissingToken),
                SubmitOutcome::MissingInput | SubmitOutcome::Busy => {
                    return Err(WasteSortError::AnalysisFailed(t("genericError").to_string()));
                }
            }
        }

        Commands::Locate { lat, lng, token, language } => {
            let language = language.unwrap_or(ctx.current());
            println!("📍 {}", translate(language, "detectingLocation"));

            let client = HttpClient::new(config.endpoints())?;
            let verifier = StaticToken::new(token);
            let coords = Coordinates { latitude: lat, longitude: lng };

            match resolve_postal_code(&client, &verifier, language, coords).await {
                Ok(code) => println!("✔ {}", code),
                Err(e) => {
                    eprintln!("✘ {}", e.message(language));
                    return Err(e.into());
                }
            }
        }

        Commands::Languages => {
            for language in Language::ALL {
                let marker = if language == ctx.current() { "*" } else { " " };
                println!("{} {} {} {}", marker, language.flag(), language.code(), language.native_name());
            }
        }

        Commands::Translate { key, language } => {
            let language = language.unwrap_or(ctx.current());
            println!("{}", translate(language, &key));
        }

        Commands::Config { set_language, set_analysis_url, set_geolocation_url, show } => {
            let mut changed = false;

            if let Some(language) = set_language {
                ctx.set(language, &mut config)?;
                changed = true;
                println!("✔ {}: {} {}", ctx.t("languageSelector"), language.flag(), language.native_name());
            }

            if let Some(url) = set_analysis_url {
                config.set_analysis_url(&url);
                changed = true;
                println!("✔ 解析URLを設定しました: {}", config.analysis_url);
            }

            if let Some(url) = set_geolocation_url {
                config.geolocation_url = url.trim_end_matches('/').to_string();
                changed = true;
                println!("✔ 位置情報URLを設定しました: {}", config.geolocation_url);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  言語: {}", ctx.current().native_name());
                println!("  解析URL: {}", config.analysis_url);
                println!("  位置情報URL: {}", config.geolocation_url);
            }
        }
    }

    Ok(())
}
