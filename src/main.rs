use clap::Parser;
use lp_import::Importer;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Importing page: {}", args.url);

    let mut importer = Importer::new();

    if let Some(path) = &args.config {
        importer = match importer.with_config_file(path) {
            Ok(importer) => importer,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }

    if let Some(user_agent) = &args.user_agent {
        importer = importer.with_user_agent(user_agent);
    }

    let start_time = std::time::Instant::now();

    let lp = if let Some(path) = &args.file {
        // Offline import: read the HTML locally, keep the URL as the source
        match std::fs::read_to_string(path) {
            Ok(html) => importer.import_html(&args.url, &html),
            Err(e) => {
                ::log::error!("Failed to read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        match importer.import(&args.url).await {
            Ok(lp) => lp,
            Err(e) => {
                ::log::error!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&lp)
    } else {
        serde_json::to_string(&lp)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize LP: {}", e);
            std::process::exit(1);
        }
    }

    ::log::info!(
        "Import complete - {} sections, confidence {:?} in {:.2} seconds",
        lp.sections.len(),
        lp.meta.confidence,
        start_time.elapsed().as_secs_f64()
    );
}
