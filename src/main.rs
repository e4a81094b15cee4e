use anyhow::Result;
use torg::{config::TorgConfig, organize_tests, write_output};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // get the configuration from the config file and CLI args
    let full_config = TorgConfig::init_config();

    // Initialize tracing based on debug flag
    FmtSubscriber::builder()
        .with_max_level(if full_config.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_level(true)
        .compact()
        .init();

    if full_config.debug {
        let config_str = serde_json::to_string_pretty(&full_config)?;
        debug!("Configuration:\n{}", config_str);
    }

    let (output, organized) = organize_tests(&full_config)?;

    if full_config.stream {
        println!("{}", output);
    } else {
        let final_path = write_output(&output, &organized, &full_config)?;
        println!("{}", final_path);
    }

    if full_config.debug {
        debug!("{} tests organized", organized.total());
    }

    Ok(())
}
