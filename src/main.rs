use tracker_etl::utils::{logger, validation::Validate};
use tracker_etl::{ConverterConfig, EtlEngine, LocalStorage, TrackerPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger();

    let config = ConverterConfig::default();
    tracing::debug!("Converter config: {:?}", config);
    config.validate()?;

    let pipeline = TrackerPipeline::new(LocalStorage::current_dir(), config);
    let summary = EtlEngine::new(pipeline).run().await?;

    println!("Done! Extracted {} tracker domains.", summary.count);
    Ok(())
}
