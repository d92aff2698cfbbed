use tracker_etl::utils::{logger, validation::Validate};
use tracker_etl::{EtlEngine, LocalStorage, RulesConfig, RulesPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger();

    let config = RulesConfig::default();
    tracing::debug!("Rules config: {:?}", config);
    config.validate()?;

    let blocked_list_path = config.blocked_list_path.clone();
    let pipeline = RulesPipeline::new(LocalStorage::current_dir(), config);
    let summary = EtlEngine::new(pipeline).run().await?;

    tracing::info!("Blocked domains listed in {}", blocked_list_path);
    println!("Done! Generated {} blocking rules.", summary.count);
    Ok(())
}
