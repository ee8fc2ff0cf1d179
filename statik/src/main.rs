use statik_config::StatikConfig;
use statik_core::Master;
use utils::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cfg = StatikConfig::from_file_or_default("statik.conf");
    cfg.print();

    let master = Master::new(cfg);
    master.run().await?;

    Ok(())
}
