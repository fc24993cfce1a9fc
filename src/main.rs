//! Masthead - 作者 / 杂志 / 文章关系演示
//!
//! 读取配置中的初始数据，构建 Catalog 并以 JSON 输出关系报告。

use masthead::application::{build_catalog, CatalogReport};
use masthead::config::{load_config, print_config};

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},masthead={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Masthead - 作者 / 杂志 / 文章关系模型");
    print_config(&config);

    let catalog = build_catalog(&config.seed)?;
    let report = CatalogReport::build(&catalog);

    match catalog.top_publisher() {
        Some(magazine) => tracing::info!(
            magazine_id = %magazine.id(),
            name = ?magazine.name(),
            "Top publisher"
        ),
        None => tracing::info!("No articles registered, no top publisher"),
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
