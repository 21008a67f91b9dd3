use savoro_server::{AppState, Config, Server, init_logger, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 环境与日志 (.env 缺失时忽略)
    let _ = dotenvy::dotenv();
    init_logger()?;

    // 打印横幅
    print_banner();

    // 2. 加载配置
    let config = Config::from_env();
    tracing::info!("Starting savoro-server (env: {})", config.environment);

    // 3. 初始化应用状态
    let state = AppState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
