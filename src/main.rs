use anyhow::Context;
use arithmetic_api::{
    config::redact_url,
    create_routes,
    infrastructure::{database::DatabaseManager, logger::Logger},
    AppConfig, AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("加载配置失败")?;

    // 初始化日志，guard 需要持有到进程结束
    let _guard = Logger::init(&config.logging)?;

    info!("启动计算记录服务...");

    let database = DatabaseManager::new(&config.database)
        .await
        .map_err(|e| {
            error!("初始化存储失败 ({}): {}", redact_url(&config.database.url), e);
            e
        })?;

    let app = create_routes(AppState::new(database.store()));

    let bind_addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("无法绑定到 {}", bind_addr))?;
    let addr = listener.local_addr()?;

    info!("🚀 服务运行在 http://{}", addr);
    info!("📖 可用端点:");
    info!("   GET  /            - Hello World");
    info!("   POST /sum         - 求和");
    info!("   POST /sum-with-id - 求和并返回记录 ID");
    info!("   POST /multiply    - 乘法并返回记录 ID");
    info!("   GET  /health      - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("监听退出信号失败: {}", e);
    }
}
