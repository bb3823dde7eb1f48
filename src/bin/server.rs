use std::sync::Arc;

use bingo::env_config;
use bingo::profiles;
use bingo::server::create_router;
use bingo::types::BingoContext;

#[tokio::main]
async fn main() {
    env_logger::init();
    let _base = env_config::init_base_path();
    let port = env_config::server_port();
    println!("Starting bingo API server...");

    let ctx = BingoContext::new(env_config::profiles_dir(), env_config::comments_file());

    let available = profiles::list_profiles(&ctx.profiles_dir);
    if available.is_empty() {
        println!(
            "No profiles found in {}: add .txt files with comma-separated values",
            ctx.profiles_dir.display()
        );
    } else {
        println!("Found {} profile(s)", available.len());
    }

    let app = create_router(Arc::new(ctx));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    println!("Server is running on port {}. Press Ctrl+C to stop.", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("\nStopping server...");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
