use clap::Parser;
use tracing::info;

use chess_session_core::{Session, ShakmatyEngine};

/// Local HTTP backend for a chess GUI. Binds an ephemeral port by default
/// and prints it to stdout for the spawning process to pick up.
#[derive(Parser, Debug)]
#[command(name = "chess-session-web", version, about)]
struct ServerArgs {
    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind; 0 lets the OS pick one.
    #[arg(long, default_value_t = 0)]
    port: u16,

    /// Start from this position instead of the standard setup.
    #[arg(long)]
    fen: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = ServerArgs::parse();

    let session = match &args.fen {
        Some(fen) => Session::from_fen(ShakmatyEngine, fen),
        None => Session::new(ShakmatyEngine),
    };
    let session = match session {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot start session: {err}");
            std::process::exit(1);
        }
    };

    let app = chess_session_web::app(session);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("listener has no local address");

    // The GUI that spawned us discovers the chosen port from stdout.
    println!("PORT={}", addr.port());
    info!("serving chess session on http://{addr}");

    axum::serve(listener, app).await.unwrap();
}
