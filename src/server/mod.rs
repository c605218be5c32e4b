//! actix-web transport for the session store.

mod error;
mod extract;
mod request_log;
mod routes;
mod state;

pub use error::AppError;
pub use extract::{SESSION_COOKIE, SessionId};
pub use request_log::log_request;
pub use routes::configure_routes;
pub use state::AppState;

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};

use crate::args::Args;

/// Binds and serves until shutdown.
pub async fn run(args: &Args, state: web::Data<AppState>) -> std::io::Result<()> {
    tracing::info!("Starting wordle server on http://{}:{}", args.host, args.port);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(log_request))
            .app_data(state.clone())
            .configure(configure_routes)
    });

    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }

    server.bind((args.host.as_str(), args.port))?.run().await
}
