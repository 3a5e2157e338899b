use crate::conf::Settings;
use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

pub fn serve(settings: &Settings) -> Result<(), ServerError> {
    let addr: SocketAddr = settings.listen_addr.parse().map_err(|e| {
        ServerError::ConfigError(format!("invalid listen_addr '{}': {e}", settings.listen_addr))
    })?;

    let db = Database::new(settings.database_path.clone());
    let state = Arc::new(AppState::seeded(db)?);

    tracing::info!(%addr, workers = settings.max_workers, "starting server");
    let server = Server::bind(&addr).max_workers(settings.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        return Err(ServerError::InternalError);
    }

    tracing::info!("server shut down cleanly");
    Ok(())
}
