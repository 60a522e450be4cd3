use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chess_board::{BoardMatrix, PIECES_PATH};
use log::info;
use tide::StatusCode;

use crate::http_server_state::{HttpServerState, HttpServerStateImpl};
use crate::server_config::ServerConfig;


// Each request gets a fresh board, as if a new match was just started.
async fn handle_pieces(req: tide::Request<HttpServerState>) -> tide::Result {
    let pieces = BoardMatrix::starting_position().to_json(req.state().cell_encoding);
    let mut resp = tide::Response::new(StatusCode::Ok);
    resp.set_body(tide::Body::from_json(&pieces)?);
    Ok(resp)
}

pub fn make_app(config: &ServerConfig) -> anyhow::Result<tide::Server<HttpServerState>> {
    let mut app = tide::with_state(Arc::new(HttpServerStateImpl {
        cell_encoding: config.cell_encoding,
    }));
    app.with(tide::log::LogMiddleware::new());

    app.with(tide::utils::After(|mut res: tide::Response| async {
        if let Some(err) = res.error() {
            let msg = format!("Error: {:?}", err);
            res.set_status(err.status());
            res.set_body(msg);
        }
        Ok(res)
    }));

    app.at(PIECES_PATH).get(handle_pieces);

    if let Some(static_content_dir) = &config.static_content_dir {
        let dir = Path::new(static_content_dir);
        app.at("/")
            .serve_file(dir.join("index.html"))
            .with_context(|| format!("Cannot serve index.html from '{static_content_dir}'."))?;
        app.at("/")
            .serve_dir(dir)
            .with_context(|| format!("Cannot serve directory '{static_content_dir}'."))?;
    }
    Ok(app)
}

pub fn run(config: ServerConfig) -> anyhow::Result<()> {
    let app = make_app(&config)?;
    info!(
        "Serving {} with {:?} cells on {}",
        PIECES_PATH, config.cell_encoding, config.bind_address
    );
    async_std::task::block_on(async { app.listen(config.bind_address.clone()).await })
        .with_context(|| format!("Failed to listen on {}.", config.bind_address))
}
