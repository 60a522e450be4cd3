use std::sync::Arc;

use chess_board::CellEncoding;


pub struct HttpServerStateImpl {
    pub cell_encoding: CellEncoding,
}

pub type HttpServerState = Arc<HttpServerStateImpl>;
