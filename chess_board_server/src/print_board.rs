use anyhow::anyhow;
use chess_board::{BoardMatrix, CellEncoding};


pub struct PrintBoardConfig {
    pub cell_encoding: CellEncoding,
}

pub const CELL_ENCODINGS: [(&str, CellEncoding); 3] = [
    ("structured", CellEncoding::Structured),
    ("compound", CellEncoding::Compound),
    ("letter", CellEncoding::Letter),
];

pub fn cell_encoding_names() -> [&'static str; 3] { CELL_ENCODINGS.map(|(name, _)| name) }

pub fn parse_cell_encoding(name: &str) -> anyhow::Result<CellEncoding> {
    CELL_ENCODINGS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, encoding)| encoding)
        .ok_or_else(|| anyhow!("Unknown cell encoding '{name}'."))
}

// Prints the `/chess/pieces` response body, one board row per line.
pub fn render(config: &PrintBoardConfig) -> anyhow::Result<String> {
    let pieces = BoardMatrix::starting_position().to_json(config.cell_encoding);
    let rows = pieces
        .as_array()
        .into_iter()
        .flatten()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[\n  {}\n]", rows.join(",\n  ")))
}

pub fn run(config: PrintBoardConfig) -> anyhow::Result<()> {
    println!("{}", render(&config)?);
    Ok(())
}
