#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate chess_board;

mod http_server_state;
mod print_board;
mod server_config;
mod server_main;

use clap::{Command, arg};

use crate::server_config::read_config_file;


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Chess board")
        .version(clap::crate_version!())
        .about("Serves a chess board page and the pieces endpoint it reads from")
        .subcommand_required(true)
        .subcommand(Command::new("serve").about("Run the HTTP server").arg(
            arg!(<config_file> "Path to the configuration file: yaml-serialized ServerConfig."),
        ))
        .subcommand(
            Command::new("print-board")
                .about("Print the board exactly as the pieces endpoint serves it.")
                .arg(
                    arg!(--"encoding" <encoding> "How to write the cells")
                        .value_parser(print_board::cell_encoding_names())
                        .default_value("structured"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("serve", sub_matches)) => server_main::run(read_config_file(
            sub_matches.get_one::<String>("config_file").unwrap(),
        )?),
        Some(("print-board", sub_matches)) => {
            let encoding = sub_matches.get_one::<String>("encoding").unwrap();
            print_board::run(print_board::PrintBoardConfig {
                cell_encoding: print_board::parse_cell_encoding(encoding)?,
            })
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
