#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

mod bytecode;
mod config;
mod disassembler;
mod error;
mod listing;
mod register;
mod source;

use std::io::{self, Write};
use std::path::PathBuf;
use std::{env, process};

use anyhow::Context;
use env_logger::Env;
use log::{error, info};

use crate::config::Config;
use crate::disassembler::disassemble;

fn prompt_for_path() -> anyhow::Result<PathBuf> {
  print!("\nEnter the file path (hex words separated by spaces or line breaks, 78f1 0001 etc): ");
  io::stdout().flush()?;

  let mut input = String::new();
  io::stdin()
    .read_line(&mut input)
    .context("couldn't read the file path from stdin")?;
  Ok(PathBuf::from(input.trim()))
}

fn run(config: Config) -> anyhow::Result<()> {
  let path = match config.path {
    Some(path) => path,
    None => prompt_for_path()?
  };

  let words = source::load_words(&path)?;
  let lines = disassemble(&words);

  let unrecognized = lines.iter().filter(|line| !line.instruction.is_recognized()).count();
  if unrecognized > 0 {
    info!("{} of {} instructions not recognized", unrecognized, lines.len());
  }

  match config.listing {
    true => {
      listing::make_listing_table(&lines).printstd();
    }
    false => {
      println!("\nDisassembled instructions:\n");
      for line in &lines {
        println!("{}", line);
      }
    }
  }

  Ok(())
}

fn main() {
  env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

  if let Err(e) = run(Config::from_args(env::args())) {
    error!("{:#}", e);
    process::exit(1);
  }
}
