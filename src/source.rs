/*!
  The textual form of machine code is whitespace separated hex words, any number per line,
  e.g. `7c01 0030`. Tokens that are not a 16 bit hex number are reported and dropped. A dropped
  token shifts every later word by one position, so instruction boundaries after it may no
  longer line up with the program that produced the dump.
*/

use std::fs;
use std::path::Path;

use log::{info, warn};
use nom::{
  bytes::complete::is_not,
  character::complete::{hex_digit1, multispace0},
  combinator::{all_consuming, map_res},
  multi::many0,
  sequence::preceded,
  IResult
};

use crate::bytecode::Word;
use crate::error::SourceError;

/// A token that is not a hex word.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedToken {
  /// 1-based
  pub line: usize,
  pub token: String
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedWords {
  pub words: Vec<Word>,
  pub rejected: Vec<RejectedToken>
}

fn tokens(line: &str) -> IResult<&str, Vec<&str>> {
  many0(preceded(multispace0, is_not(" \t\r\n")))(line)
}

fn hex_word(token: &str) -> IResult<&str, Word> {
  all_consuming(map_res(hex_digit1, |digits| Word::from_str_radix(digits, 16)))(token)
}

/// Splits `text` into words. Never fails; bad tokens are collected in `rejected`.
pub fn parse_hex_words(text: &str) -> ParsedWords {
  let mut parsed = ParsedWords::default();

  for (index, line) in text.lines().enumerate() {
    let line_tokens = match tokens(line) {
      Ok((_rest, line_tokens)) => line_tokens,
      Err(_e) => continue
    };

    for token in line_tokens {
      match hex_word(token) {
        Ok((_, word)) => parsed.words.push(word),
        Err(_e) => {
          parsed.rejected.push(RejectedToken { line: index + 1, token: token.to_string() })
        }
      }
    }
  }

  parsed
}

/// Reads and parses the file at `path`. It is an error for the file to hold no valid word.
pub fn load_words(path: &Path) -> Result<Vec<Word>, SourceError> {
  let text = fs::read_to_string(path).map_err(|source| SourceError::Open {
    path: path.to_path_buf(),
    source
  })?;

  info!("Parsing file...");
  let parsed = parse_hex_words(&text);
  for rejected in &parsed.rejected {
    warn!("line {}: invalid hex word `{}`", rejected.line, rejected.token);
  }
  info!(
    "read {} words, rejected {} tokens",
    parsed.words.len(),
    parsed.rejected.len()
  );

  match parsed.words.is_empty() {
    true  => Err(SourceError::Empty { path: path.to_path_buf() }),
    false => Ok(parsed.words)
  }
}
