//! Walks a word stream one instruction at a time. The cursor advances by the size the decoder
//! reports for each instruction, so the next instruction boundary is always where decoding
//! says it is.

use std::fmt::{Display, Formatter};

use crate::bytecode::{decode_instruction, Instruction, Word};

/// One decoded instruction of a stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Line<'a> {
  /// Offset of the instruction's first word in the stream.
  pub address: usize,
  /// The words the instruction occupies. A trailing word missing at the end of the stream is
  /// decoded as zero and does not appear here.
  pub words: &'a [Word],
  pub instruction: Instruction
}

impl<'a> Display for Line<'a> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.instruction)
  }
}

pub struct Disassembler<'a> {
  words: &'a [Word],
  cursor: usize
}

impl<'a> Disassembler<'a> {
  pub fn new(words: &'a [Word]) -> Disassembler<'a> {
    Disassembler {
      words,
      cursor: 0
    }
  }
}

impl<'a> Iterator for Disassembler<'a> {
  type Item = Line<'a>;

  fn next(&mut self) -> Option<Line<'a>> {
    let words = self.words;
    let address = self.cursor;
    let word = *words.get(address)?;
    // Next word or zero if there is none
    let next_word = words.get(address + 1).copied().unwrap_or(0);

    let decoded = decode_instruction(word, next_word);
    let end = (address + decoded.size).min(words.len());
    self.cursor = address + decoded.size;

    Some(Line {
      address,
      words: &words[address..end],
      instruction: decoded.instruction
    })
  }
}

/// Decodes the whole stream.
pub fn disassemble(words: &[Word]) -> Vec<Line> {
  Disassembler::new(words).collect()
}


#[cfg(test)]
mod tests {
  use super::*;

  fn text(words: &[Word]) -> Vec<String> {
    disassemble(words).iter().map(Line::to_string).collect()
  }

  #[test]
  fn empty_stream(){
    assert!(disassemble(&[]).is_empty());
  }

  #[test]
  fn single_word_instruction(){
    assert_eq!(text(&[0x8401]), vec!["SET A, 0"]);
  }

  #[test]
  fn literal_consumes_next_word(){
    let lines = disassemble(&[0x7C01, 0x0005]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].to_string(), "SET A, 5");
    assert_eq!(lines[0].words, &[0x7C01u16, 0x0005][..]);
  }

  #[test]
  fn addresses_follow_instruction_sizes(){
    // SET A, 0x30 / SET [0x20], 0x20 / SUB A, [0x1000] / IFN A, 0x10
    // Both operands of the second instruction read the same trailing word.
    let words = [0x7C01, 0x0030, 0x7FC1, 0x0020, 0x7803, 0x1000, 0xC413];
    let lines = disassemble(&words);
    let addresses: Vec<usize> = lines.iter().map(|line| line.address).collect();
    assert_eq!(addresses, vec![0, 2, 4, 6]);
    assert_eq!(
      lines.iter().map(Line::to_string).collect::<Vec<_>>(),
      vec!["SET A, 48", "SET [32], 32", "SUB A, [4096]", "IFN A, 16"]
    );
  }

  #[test]
  fn unknown_special_opcode_does_not_stop_the_walk(){
    // unknown special with a = 0x1F, its trailing word, then SET A, B
    let lines = text(&[0x7FE0, 0x1234, 0x0401]);
    assert_eq!(lines, vec!["UNKNOWN SPECIAL OPCODE", "SET A, B"]);
  }

  #[test]
  fn unknown_opcode_does_not_stop_the_walk(){
    assert_eq!(text(&[0x0018, 0x0401]), vec!["UNKNOWN OPCODE", "SET A, B"]);
  }

  #[test]
  fn line_count_matches_instruction_count(){
    let one_word = 0x0401;  // SET A, B
    let two_words = 0x7C01; // SET A, next word
    let words = [one_word, two_words, 0xFFFF, one_word, one_word, two_words, 0x0000];
    assert_eq!(disassemble(&words).len(), 5);
  }

  #[test]
  fn missing_trailing_word_reads_as_zero(){
    let lines = disassemble(&[0x0401, 0x7C01]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].to_string(), "SET A, 0");
    assert_eq!(lines[1].words, &[0x7C01u16][..]);
  }
}
