/*!
  This module is responsible for splitting an instruction word into its fields and decoding
  it, together with the word that follows it, into an `Instruction` and a size in words.
*/

use log::trace;

use super::{BasicOp, Instruction, Operand, Position, SpecialOp};

// If you change this you must also change the masks and shifts below.
pub type Word = u16;

pub const MASK_OPCODE: Word = 0x1F;
pub const SHIFT_B: Word = 5;
pub const MASK_B: Word = 0x1F;
pub const SHIFT_A: Word = 10;
pub const MASK_A: Word = 0x3F;

/// The three bit fields of an instruction word: `[a:6][b:5][opcode:5]`, high to low.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Fields {
  pub opcode: u8,
  pub b: u8,
  pub a: u8
}

impl Fields {
  pub fn from_word(word: Word) -> Fields {
    Fields {
      opcode: (word & MASK_OPCODE) as u8,
      b: ((word >> SHIFT_B) & MASK_B) as u8,
      a: ((word >> SHIFT_A) & MASK_A) as u8,
    }
  }

  /// An opcode field of zero selects the special form, whose opcode sits in the b field.
  pub fn is_special(&self) -> bool {
    self.opcode == 0
  }
}

/// An instruction together with the number of words (1 or 2) it occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DecodedInstruction {
  pub instruction: Instruction,
  pub size: usize
}

/// Returns the size in words of an instruction from the operands that take part in it.
pub fn instruction_size(operands: &[Operand]) -> usize {
  match operands.iter().any(Operand::uses_next_word) {
    true  => 2, // Two words
    false => 1  // One word
  }
}

/**
  Decodes `word`, taking any offset, address, or literal from `next_word`. The caller passes
  zero for `next_word` when the stream has ended.

  Operand fields are decoded even when the opcode is unknown, so that the size reflects what
  the fields would consume: both fields for the basic form, only the a field for the special
  form.
*/
pub fn decode_instruction(word: Word, next_word: Word) -> DecodedInstruction {
  let fields = Fields::from_word(word);
  let a = Operand::decode(fields.a, next_word, Position::A);

  let decoded =
    if fields.is_special() {
      let instruction = match SpecialOp::lookup(fields.b) {
        Some(opcode) => Instruction::Special { opcode, a },
        None => Instruction::UnknownSpecial(fields.b)
      };
      DecodedInstruction { instruction, size: instruction_size(&[a]) }
    } else {
      let b = Operand::decode(fields.b, next_word, Position::B);
      let instruction = match BasicOp::lookup(fields.opcode) {
        Some(opcode) => Instruction::Basic { opcode, b, a },
        None => Instruction::Unknown(fields.opcode)
      };
      DecodedInstruction { instruction, size: instruction_size(&[b, a]) }
    };

  trace!(
    "{:#06x}: opcode={:#04x} b={:#04x} a={:#04x} size={}",
    word, fields.opcode, fields.b, fields.a, decoded.size
  );
  decoded
}
