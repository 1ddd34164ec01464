/*!
  Decoding of operand codes. An operand code selects an addressing mode. A few modes take their
  offset, address, or value from the word that follows the instruction, and whether an operand
  does so is read off the decoded `Operand` itself, so that the renderer and the stream walker
  can never disagree about instruction length.
*/

use std::fmt::{Display, Formatter};

use log::warn;

use crate::register::Register;
use super::Word;

/// Which of the two operand slots of an instruction a code was taken from. The meaning of
/// code `0x18` and of the inline literal range depends on it.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Position {
  /// The first operand, the destination of a basic instruction (5 bits wide).
  B,
  /// The second operand, the source of a basic instruction and the only operand of a
  /// special instruction (6 bits wide).
  A,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Operand {
  /// `0x00..=0x06`
  Register(Register),
  /// `0x07..=0x0D`: `[register]`
  AtRegister(Register),
  /// `0x0E..=0x15`: `[register + next word]`
  AtRegisterPlus(Register, Word),
  /// `0x18` in the b slot: `[--SP]`
  Push,
  /// `0x18` in the a slot: `[SP++]`
  Pop,
  /// `0x19`: `[SP]`
  Peek,
  /// `0x1A`: `[SP + next word]`
  Pick(Word),
  StackPointer,
  ProgramCounter,
  Extra,
  /// `0x1E`: `[next word]`
  AtAddress(Word),
  /// `0x1F`: `next word`
  Literal(Word),
  /// `0x20..=0x3F` in the a slot, the values -1..=30.
  InlineLiteral(i8),
  /// An inline literal code found in the b slot, where literals cannot be written.
  IllegalLiteral(u8),
  Unknown(u8),
}

impl Operand {
  /// Decodes the operand `code` found in slot `position`. `next_word` is only read by the
  /// modes for which `uses_next_word` is true. Every code decodes to something.
  pub fn decode(code: u8, next_word: Word, position: Position) -> Operand {
    match code {
      0x00..=0x06 => Operand::Register(Register::from_index(code)),
      0x07..=0x0D => Operand::AtRegister(Register::from_index(code - 0x07)),
      0x0E..=0x15 => Operand::AtRegisterPlus(Register::from_index(code - 0x0E), next_word),
      0x18 => match position {
        Position::B => Operand::Push,
        Position::A => Operand::Pop,
      },
      0x19 => Operand::Peek,
      0x1A => Operand::Pick(next_word),
      0x1B => Operand::StackPointer,
      0x1C => Operand::ProgramCounter,
      0x1D => Operand::Extra,
      0x1E => Operand::AtAddress(next_word),
      0x1F => Operand::Literal(next_word),
      0x20..=0x3F => match position {
        Position::A => Operand::InlineLiteral(code as i8 - 0x21),
        Position::B => {
          warn!("inline literal operand code {:#04x} in the b slot", code);
          Operand::IllegalLiteral(code)
        }
      },
      _ => Operand::Unknown(code),
    }
  }

  /// Whether the operand consumes the word following the instruction.
  pub fn uses_next_word(&self) -> bool {
    match self {
      Operand::AtRegisterPlus(..)
      | Operand::Pick(_)
      | Operand::AtAddress(_)
      | Operand::Literal(_) => true,
      _ => false
    }
  }

  pub fn is_known(&self) -> bool {
    match self {
      Operand::IllegalLiteral(_) | Operand::Unknown(_) => false,
      _ => true
    }
  }
}

impl Display for Operand {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Operand::Register(register)          => write!(f, "{}", register),
      Operand::AtRegister(register)        => write!(f, "[{}]", register),
      Operand::AtRegisterPlus(register, n) => write!(f, "[{} + {}]", register, n),
      Operand::Push                        => write!(f, "PUSH"),
      Operand::Pop                         => write!(f, "POP"),
      Operand::Peek                        => write!(f, "PEEK"),
      Operand::Pick(n)                     => write!(f, "PICK {}", n),
      Operand::StackPointer                => write!(f, "SP"),
      Operand::ProgramCounter              => write!(f, "PC"),
      Operand::Extra                       => write!(f, "EX"),
      Operand::AtAddress(address)          => write!(f, "[{}]", address),
      Operand::Literal(value)              => write!(f, "{}", value),
      Operand::InlineLiteral(value)        => write!(f, "{}", value),
      Operand::IllegalLiteral(_)
      | Operand::Unknown(_)                => write!(f, "UNKNOWN OPERAND"),
    }
  }
}
