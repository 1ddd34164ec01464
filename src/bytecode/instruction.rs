use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use strum_macros::{Display as StrumDisplay, EnumString, IntoStaticStr};
use num_enum::{TryFromPrimitive, IntoPrimitive};

use super::Operand;

/**
  Basic (two operand) opcodes. The discriminants are the values of the 5 bit opcode field, so
  the enum is the opcode table: a code that does not convert is reserved. Codes
  `0x18`, `0x19`, `0x1C` and `0x1D` are unassigned.
*/
#[derive(
StrumDisplay, IntoStaticStr, EnumString, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq, PartialEq,  Debug,            Hash
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum BasicOp {
  Set = 0x01, // b <- a
  Add = 0x02,
  Sub = 0x03,
  Mul = 0x04,
  Mli = 0x05, // signed
  Div = 0x06,
  Dvi = 0x07, // signed
  Mod = 0x08,
  Mdi = 0x09, // signed
  And = 0x0A,
  Bor = 0x0B,
  Xor = 0x0C,
  Shr = 0x0D,
  Asr = 0x0E,
  Shl = 0x0F,
  // Conditionals //
  Ifb = 0x10,
  Ifc = 0x11,
  Ife = 0x12,
  Ifn = 0x13,
  Ifg = 0x14,
  Ifa = 0x15,
  Ifl = 0x16,
  Ifu = 0x17,
  // 0x18, 0x19 reserved
  Adx = 0x1A,
  Sbx = 0x1B,
  // 0x1C, 0x1D reserved
  Sti = 0x1E,
  Std = 0x1F,
}

/// Special (one operand) opcodes, selected by the b field when the opcode field is zero.
#[derive(
StrumDisplay, IntoStaticStr, EnumString, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq, PartialEq,  Debug,            Hash
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum SpecialOp {
  Jsr = 0x01,
  // Interrupts //
  Int = 0x08,
  Iag = 0x09,
  Ias = 0x0A,
  Rfi = 0x0B,
  Iaq = 0x0C,
  // Hardware //
  Hwn = 0x10,
  Hwq = 0x11,
  Hwi = 0x12,
}

impl BasicOp {
  pub fn lookup(code: u8) -> Option<BasicOp> {
    BasicOp::try_from(code).ok()
  }
}

impl SpecialOp {
  pub fn lookup(code: u8) -> Option<SpecialOp> {
    SpecialOp::try_from(code).ok()
  }
}

/// A decoded instruction. Unrecognized opcodes are ordinary values rather than errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Instruction {
  /// `MNEM b, a`
  Basic {
    opcode: BasicOp,
    b: Operand,
    a: Operand
  },
  /// `MNEM a`
  Special {
    opcode: SpecialOp,
    a: Operand
  },
  /// The opcode field was zero and the b field is not a special opcode. Holds the b field.
  UnknownSpecial(u8),
  /// Holds the opcode field.
  Unknown(u8),
}

impl Instruction {
  /// False if the opcode or any operand could not be resolved.
  pub fn is_recognized(&self) -> bool {
    match self {
      Instruction::Basic { b, a, .. } => b.is_known() && a.is_known(),
      Instruction::Special { a, .. } => a.is_known(),
      _ => false
    }
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self{

      Instruction::Basic{opcode, b, a} => {
        write!(f, "{} {}, {}", opcode, b, a)
      }

      Instruction::Special{opcode, a} => {
        write!(f, "{} {}", opcode, a)
      }

      Instruction::UnknownSpecial(_) => {
        write!(f, "UNKNOWN SPECIAL OPCODE")
      }

      Instruction::Unknown(_) => {
        write!(f, "UNKNOWN OPCODE")
      }

    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  #[test]
  fn basic_table(){
    let mnemonics: Vec<String> = (0x00..=0x1Fu8)
      .filter_map(BasicOp::lookup)
      .map(|op| op.to_string())
      .collect();
    assert_eq!(
      mnemonics,
      vec![
        "SET", "ADD", "SUB", "MUL", "MLI", "DIV", "DVI", "MOD", "MDI", "AND", "BOR", "XOR",
        "SHR", "ASR", "SHL", "IFB", "IFC", "IFE", "IFN", "IFG", "IFA", "IFL", "IFU", "ADX",
        "SBX", "STI", "STD"
      ]
    );
  }

  #[test]
  fn basic_table_gaps(){
    for &code in &[0x00u8, 0x18, 0x19, 0x1C, 0x1D] {
      assert_eq!(BasicOp::lookup(code), None);
    }
    assert_eq!(BasicOp::lookup(0x1A), Some(BasicOp::Adx));
  }

  #[test]
  fn special_table(){
    let table: Vec<(u8, &'static str)> = (0x00..=0x1Fu8)
      .filter_map(SpecialOp::lookup)
      .map(|op| (Into::<u8>::into(op), Into::<&'static str>::into(op)))
      .collect();
    assert_eq!(
      table,
      vec![
        (0x01, "JSR"), (0x08, "INT"), (0x09, "IAG"), (0x0A, "IAS"), (0x0B, "RFI"),
        (0x0C, "IAQ"), (0x10, "HWN"), (0x11, "HWQ"), (0x12, "HWI")
      ]
    );
  }

  #[test]
  fn mnemonics_parse_back(){
    assert_eq!(BasicOp::from_str("IFE"), Ok(BasicOp::Ife));
    assert_eq!(SpecialOp::from_str("HWI"), Ok(SpecialOp::Hwi));
  }

  #[test]
  fn display(){
    let set = Instruction::Basic {
      opcode: BasicOp::Set,
      b: Operand::Push,
      a: Operand::InlineLiteral(3)
    };
    assert_eq!(set.to_string(), "SET PUSH, 3");
    assert!(set.is_recognized());

    let jsr = Instruction::Special { opcode: SpecialOp::Jsr, a: Operand::Literal(16) };
    assert_eq!(jsr.to_string(), "JSR 16");

    assert_eq!(Instruction::UnknownSpecial(0x1F).to_string(), "UNKNOWN SPECIAL OPCODE");
    assert_eq!(Instruction::Unknown(0x18).to_string(), "UNKNOWN OPCODE");
    assert!(!Instruction::Unknown(0x18).is_recognized());
  }
}
