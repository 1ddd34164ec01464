//! The eight general purpose registers of the DCPU-16. The stack pointer, program counter,
//! and `EX` are only reachable through dedicated operand codes and are not listed here.

use std::convert::TryFrom;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display as StrumDisplay, EnumString, IntoStaticStr};

pub const REGISTER_COUNT: u8 = 8;

#[derive(
StrumDisplay, IntoStaticStr, EnumString, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq, PartialEq,  Debug,            Hash
)]
#[repr(u8)]
pub enum Register {
  A,
  B,
  C,
  X,
  Y,
  Z,
  I,
  J,
}

impl Register {
  /// Converts an index into the register file to a register. Only the low three bits are
  /// significant, so every index names some register.
  pub fn from_index(index: u8) -> Register {
    match Register::try_from(index % REGISTER_COUNT) {
      Ok(register) => register,
      Err(_) => unreachable!("register index {} out of range", index),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  #[test]
  fn names_follow_index_order(){
    let names: Vec<String> = (0..REGISTER_COUNT)
      .map(|i| Register::from_index(i).to_string())
      .collect();
    assert_eq!(names, vec!["A", "B", "C", "X", "Y", "Z", "I", "J"]);
  }

  #[test]
  fn index_round_trips(){
    assert_eq!(Register::from_index(Into::<u8>::into(Register::Y)), Register::Y);
    assert_eq!(Register::from_str("J"), Ok(Register::J));
  }

  #[test]
  fn index_wraps(){
    assert_eq!(Register::from_index(9), Register::B);
  }
}
