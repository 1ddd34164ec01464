/*!

  DCPU-16 machine code is a stream of 16 bit words. Every instruction starts with a word of
  the form `aaaaaabbbbbooooo`, high bits to low:

    Opcode:    5 bits
    Operand b: 5 bits
    Operand a: 6 bits

  A nonzero opcode selects a basic instruction `OP b, a`, with b the destination and a the
  source. A zero opcode selects a special instruction `OP a`, whose opcode is held in the b
  field. Operand codes select an addressing mode; some of them (an offset from a register, a
  stack pick, an absolute address, a literal) take their value from the word after the
  instruction, making the instruction two words long. An instruction uses at most one such
  word. Both operands read the same trailing word if both ask for one.

  Opcodes are enums whose discriminants are the field values, so an opcode table lookup is a
  `TryFrom<u8>` conversion and a code with no variant is reserved.

*/

mod binary;
mod instruction;
mod operand;

pub use binary::{decode_instruction, Word};
pub use instruction::{BasicOp, Instruction, SpecialOp};
pub use operand::{Operand, Position};
