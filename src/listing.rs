//! Tabular rendering of a disassembly: address, raw words, and instruction text.

use prettytable::{format as TableFormat, Table};

use crate::disassembler::Line;

pub fn make_listing_table(lines: &[Line]) -> Table {
  let mut table = Table::new();

  table.set_format(*TABLE_DISPLAY_FORMAT);
  table.set_titles(row![ubr->"Address", ubl->"Words", ubl->"Instruction"]);

  for line in lines {
    let words = line.words
                    .iter()
                    .map(|word| format!("{:04x}", word))
                    .collect::<Vec<String>>()
                    .join(" ");
    table.add_row(
      row![r->format!("{:04x}", line.address), words, line.instruction]
    );
  } // end for
  table
}


lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}
