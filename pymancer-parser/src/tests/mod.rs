// Parser test suite

mod test_literals;
mod test_placeholders;
mod test_program_structure;
mod test_statements;
