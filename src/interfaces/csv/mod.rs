pub mod amount_reader;
pub mod amount_writer;
