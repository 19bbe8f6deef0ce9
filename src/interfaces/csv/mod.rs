pub mod charge_reader;
pub mod payload_writer;
