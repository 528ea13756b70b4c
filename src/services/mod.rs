pub mod row_generator;
pub mod script_assembler;
pub mod script_merger;
pub mod script_reader;
pub mod script_writer;
pub mod sql_serializer;

pub use row_generator::RowGenerator;
pub use script_assembler::{assemble, ScriptBuilder};
pub use script_merger::{merge_bilingual, MergeOutcome};
pub use script_reader::read_value_tuples;
pub use script_writer::ScriptWriter;
pub use sql_serializer::{escape_sql_literal, serialize_row};
