//! Binary input/output: byte-order aware value codecs and file access.
//!
//! [`ValueReader`]/[`ValueWriter`] read and write the fixed-width primitives
//! of the container layout. [`DataReaderFile`] and [`DataWriterFile`] provide
//! the seekable, bounds-checked file access both container passes build on.

mod data_reader_file;
mod data_writer_file;
mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use data_reader_file::DataReaderFile;
pub use data_writer_file::DataWriterFile;
pub use value_reader::{SeekRead, ValueReader};
pub use value_reader_slice::ValueReaderSlice;
pub use value_writer::ValueWriter;
pub use value_writer_blob::ValueWriterBlob;
