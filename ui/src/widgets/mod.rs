pub mod data_table;
mod status;

pub use data_table::{
    CellAlign, CellValue, ChipColor, ChipProps, ChipVariant, Column, ColumnKind, DataRow,
    DataTable, Pagination,
};
pub use status::{collection_error, mutation_banner};
