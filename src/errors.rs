// Create the Error, ErrorKind, ResultExt, and Result types.
// Invalid generation options are reported through these kinds before any grid is built.
// A path that cannot be generated is not an error, see `generators::generate_path`.
use error_chain::*;

error_chain! {

    errors {
        InvalidRows(rows: usize) {
            description("invalid number of rows")
            display("Invalid number of rows '{}'. Number of rows must be a positive integer.", rows)
        }
        InvalidColumns(columns: usize) {
            description("invalid number of columns")
            display("Invalid number of columns '{}'. Number of columns must be a positive integer.",
                    columns)
        }
        GridTooLarge(rows: usize, columns: usize) {
            description("grid too large")
            display("Grid of '{}' rows by '{}' columns is too large. Rows and columns must each fit in a u32 and every cell must fit in memory.",
                    rows, columns)
        }
        InvalidMaxPaths(max_paths: usize) {
            description("invalid maximum number of paths")
            display("Invalid maximum number of paths '{}'. Maximum number of paths must be a positive integer.",
                    max_paths)
        }
        InvalidStartRow(start_row: u32, rows: usize) {
            description("invalid start row")
            display("Invalid start row '{}'. Start row must be between zero (inclusive) and the number of rows '{}' (exclusive).",
                    start_row, rows)
        }
        InvalidStartColumn(start_column: u32, columns: usize) {
            description("invalid start column")
            display("Invalid start column '{}'. Start column must be between zero (inclusive) and the number of columns '{}' (exclusive).",
                    start_column, columns)
        }
        NoneEndingSide {
            description("ending side is none")
            display("Ending side cannot be 'Direction::None'.")
        }
        InvalidGridCoordinate(row: u32, column: u32) {
            description("grid coordinate out of range")
            display("Grid coordinate (row '{}', column '{}') lies outside the grid.", row, column)
        }
        UnrecognizedDirection(name: String) {
            description("unrecognized direction")
            display("Direction '{}' was not recognized. Expected one of up, down, left, right.",
                    name)
        }
    }
}
