mod counts;
mod csv;
mod format;
mod json;
mod table;

pub(crate) use counts::sorted_counts;
pub(crate) use csv::{output_counts_csv, output_reviews_csv, output_values_csv};
pub(crate) use format::NumberFormat;
pub(crate) use json::{
    ReportData, output_counts_json, output_report_json, output_reviews_json, output_values_json,
};
pub(crate) use table::{
    TableOptions, build_count_table, build_review_table, build_value_table, print_section,
};
