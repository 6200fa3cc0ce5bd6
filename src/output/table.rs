use comfy_table::{Cell, Color, Table};

use crate::core::Review;
use crate::output::counts::ProductCount;
use crate::output::format::{
    NumberFormat, create_styled_table, format_number, format_price, header_cell, optional_cell,
    right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

/// Bold section title printed above each table
pub(crate) fn print_section(title: &str, use_color: bool) {
    if use_color {
        println!("\n  \x1b[1;36m{title}\x1b[0m\n");
    } else {
        println!("\n  {title}\n");
    }
}

pub(crate) fn build_review_table(reviews: &[&Review], options: TableOptions) -> Table {
    let c = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", c),
        header_cell("Product", c),
        header_cell("Category", c),
        header_cell("Price", c),
        header_cell("Title", c),
    ]);

    let price_color = if c { Some(Color::Green) } else { None };

    for review in reviews {
        table.add_row(vec![
            right_cell(&review.id.to_string(), None, false),
            Cell::new(&review.product_id),
            optional_cell(review.category.as_deref(), c),
            right_cell(
                &format_price(review.price, options.number_format),
                price_color,
                false,
            ),
            optional_cell(review.title.as_deref(), c),
        ]);
    }

    table
}

pub(crate) fn build_count_table(counts: &[ProductCount<'_>], options: TableOptions) -> Table {
    let c = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Product", c), header_cell("Reviews", c)]);

    let mut total = 0usize;
    for entry in counts {
        total += entry.reviews;
        table.add_row(vec![
            Cell::new(entry.product_id),
            right_cell(&format_number(entry.reviews, options.number_format), None, false),
        ]);
    }

    let total_color = if c { Some(Color::Yellow) } else { None };
    table.add_row(vec![
        styled_cell("Total", total_color, true),
        right_cell(
            &format_number(total, options.number_format),
            total_color,
            true,
        ),
    ]);

    table
}

/// Single-column table of plain values (titles, product ids)
pub(crate) fn build_value_table(header: &str, values: &[String], options: TableOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell(header, options.use_color)]);
    for value in values {
        table.add_row(vec![Cell::new(value)]);
    }
    table
}
