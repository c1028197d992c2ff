//! Render plan for a [`Body`]: the CSS grid template and the cells in
//! the order the grid expects them (headers first, then row-major data).

use super::Body;

/// Content of the cells shown for a table without rows.
pub const EMPTY_CELL: &str = "—";

/// Background parity of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn of(row_index: usize) -> Self {
        if row_index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell<'a, V> {
    Header(&'a str),
    Data {
        /// `None` when the row has no value for the column.
        value: Option<&'a V>,
        stripe: Stripe,
        row_styles: Option<&'a str>,
    },
    /// Filler shown under each header when there are no rows.
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout<'a, V> {
    /// Value for `grid-template-columns`.
    pub template: String,
    pub cells: Vec<GridCell<'a, V>>,
}

impl<'a, V> GridLayout<'a, V> {
    pub fn of(body: &Body<'a, V>) -> Self {
        let template = body
            .columns
            .iter()
            .map(|column| column.template.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut cells: Vec<GridCell<'a, V>> = body
            .columns
            .iter()
            .map(|column| GridCell::Header(column.name))
            .collect();

        if body.rows.is_empty() {
            cells.extend(body.columns.iter().map(|_| GridCell::Empty));
        } else {
            let rows: &'a [_] = body.rows;
            for (i, row) in rows.iter().enumerate() {
                for column in &body.columns {
                    cells.push(GridCell::Data {
                        value: row.get(column.name),
                        stripe: Stripe::of(i),
                        row_styles: column.row_styles,
                    });
                }
            }
        }

        Self { template, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ColumnStylePatch, Row, TabularData, Template};

    #[test]
    fn headers_precede_row_major_cells() {
        let data = TabularData::new(["ID", "Nombre"])
            .unwrap()
            .add_row(Row::new().cell("ID", 1).cell("Nombre", 10))
            .add_row(Row::new().cell("ID", 2).cell("Extra", 99));
        let body = data.body();
        let layout = GridLayout::of(&body);

        assert_eq!(
            layout.cells,
            vec![
                GridCell::Header("ID"),
                GridCell::Header("Nombre"),
                GridCell::Data { value: Some(&1), stripe: Stripe::Even, row_styles: None },
                GridCell::Data { value: Some(&10), stripe: Stripe::Even, row_styles: None },
                GridCell::Data { value: Some(&2), stripe: Stripe::Odd, row_styles: None },
                GridCell::Data { value: None, stripe: Stripe::Odd, row_styles: None },
            ]
        );
    }

    #[test]
    fn template_joins_column_tracks() {
        let data = TabularData::<u8>::new(["ID", "Nombre", "Acciones"])
            .unwrap()
            .set_column_styles([
                ("Nombre", ColumnStylePatch::template(Template::Auto)),
                ("Acciones", ColumnStylePatch::template(Template::MaxContent)),
            ]);
        let body = data.body();

        assert_eq!(GridLayout::of(&body).template, "min-content auto max-content");
    }

    #[test]
    fn empty_tables_get_one_filler_per_column() {
        let data = TabularData::<u8>::new(["ID", "Nombre", "Techada"]).unwrap();
        let body = data.body();
        let layout = GridLayout::of(&body);

        let fillers = layout
            .cells
            .iter()
            .filter(|cell| matches!(cell, GridCell::Empty))
            .count();
        assert_eq!(fillers, 3);
        assert_eq!(layout.cells.len(), 6);
    }

    #[test]
    fn row_styles_follow_their_column() {
        let data = TabularData::new(["ID"])
            .unwrap()
            .set_column_styles([("ID", ColumnStylePatch::default().row_styles("font-semibold"))])
            .add_row(Row::new().cell("ID", 1));
        let body = data.body();

        match &GridLayout::of(&body).cells[1] {
            GridCell::Data { row_styles, .. } => assert_eq!(*row_styles, Some("font-semibold")),
            other => panic!("unexpected cell {other:?}"),
        }
    }
}
