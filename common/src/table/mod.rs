//! Tabular data: an ordered set of uniquely named columns with per-column
//! layout hints, plus rows appended in order.
//!
//! The model is generic over the cell value so the same container feeds
//! the Yew table (cells are `Html`) and plain tests (cells are strings).
//! Tables are built fresh for each render:
//!
//! ```
//! use common::table::{ColumnStylePatch, Row, TabularData, Template};
//!
//! let data = TabularData::new(["ID", "Nombre"])
//!     .unwrap()
//!     .set_column_styles([("Nombre", ColumnStylePatch::template(Template::Auto))])
//!     .add_row(Row::new().cell("ID", 1).cell("Nombre", 10));
//!
//! assert_eq!(data.body().columns.len(), 2);
//! ```

pub mod layout;

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

/// Column name of the loading sentinel table.
pub const LOADING_COLUMN: &str = "Cargando...";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("No se pueden tener columnas duplicadas: {0}")]
    DuplicateColumn(String),
}

/// A CSS `grid-template-columns` track size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Template {
    None,
    #[default]
    MinContent,
    MaxContent,
    Auto,
    Percent(f32),
    Px(f32),
    Rem(f32),
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::None => f.write_str("none"),
            Template::MinContent => f.write_str("min-content"),
            Template::MaxContent => f.write_str("max-content"),
            Template::Auto => f.write_str("auto"),
            Template::Percent(v) => write!(f, "{}%", v),
            Template::Px(v) => write!(f, "{}px", v),
            Template::Rem(v) => write!(f, "{}rem", v),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStyle {
    pub template: Template,
    /// Free-form classes applied to every data cell of the column.
    pub row_styles: Option<String>,
}

/// Partial [`ColumnStyle`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStylePatch {
    pub template: Option<Template>,
    pub row_styles: Option<String>,
}

impl ColumnStylePatch {
    pub fn template(template: Template) -> Self {
        Self {
            template: Some(template),
            row_styles: None,
        }
    }

    pub fn row_styles(mut self, row_styles: impl Into<String>) -> Self {
        self.row_styles = Some(row_styles.into());
        self
    }
}

/// One row, keyed by column name. Keys that are not declared columns are
/// never rendered; declared columns without a key render empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<V>(HashMap<String, V>);

impl<V> Row<V> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn cell(mut self, column: impl Into<String>, value: V) -> Self {
        self.0.insert(column.into(), value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&V> {
        self.0.get(column)
    }
}

impl<V> Default for Row<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Row<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabularData<V> {
    columns: Vec<String>,
    styles: HashMap<String, ColumnStyle>,
    rows: Vec<Row<V>>,
}

/// A declared column with its resolved style, as seen by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBody<'a> {
    pub name: &'a str,
    pub template: Template,
    pub row_styles: Option<&'a str>,
}

/// Read-only projection of a [`TabularData`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body<'a, V> {
    pub columns: Vec<ColumnBody<'a>>,
    pub rows: &'a [Row<V>],
}

impl<V> TabularData<V> {
    /// Creates an empty table with the given columns, each styled
    /// `min-content`.
    pub fn new<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for column in columns {
            let column = column.into();
            if !seen.insert(column.clone()) {
                return Err(TableError::DuplicateColumn(column));
            }
            names.push(column);
        }

        let styles = names
            .iter()
            .map(|name| (name.clone(), ColumnStyle::default()))
            .collect();

        Ok(Self {
            columns: names,
            styles,
            rows: Vec::new(),
        })
    }

    /// The fixed table shown while data is loading: a single auto-sized
    /// column holding `indicator`.
    pub fn loading(indicator: V) -> Self {
        let column = LOADING_COLUMN.to_string();
        let mut styles = HashMap::new();
        styles.insert(
            column.clone(),
            ColumnStyle {
                template: Template::Auto,
                row_styles: None,
            },
        );
        Self {
            columns: vec![column.clone()],
            styles,
            rows: vec![Row::new().cell(column, indicator)],
        }
    }

    /// Merges style patches into the named columns. Undeclared names are
    /// ignored.
    pub fn set_column_styles<I, S>(mut self, patches: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnStylePatch)>,
        S: AsRef<str>,
    {
        for (column, patch) in patches {
            if let Some(style) = self.styles.get_mut(column.as_ref()) {
                if let Some(template) = patch.template {
                    style.template = template;
                }
                if let Some(row_styles) = patch.row_styles {
                    style.row_styles = Some(row_styles);
                }
            }
        }
        self
    }

    pub fn add_row(mut self, row: Row<V>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn add_rows(mut self, rows: impl IntoIterator<Item = Row<V>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn body(&self) -> Body<'_, V> {
        let columns = self
            .columns
            .iter()
            .map(|name| {
                let style = self.styles.get(name);
                ColumnBody {
                    name: name.as_str(),
                    template: style.map(|s| s.template).unwrap_or_default(),
                    row_styles: style.and_then(|s| s.row_styles.as_deref()),
                }
            })
            .collect();

        Body {
            columns,
            rows: &self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, nombre: &'static str) -> Row<String> {
        Row::new()
            .cell("ID", id.to_string())
            .cell("Nombre", nombre.to_string())
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let result = TabularData::<String>::new(["ID", "Nombre", "ID"]);
        assert_eq!(result, Err(TableError::DuplicateColumn("ID".into())));
    }

    #[test]
    fn body_lists_every_column_with_default_style() {
        let data = TabularData::<String>::new(["ID", "Nombre", "Techada"]).unwrap();
        let body = data.body();

        assert_eq!(body.columns.len(), 3);
        assert!(body.columns.iter().all(|c| c.template == Template::MinContent));
        assert!(body.columns.iter().all(|c| c.row_styles.is_none()));
        assert_eq!(body.columns[2].name, "Techada");
    }

    #[test]
    fn style_patches_merge() {
        let data = TabularData::<String>::new(["ID", "Nombre"])
            .unwrap()
            .set_column_styles([
                ("Nombre", ColumnStylePatch::template(Template::Auto)),
                ("Desconocida", ColumnStylePatch::template(Template::Px(10.0))),
            ])
            .set_column_styles([(
                "Nombre",
                ColumnStylePatch::default().row_styles("font-bold"),
            )]);
        let body = data.body();

        assert_eq!(body.columns[1].template, Template::Auto);
        assert_eq!(body.columns[1].row_styles, Some("font-bold"));
        assert_eq!(body.columns.len(), 2);
    }

    #[test]
    fn rows_keep_call_order() {
        let (a, b, c) = (row(1, "A"), row(2, "B"), row(3, "C"));
        let data = TabularData::new(["ID", "Nombre"])
            .unwrap()
            .add_rows([a.clone(), b.clone()])
            .add_row(c.clone());

        assert_eq!(data.body().rows, &[a, b, c]);
    }

    #[test]
    fn body_is_a_pure_projection() {
        let data = TabularData::new(["ID", "Nombre"])
            .unwrap()
            .add_row(row(1, "A"));

        assert_eq!(data.body(), data.body());
    }

    #[test]
    fn loading_table_is_a_single_auto_column() {
        let data = TabularData::loading("...".to_string());
        let body = data.body();

        assert_eq!(body.columns.len(), 1);
        assert_eq!(body.columns[0].name, LOADING_COLUMN);
        assert_eq!(body.columns[0].template, Template::Auto);
        assert_eq!(body.rows[0].get(LOADING_COLUMN).map(String::as_str), Some("..."));
    }

    #[test]
    fn templates_render_as_css_tracks() {
        assert_eq!(Template::MaxContent.to_string(), "max-content");
        assert_eq!(Template::Percent(25.0).to_string(), "25%");
        assert_eq!(Template::Rem(1.5).to_string(), "1.5rem");
    }
}
