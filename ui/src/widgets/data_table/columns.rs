//! Column descriptors for [`super::DataTable`].
//!
//! A column is a header plus one of a fixed set of cell kinds. Every kind
//! except [`ColumnKind::Custom`] reads its value through an accessor, so a
//! column can never refer to a field the row does not have.

use std::fmt;

use egui::Ui;
use ustr::Ustr;

/// A raw value read from a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Text shown by plain cells. `Empty` renders as an empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipColor {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipVariant {
    #[default]
    Filled,
    Outlined,
}

/// Visual overrides for a chip cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChipProps {
    pub color: ChipColor,
    pub variant: ChipVariant,
}

impl ChipProps {
    pub fn color(color: ChipColor) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn outlined(mut self) -> Self {
        self.variant = ChipVariant::Outlined;
        self
    }
}

pub type Accessor<R> = Box<dyn Fn(&R) -> CellValue>;
pub type ChipPropsFn = Box<dyn Fn(&CellValue) -> ChipProps>;
pub type CellRenderer<R> = Box<dyn Fn(&mut Ui, &R)>;

/// How a column renders its cells.
pub enum ColumnKind<R> {
    /// Raw value text.
    Plain(Accessor<R>),
    /// Value rendered as a chip; `props` picks the style from the value.
    Chip {
        accessor: Accessor<R>,
        props: Option<ChipPropsFn>,
    },
    /// Value parsed as a date and shown in the table's locale.
    Date(Accessor<R>),
    /// Value parsed as a number and shown with two decimals.
    Currency { accessor: Accessor<R>, symbol: String },
    /// Caller-rendered cell.
    Custom(CellRenderer<R>),
}

impl<R> fmt::Debug for ColumnKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain(_) => "Plain",
            Self::Chip { .. } => "Chip",
            Self::Date(_) => "Date",
            Self::Currency { .. } => "Currency",
            Self::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct Column<R> {
    /// Stable key of the column.
    pub field: Ustr,
    pub header: String,
    pub align: CellAlign,
    pub min_width: Option<f32>,
    pub kind: ColumnKind<R>,
}

impl<R> Column<R> {
    pub fn new(field: &str, header: impl Into<String>, kind: ColumnKind<R>) -> Self {
        Self {
            field: Ustr::from(field),
            header: header.into(),
            align: CellAlign::Left,
            min_width: None,
            kind,
        }
    }

    pub fn text(
        field: &str,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self::new(field, header, ColumnKind::Plain(Box::new(accessor)))
    }

    pub fn chip(
        field: &str,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self::new(
            field,
            header,
            ColumnKind::Chip {
                accessor: Box::new(accessor),
                props: None,
            },
        )
    }

    pub fn chip_with(
        field: &str,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
        props: impl Fn(&CellValue) -> ChipProps + 'static,
    ) -> Self {
        Self::new(
            field,
            header,
            ColumnKind::Chip {
                accessor: Box::new(accessor),
                props: Some(Box::new(props)),
            },
        )
    }

    pub fn date(
        field: &str,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self::new(field, header, ColumnKind::Date(Box::new(accessor)))
    }

    pub fn currency(
        field: &str,
        header: impl Into<String>,
        symbol: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self::new(
            field,
            header,
            ColumnKind::Currency {
                accessor: Box::new(accessor),
                symbol: symbol.into(),
            },
        )
        .align(CellAlign::Right)
    }

    pub fn custom(
        field: &str,
        header: impl Into<String>,
        render: impl Fn(&mut Ui, &R) + 'static,
    ) -> Self {
        Self::new(field, header, ColumnKind::Custom(Box::new(render)))
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Value read by this column, `None` for custom columns.
    pub fn value(&self, row: &R) -> Option<CellValue> {
        match &self.kind {
            ColumnKind::Plain(accessor)
            | ColumnKind::Chip { accessor, .. }
            | ColumnKind::Date(accessor)
            | ColumnKind::Currency { accessor, .. } => Some(accessor(row)),
            ColumnKind::Custom(_) => None,
        }
    }
}
