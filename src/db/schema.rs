//! Table descriptors for every genesis entity kind.
//!
//! The descriptors are the single source of truth for table and column
//! names. Column order matters: bulk writers submit rows positionally and
//! the read API selects columns in declaration order.

/// Semantic column type, mapped onto a SQLite storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    /// Arbitrary-precision decimal kept in its textual form.
    Numeric,
}

impl ColumnType {
    pub fn sql(&self) -> &'static str {
        match self {
            ColumnType::Text | ColumnType::Numeric => "TEXT",
            ColumnType::Integer => "INTEGER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnType,
    pub nullable: bool,
    /// `(table, column)` this column references.
    pub references: Option<(&'static str, &'static str)>,
}

impl Column {
    pub const fn required(name: &'static str, kind: ColumnType) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            references: None,
        }
    }

    pub const fn optional(name: &'static str, kind: ColumnType) -> Self {
        Self {
            name,
            kind,
            nullable: true,
            references: None,
        }
    }

    pub const fn referencing(self, table: &'static str, column: &'static str) -> Self {
        Self {
            references: Some((table, column)),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub primary_key: &'static str,
    pub indexes: &'static [&'static str],
}

pub const ACCOUNTS: Table = Table {
    name: "accounts",
    columns: &[
        Column::required("id", ColumnType::Text),
        Column::required("chain_id", ColumnType::Text),
    ],
    primary_key: "id",
    indexes: &["id", "chain_id"],
};

pub const CONTRACTS: Table = Table {
    name: "contracts",
    columns: &[
        Column::required("id", ColumnType::Text),
        Column::required("interface_guess", ColumnType::Text),
        Column::optional("store_message_id", ColumnType::Text),
        Column::optional("instantiate_message_id", ColumnType::Text),
    ],
    primary_key: "id",
    indexes: &["id"],
};

pub const GENESIS_BALANCES: Table = Table {
    name: "genesis_balances",
    columns: &[
        Column::required("id", ColumnType::Text),
        Column::required("account_id", ColumnType::Text).referencing("accounts", "id"),
        Column::required("amount", ColumnType::Numeric),
        Column::required("denom", ColumnType::Text),
    ],
    primary_key: "id",
    indexes: &["id", "account_id"],
};

fn quote(column: &str) -> String {
    format!("\"{}\"", column)
}

impl Table {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn projection(&self, columns: &[&str], qualify: bool) -> String {
        columns
            .iter()
            .map(|c| {
                if qualify {
                    format!("{}.{}", self.name, quote(c))
                } else {
                    quote(c)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn from_list(&self, tables: Option<&[&str]>) -> String {
        match tables {
            Some(tables) if !tables.is_empty() => tables.join(", "),
            _ => self.name.to_string(),
        }
    }

    /// `SELECT` of every declared column. With `qualify` each column is
    /// prefixed with this table's name, as needed when `tables` joins others.
    pub fn select_all(&self, tables: Option<&[&str]>, qualify: bool) -> String {
        format!(
            "SELECT {} FROM {}",
            self.projection(&self.column_names(), qualify),
            self.from_list(tables)
        )
    }

    /// Same projection as [`Table::select_all`], always qualified, filtered by
    /// a caller-supplied condition.
    pub fn select_where(&self, predicate: &str, tables: Option<&[&str]>) -> String {
        format!(
            "SELECT {} FROM {} WHERE {}",
            self.projection(&self.column_names(), true),
            self.from_list(tables),
            predicate
        )
    }

    pub fn select_columns(&self, columns: &[&str]) -> String {
        format!("SELECT {} FROM {}", self.projection(columns, false), self.name)
    }

    pub fn create_table_sql(&self) -> String {
        let mut definitions: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut def = format!("{} {}", quote(c.name), c.kind.sql());
                if c.name == self.primary_key {
                    def.push_str(" PRIMARY KEY");
                } else if !c.nullable {
                    def.push_str(" NOT NULL");
                }
                def
            })
            .collect();

        for c in self.columns {
            if let Some((table, column)) = c.references {
                definitions.push(format!(
                    "FOREIGN KEY ({}) REFERENCES {}({})",
                    quote(c.name),
                    table,
                    quote(column)
                ));
            }
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            definitions.join(",\n    ")
        )
    }

    pub fn create_index_sql(&self) -> Vec<String> {
        self.indexes
            .iter()
            .map(|column| {
                format!(
                    "CREATE INDEX IF NOT EXISTS idx_{}_{} ON {}({})",
                    self.name,
                    column,
                    self.name,
                    quote(column)
                )
            })
            .collect()
    }

    /// Prefix for a multi-row insert; values are appended by the bulk writer.
    pub fn insert_prefix(&self) -> String {
        format!(
            "INSERT INTO {} ({}) ",
            self.name,
            self.projection(&self.column_names(), false)
        )
    }
}
