use serde_json::Value;

use super::seed;

/// A table the provisioner knows how to create and seed.
pub struct TableDef {
    pub name: &'static str,
    /// Column list placed inside `CREATE TABLE IF NOT EXISTS name ( ... )`.
    pub schema: &'static str,
    /// Rows with camelCase keys, inserted in order into an empty table.
    pub seed: fn() -> Vec<Value>,
}

pub const RETAILERS: TableDef = TableDef {
    name: "retailers",
    schema: r#"
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        company TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        phone TEXT,
        account_status TEXT,
        marketplace_status TEXT,
        join_date TEXT
    "#,
    seed: seed::retailers,
};

pub const VENDORS: TableDef = TableDef {
    name: "vendors",
    schema: r#"
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        business_name TEXT,
        category TEXT,
        email TEXT UNIQUE NOT NULL,
        phone TEXT,
        account_status TEXT,
        marketplace_status TEXT,
        join_date TEXT
    "#,
    seed: seed::vendors,
};

pub const LEADS: TableDef = TableDef {
    name: "leads",
    schema: r#"
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company TEXT NOT NULL,
        contact_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        status TEXT,
        source TEXT,
        value REAL
    "#,
    seed: seed::leads,
};

pub const DEALS: TableDef = TableDef {
    name: "deals",
    schema: r#"
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        company TEXT NOT NULL,
        contact_name TEXT NOT NULL,
        value REAL,
        stage TEXT,
        probability INTEGER,
        close_date TEXT
    "#,
    seed: seed::deals,
};

pub const PROPOSALS: TableDef = TableDef {
    name: "proposals",
    schema: r#"
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        client_name TEXT,
        client_company TEXT,
        value REAL,
        currency TEXT,
        status TEXT,
        valid_until TEXT,
        sent_date TEXT,
        created_at TEXT
    "#,
    seed: seed::proposals,
};

pub const TICKETS: TableDef = TableDef {
    name: "tickets",
    schema: r#"
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        status TEXT,
        type TEXT,
        user_id INTEGER,
        user_type TEXT,
        created_at TEXT
    "#,
    seed: seed::tickets,
};

pub const USER_PROFILE: TableDef = TableDef {
    name: "user_profile",
    schema: r#"
        id INTEGER PRIMARY KEY,
        full_name TEXT,
        email TEXT,
        phone TEXT
    "#,
    seed: seed::user_profile,
};

pub const ALL_TABLES: [&TableDef; 7] = [
    &RETAILERS,
    &VENDORS,
    &LEADS,
    &DEALS,
    &PROPOSALS,
    &TICKETS,
    &USER_PROFILE,
];
