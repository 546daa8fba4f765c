use redb::TableDefinition;

/// Table for client-side key-value state.
/// Key: entry name (e.g. "favoriteRecipes")
/// Value: serialized value as UTF-8 text
pub const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");
