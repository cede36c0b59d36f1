//! Schema knowledge the service needs for operator diagnostics.

/// PostgREST error code reported when the todo table does not exist.
pub const MISSING_TABLE_CODE: &str = "PGRST116";

/// Remedial DDL printed when the startup probe finds no todo table.
pub const TODO_TABLE_SQL: &str = r#"
-- Create todo table
CREATE TABLE IF NOT EXISTS todo (
  id SERIAL PRIMARY KEY,
  task TEXT NOT NULL,
  completed BOOLEAN DEFAULT FALSE,
  created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
);

-- Grant permissions
GRANT ALL ON TABLE todo TO authenticated;
GRANT ALL ON TABLE todo TO anon;
GRANT ALL ON SEQUENCE todo_id_seq TO authenticated;
GRANT ALL ON SEQUENCE todo_id_seq TO anon;

-- Enable RLS (Row Level Security)
ALTER TABLE todo ENABLE ROW LEVEL SECURITY;

-- Create policy to allow all operations
CREATE POLICY "Allow all operations" ON todo FOR ALL TO authenticated, anon USING (true);
"#;
