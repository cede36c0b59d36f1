use todo_store::schema::TODO_TABLE_SQL;
use todo_store::TodoStore;

/// Best-effort startup connectivity probe. Logs diagnostic guidance on
/// failure; never gates the listener.
pub async fn test_connection(store: &TodoStore) -> bool {
    println!("Testing Supabase connection...");
    println!("URL: {}", store.project_url());

    match store.check_connection().await {
        Ok(()) => {
            println!("✅ Supabase connected successfully");
            true
        }
        Err(e) => {
            eprintln!("❌ Supabase connection failed:");
            eprintln!("Error message: {}", e);
            if let Some(code) = e.code() {
                eprintln!("Error code: {}", code);
            }
            if let Some(details) = e.details() {
                eprintln!("Error details: {}", details);
            }
            if let Some(hint) = e.hint() {
                eprintln!("Error hint: {}", hint);
            }

            if e.is_missing_table() {
                println!("📝 Todo table does not exist. You need to create it manually.");
                show_table_creation_sql();
            }

            false
        }
    }
}

fn show_table_creation_sql() {
    println!("\n🔧 Please run this SQL manually in your Supabase SQL Editor:");
    println!("{}", "=".repeat(60));
    println!("{}", TODO_TABLE_SQL);
    println!("{}", "=".repeat(60));
}
