use std::error::Error;

use rapid_ini::{parse, IniContainer};

fn main() -> Result<(), Box<dyn Error>> {
    // Create example INI content
    let ini_content = r#"
; connection settings
[Database.Connection]
HostName=db.example.com
Port=5432
Options=

[General]
api_mode=false
default_url=
"#;

    // Parse and hand the result to the container
    let mut container = IniContainer::from(parse(ini_content));

    // List every property
    for (key, value) in container.properties() {
        println!("{}={}", key, value);
    }

    // Exact lookups fail for missing keys
    println!(
        "Host: {}",
        container.get_section_value("Database.Connection", "HostName")?
    );
    if let Err(e) = container.get_value("Database.Connection.User") {
        println!("Lookup failed: {}", e);
    }

    // Lookups with a fallback never fail
    println!(
        "User: {}",
        container.get_value_or("Database.Connection.User", "postgres")
    );

    // Modify values
    container.set_property("General.api_mode", "true");
    println!("API mode: {}", container.get_section_value("General", "api_mode")?);

    // Export to string
    println!("\nExported INI:\n{}", container.to_ini_string()?);

    Ok(())
}
