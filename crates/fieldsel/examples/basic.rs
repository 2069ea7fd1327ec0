//! Basic usage example for fieldsel
//!
//! Run with: cargo run --example basic -p fieldsel

use fieldsel::{Record, SelectError, select, select_all, select_except, select_only};

#[derive(Debug, Record)]
struct Person {
    #[record(col = "nickname", sql = "VARCHAR(32) PRIMARY KEY")]
    nickname: String,
    #[record(col = "first_name", sql = "VARCHAR(64) NOT NULL")]
    first_name: String,
    #[record(col = "last_name", sql = "VARCHAR(64) NOT NULL")]
    last_name: String,
    #[record(col = "age", sql = "INT")]
    age: i32,
}

fn main() -> Result<(), SelectError> {
    let person = Person {
        nickname: "jd".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        age: 21,
    };

    // CREATE TABLE from the `sql` tags.
    let all = select_all(&person)?;
    println!("{}", all.render("CREATE TABLE persons ($table)"));

    // INSERT every field.
    println!(
        "{}  -- args: {:?}",
        all.prepare("INSERT INTO persons (%fields%) VALUES (%vars%)"),
        all.args()
    );

    // UPDATE everything but the key, binding the key last.
    let changes = select_except(&person, &["nickname"])?;
    println!(
        "{}  -- args: {:?}",
        changes.render("UPDATE persons SET $updates WHERE nickname = ?"),
        changes.args_and(&[&person.nickname])
    );

    // SELECT a couple of columns.
    let names = select_only(&person, &["first_name", "last_name"])?;
    println!("{}", names.prepare("SELECT %fields% FROM persons"));

    // Misspelled names are reported, not ignored.
    if let Err(err) = select_only(&person, &["firstname"]) {
        println!("error: {err}");
    }

    // Builder-style: a filter can only be set once.
    match select(&person)?.only(&["age"])?.exclude(&["age"]) {
        Ok(_) => println!("second filter accepted"),
        Err(err) => println!("error: {err}"),
    }

    Ok(())
}
