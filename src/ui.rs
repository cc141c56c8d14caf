pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_parsed_version(base: &str, revision: Option<u64>) {
    match revision {
        Some(rev) => {
            println!("base:     \x1b[32m{}\x1b[0m", base);
            println!("revision: \x1b[32m{}\x1b[0m", rev);
        }
        None => {
            println!("base:     \x1b[32m{}\x1b[0m", base);
            println!("revision: none");
        }
    }
}
