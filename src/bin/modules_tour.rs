// Same-named functions live in different modules; paths and aliases pick
// between them.
//
// Run with: cargo run --bin modules_tour

mod formatting {
    pub fn banner() -> String {
        String::from("formatting library reporting in")
    }
}

mod rendering {
    pub fn banner() -> String {
        String::from("rendering library reporting in")
    }
}

mod company {
    pub mod hr {
        pub fn hire_employee(name: &str) -> String {
            format!("hiring {}", name)
        }
    }
}

// A short alias for the deeply nested module.
use crate::company::hr;

fn main() {
    println!("{}", formatting::banner());
    println!("{}", rendering::banner());
    println!("{}", hr::hire_employee("an engineer"));
}
