//! Basic usage example for verity-validator

use verity_validator::prelude::*;

fn create_store(store_name: &str, phone: &str, capacity: u32) -> Result<String, ValidationFailure> {
    throwing()
        .check(&non_blank::<str>().and(name()), store_name)
        .check(&lax_phone_number::<str>(), phone)
        .check(&minimum(1_u32), &capacity)
        .then_with(|| Ok(format!("{store_name} ({capacity} seats)")))
}

fn main() {
    match create_store("Main St", "+447700900584", 40) {
        Ok(store) => println!("✓ created {store}"),
        Err(e) => println!("✗ {e}"),
    }

    match create_store("<Main St>", "call us", 0) {
        Ok(store) => println!("✓ created {store}"),
        Err(e) => println!("✗ {e}"),
    }

    let valid = boolean()
        .check(&is_true(), &true)
        .check(&nullable(min_length::<String>(3)), &None)
        .then(true);
    println!("\nboolean result: {valid}");
}
