//! Checking whole objects field by field

use verity_validator::prelude::*;

struct Account {
    first_name: String,
    email: String,
    age_in_years: i32,
}

fn main() -> Result<(), FieldError> {
    let registry = FieldRegistry::new()
        .register("firstName", |a: &Account| a.first_name.clone())
        .register("email", |a: &Account| a.email.clone())
        .register("ageInYears", |a: &Account| a.age_in_years);

    let checker = CompositeChecker::builder()
        .registered_field(&registry, "firstName", [non_blank::<String>(), name()])?
        .registered_field(&registry, "email", [min_length::<String>(3)])?
        .registered_field(&registry, "ageInYears", [minimum(18)])?
        .build();

    let account = Account {
        first_name: "Ada!".into(),
        email: "ada@example.com".into(),
        age_in_years: 16,
    };

    for failed in checker.check(&account)? {
        println!("✗ {failed}");
    }

    Ok(())
}
