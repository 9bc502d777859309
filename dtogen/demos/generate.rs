//! Demo: transfer types from the attribute macro and from an XML model schema.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate`

use dtogen::prelude::*;

#[generate_dto]
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[generate_dto(nested_dtos = ["Address"])]
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub address: Address,
    pub previous_addresses: Vec<Address>,
    pub mailing_address: Option<Address>,
}

const SCHEMA: &str = r#"<dtoSchema package="shop">
    <model name="ProductItem" kind="struct">
        <property name="id" type="String"/>
        <property name="price" type="f64"/>
    </model>
    <model name="Order" kind="struct">
        <directive>
            <argument label="nestedDTOs">["ProductItem"]</argument>
        </directive>
        <property name="number" type="u64"/>
        <property name="items" type="[ProductItem]"/>
        <property name="gift" type="ProductItem?"/>
    </model>
</dtoSchema>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let person = Person {
        name: "Ada".to_string(),
        age: 36,
        address: Address {
            street: "12 St James's Square".to_string(),
            city: "London".to_string(),
        },
        previous_addresses: Vec::new(),
        mailing_address: None,
    };

    let dto = person.to_dto();
    println!("Model:    {person:?}");
    println!("Transfer: {dto:?}");
    println!("Restored: {:?}", Person::from_dto(&dto));
    println!();

    let code = dtogen::codegen::generate_from_xml(SCHEMA)?;
    println!("{code}");

    Ok(())
}
