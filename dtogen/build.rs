fn main() -> Result<(), Box<dyn std::error::Error>> {
    dtogen_codegen::Builder::new("tests/schemas/inventory.xml")
        .strict_nested(true)
        .generate()?;
    Ok(())
}
