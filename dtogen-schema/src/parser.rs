//! XML model schema parser.
//!
//! This module parses an XML model schema into raw [`Declaration`]s and
//! directive arguments, one [`ModelDef`] per `<model>` element:
//!
//! ```xml
//! <dtoSchema package="shop">
//!     <model name="Person" kind="class">
//!         <directive>
//!             <argument label="nestedDTOs">["Address"]</argument>
//!         </directive>
//!         <property name="name" type="String"/>
//!         <property name="address" type="Address"/>
//!         <computed name="display" type="String"/>
//!         <method name="greet"/>
//!     </model>
//! </dtoSchema>
//! ```
//!
//! Attribute values and argument bodies are unescaped, so property types may
//! use either the shorthand `[T]` and `T?` forms or escaped Rust generics
//! such as `Option&lt;Address&gt;`. Argument bodies (text or CDATA) are
//! handed to [`parse_argument`].

use crate::declaration::{DeclKind, Declaration, DirectiveArgument, Member, ModelDef, Schema};
use crate::error::ParseError;
use crate::expr::parse_argument;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// Parses an XML model schema from a string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or contains invalid schema elements.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut schema: Option<Schema> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match (name, schema.as_mut()) {
                    ("dtoSchema", None) => {
                        schema = Some(parse_schema_attributes(e)?);
                    }
                    ("model", Some(schema)) => {
                        let model = parse_model(&mut reader, e, false)?;
                        schema.add_model(model);
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match (name, schema.as_mut()) {
                    ("dtoSchema", None) => {
                        schema = Some(parse_schema_attributes(e)?);
                    }
                    ("model", Some(schema)) => {
                        let model = parse_model(&mut reader, e, true)?;
                        schema.add_model(model);
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let schema = schema.ok_or_else(|| ParseError::structure("No dtoSchema element found"))?;
    tracing::debug!(
        package = %schema.package,
        models = schema.models.len(),
        "parsed model schema"
    );
    Ok(schema)
}

/// Parses the dtoSchema element attributes.
fn parse_schema_attributes(e: &BytesStart<'_>) -> Result<Schema, ParseError> {
    let mut package = String::new();

    for attr in e.attributes().flatten() {
        let (key, value) = attribute(&attr)?;
        if key == "package" {
            package = value;
        }
    }

    Ok(Schema::new(package))
}

/// Parses a model element and its children.
fn parse_model(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    is_empty: bool,
) -> Result<ModelDef, ParseError> {
    let mut name: Option<String> = None;
    let mut kind = DeclKind::Class;

    for attr in e.attributes().flatten() {
        let (key, value) = attribute(&attr)?;
        match key.as_str() {
            "name" => name = Some(value),
            "kind" => {
                kind = DeclKind::parse(&value)
                    .ok_or_else(|| ParseError::invalid_attr("model", "kind", value))?
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("model", "name"))?;
    let mut model = ModelDef {
        declaration: Declaration::new(kind, name),
        arguments: Vec::new(),
    };

    if is_empty {
        return Ok(model);
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                match tag_name {
                    "directive" => {
                        let arguments = parse_directive(reader)?;
                        model.arguments.extend(arguments);
                    }
                    _ => {
                        let member = parse_member(tag_name, e)?;
                        skip_to_end(reader)?;
                        if let Some(member) = member {
                            model.declaration.add_member(member);
                        }
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if let Some(member) = parse_member(tag_name, e)? {
                    model.declaration.add_member(member);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unterminated model '{}'",
                    model.declaration.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(model)
}

/// Parses a member element (property, computed, method, nested).
///
/// Unknown elements are ignored.
fn parse_member(tag_name: &str, e: &BytesStart<'_>) -> Result<Option<Member>, ParseError> {
    let mut name: Option<String> = None;
    let mut type_annotation: Option<String> = None;

    for attr in e.attributes().flatten() {
        let (key, value) = attribute(&attr)?;
        match key.as_str() {
            "name" => name = Some(value),
            "type" => type_annotation = Some(value),
            _ => {}
        }
    }

    let member = match tag_name {
        "property" => Member::Stored {
            name: name.ok_or_else(|| ParseError::missing_attr(tag_name, "name"))?,
            type_annotation: type_annotation.filter(|t| !t.trim().is_empty()),
        },
        "computed" => Member::Computed {
            name: name.ok_or_else(|| ParseError::missing_attr(tag_name, "name"))?,
        },
        "method" => Member::Method {
            name: name.ok_or_else(|| ParseError::missing_attr(tag_name, "name"))?,
        },
        "nested" => Member::NestedType {
            name: name.ok_or_else(|| ParseError::missing_attr(tag_name, "name"))?,
        },
        _ => return Ok(None),
    };

    Ok(Some(member))
}

/// Parses the arguments of a directive element.
fn parse_directive(reader: &mut Reader<&[u8]>) -> Result<Vec<DirectiveArgument>, ParseError> {
    let mut arguments = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "argument" {
                    let label = argument_label(e)?;
                    let text = read_text(reader)?;
                    arguments.push(DirectiveArgument {
                        label,
                        value: parse_argument(&text),
                    });
                } else {
                    skip_to_end(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "argument" {
                    let label = argument_label(e)?;
                    arguments.push(DirectiveArgument {
                        label,
                        value: parse_argument(""),
                    });
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(ParseError::structure("unterminated directive")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(arguments)
}

fn argument_label(e: &BytesStart<'_>) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        let (key, value) = attribute(&attr)?;
        if key == "label" {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Returns an attribute's key and its unescaped value.
fn attribute(attr: &Attribute<'_>) -> Result<(String, String), ParseError> {
    let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
    let value = attr.unescape_value()?.into_owned();
    Ok((key, value))
}

/// Resolves a character or predefined entity reference.
fn resolve_reference(reference: &BytesRef<'_>, text: &mut String) -> Result<(), ParseError> {
    if let Some(ch) = reference.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }
    let name = std::str::from_utf8(reference)?;
    let value = resolve_predefined_entity(name)
        .ok_or_else(|| ParseError::structure(format!("unknown entity '&{name};'")))?;
    text.push_str(value);
    Ok(())
}

/// Reads raw text and CDATA content up to the matching end tag.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String, ParseError> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => text.push_str(std::str::from_utf8(t.as_ref())?),
            Ok(Event::CData(ref t)) => text.push_str(std::str::from_utf8(t.as_ref())?),
            Ok(Event::GeneralRef(ref r)) => resolve_reference(r, &mut text)?,
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(ParseError::structure("unterminated argument")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
