//! Conversion capabilities between model types and transfer types.
//!
//! This module provides the [`DtoConvertible`] and [`Dto`] traits. The two
//! traits point at each other through their associated types, so a model and
//! its transfer type always form a closed pair.

/// Capability of a model type that has a generated transfer type.
///
/// Both operations are one-line delegations in generated code: the forward
/// conversion calls [`Dto::from_model`] and the constructor calls the
/// inherent `from_dto` constructor emitted next to the model.
///
/// # Example
/// ```ignore
/// #[generate_dto(nested_dtos = ["Address"])]
/// pub struct Person {
///     pub name: String,
///     pub address: Address,
/// }
///
/// let dto: PersonDTO = person.to_dto();
/// let back = Person::from_dto(&dto);
/// ```
pub trait DtoConvertible: Sized {
    /// Transfer type generated for this model.
    type Dto: Dto<Model = Self>;

    /// Converts this model into its transfer type (forward conversion).
    fn to_dto(&self) -> Self::Dto;

    /// Builds a model from its transfer type.
    fn from_dto(dto: &Self::Dto) -> Self;
}

/// Capability of a generated transfer type.
///
/// Transfer types are plain data: structurally comparable and safe to share
/// across threads.
pub trait Dto: Clone + PartialEq + Send + Sync + Sized {
    /// Model type this transfer type mirrors.
    type Model: DtoConvertible<Dto = Self>;

    /// Builds a transfer value from a model instance.
    fn from_model(model: &Self::Model) -> Self;

    /// Converts this transfer value back into its model (reverse conversion).
    fn to_model(&self) -> Self::Model;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-written pair mirroring what the generator emits.
    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        label: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TagDTO {
        label: String,
    }

    impl Tag {
        fn from_dto(dto: &TagDTO) -> Self {
            Self {
                label: dto.label.clone(),
            }
        }
    }

    impl DtoConvertible for Tag {
        type Dto = TagDTO;

        fn to_dto(&self) -> TagDTO {
            TagDTO::from_model(self)
        }

        fn from_dto(dto: &TagDTO) -> Self {
            Tag::from_dto(dto)
        }
    }

    impl Dto for TagDTO {
        type Model = Tag;

        fn from_model(model: &Tag) -> Self {
            Self {
                label: model.label.clone(),
            }
        }

        fn to_model(&self) -> Tag {
            Tag::from_dto(self)
        }
    }

    fn round_trip<M>(model: &M) -> M
    where
        M: DtoConvertible,
    {
        model.to_dto().to_model()
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_forward_conversion() {
        let tag = Tag {
            label: "urgent".to_string(),
        };
        let dto = tag.to_dto();
        assert_eq!(dto.label, "urgent");
    }

    #[test]
    fn test_reverse_conversion() {
        let dto = TagDTO {
            label: "later".to_string(),
        };
        let tag = dto.to_model();
        assert_eq!(tag.label, "later");
    }

    #[test]
    fn test_trait_constructor_delegates_to_inherent() {
        let dto = TagDTO {
            label: "inherent".to_string(),
        };
        let tag = <Tag as DtoConvertible>::from_dto(&dto);
        assert_eq!(tag, Tag::from_dto(&dto));
    }

    #[test]
    fn test_generic_round_trip() {
        let tag = Tag {
            label: "round".to_string(),
        };
        assert_eq!(round_trip(&tag), tag);
    }

    #[test]
    fn test_dto_is_send_sync() {
        assert_send_sync::<TagDTO>();
    }
}
