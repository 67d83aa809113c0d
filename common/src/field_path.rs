//! Fixed mapping between hierarchy levels and resource classification fields.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// Deepest level the classification hierarchy supports.
pub const MAX_HIERARCHY_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldPath {
    ResourceType,
    Category,
    Subcategory,
    DataType,
    Level5,
}

impl FieldPath {
    pub const ALL: [FieldPath; 5] = [
        FieldPath::ResourceType,
        FieldPath::Category,
        FieldPath::Subcategory,
        FieldPath::DataType,
        FieldPath::Level5,
    ];

    /// Level 1 is `resource_type`, level 5 is `level5`; anything else has no field.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(FieldPath::ResourceType),
            2 => Some(FieldPath::Category),
            3 => Some(FieldPath::Subcategory),
            4 => Some(FieldPath::DataType),
            5 => Some(FieldPath::Level5),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            FieldPath::ResourceType => 1,
            FieldPath::Category => 2,
            FieldPath::Subcategory => 3,
            FieldPath::DataType => 4,
            FieldPath::Level5 => 5,
        }
    }

    /// Wire name of the field on a [`Resource`].
    pub fn field_name(self) -> &'static str {
        match self {
            FieldPath::ResourceType => "resource_type",
            FieldPath::Category => "category",
            FieldPath::Subcategory => "subcategory",
            FieldPath::DataType => "data_type",
            FieldPath::Level5 => "level5",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FieldPath::ResourceType => "Resource type",
            FieldPath::Category => "Category",
            FieldPath::Subcategory => "Subcategory",
            FieldPath::DataType => "Data type",
            FieldPath::Level5 => "Level 5",
        }
    }

    pub fn value_of(self, resource: &Resource) -> Option<&str> {
        let value = match self {
            FieldPath::ResourceType => &resource.resource_type,
            FieldPath::Category => &resource.category,
            FieldPath::Subcategory => &resource.subcategory,
            FieldPath::DataType => &resource.data_type,
            FieldPath::Level5 => &resource.level5,
        };
        value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_round_trip_through_fields() {
        for field in FieldPath::ALL {
            assert_eq!(FieldPath::from_level(field.level()), Some(field));
        }
        assert_eq!(FieldPath::from_level(0), None);
        assert_eq!(FieldPath::from_level(MAX_HIERARCHY_LEVEL + 1), None);
    }

    #[test]
    fn accessor_reads_the_matching_field() {
        let resource = Resource {
            subcategory: Some("Bacteria".to_string()),
            ..Default::default()
        };
        assert_eq!(FieldPath::Subcategory.value_of(&resource), Some("Bacteria"));
        assert_eq!(FieldPath::Category.value_of(&resource), None);
    }
}
