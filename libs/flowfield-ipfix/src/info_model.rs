use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::decode::decode;
use crate::error::DecodeError;
use crate::field_type::FieldType;
use crate::value::Value;

mod iana;

/// Enterprise number of the IANA-assigned element space.
pub const IANA_ENTERPRISE_ID: u32 = 0;

// ════════════════════════════════════════════════════════════════
//  Element Key & Descriptor
// ════════════════════════════════════════════════════════════════

/// `(enterprise number, element id)` as carried in a template field specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementKey {
    pub enterprise_id: u32,
    pub field_id: u16,
}

impl ElementKey {
    pub const fn new(enterprise_id: u32, field_id: u16) -> Self {
        Self { enterprise_id, field_id }
    }

    pub const fn iana(field_id: u16) -> Self {
        Self::new(IANA_ENTERPRISE_ID, field_id)
    }
}

/// Information element descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoElement {
    pub name: String,
    pub field_id: u16,
    pub field_type: FieldType,
}

/// A decoded field together with the element it was resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField<'m, 'b> {
    pub key: ElementKey,
    /// `None` when the element is not in the model.
    pub name: Option<&'m str>,
    pub value: Value<'b>,
}

// ════════════════════════════════════════════════════════════════
//  Information Model
// ════════════════════════════════════════════════════════════════

/// Immutable lookup table `(enterprise, element id) -> descriptor`.
#[derive(Debug, Clone, Default)]
pub struct InfoModel {
    elements: HashMap<ElementKey, InfoElement>,
}

static IANA_MODEL: OnceLock<InfoModel> = OnceLock::new();

impl InfoModel {
    /// Builds a model from `(enterprise, element)` pairs. A later entry
    /// replaces an earlier one with the same key.
    pub fn from_elements(elements: impl IntoIterator<Item = (u32, InfoElement)>) -> Self {
        let elements = elements
            .into_iter()
            .map(|(enterprise_id, el)| (ElementKey::new(enterprise_id, el.field_id), el))
            .collect();
        Self { elements }
    }

    /// IANA-assigned elements (enterprise 0).
    pub fn iana() -> &'static InfoModel {
        IANA_MODEL.get_or_init(|| {
            Self::from_elements(iana::ELEMENTS.iter().map(|&(field_id, name, field_type)| {
                (
                    IANA_ENTERPRISE_ID,
                    InfoElement { name: name.to_string(), field_id, field_type },
                )
            }))
        })
    }

    pub fn get(&self, key: ElementKey) -> Option<&InfoElement> {
        self.elements.get(&key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Present elements of `enterprise_id` whose id falls in `ids`,
    /// in ascending id order.
    pub fn iter_range(
        &self,
        enterprise_id: u32,
        ids: RangeInclusive<u16>,
    ) -> impl Iterator<Item = &InfoElement> + '_ {
        ids.filter_map(move |field_id| self.get(ElementKey::new(enterprise_id, field_id)))
    }

    /// Resolves the element type and decodes `bytes`. Elements missing from
    /// the model decode as [`FieldType::Unknown`].
    pub fn interpret<'m, 'b>(
        &'m self,
        key: ElementKey,
        bytes: &'b [u8],
    ) -> Result<DecodedField<'m, 'b>, DecodeError> {
        let (name, field_type) = match self.get(key) {
            Some(el) => (Some(el.name.as_str()), el.field_type),
            None => {
                tracing::debug!(
                    enterprise_id = key.enterprise_id,
                    field_id = key.field_id,
                    len = bytes.len(),
                    "element not in information model, passing through"
                );
                (None, FieldType::Unknown)
            }
        };
        let value = decode(bytes, field_type)?;
        Ok(DecodedField { key, name, value })
    }
}
