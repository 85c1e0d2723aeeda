use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::validation::{self, WithMessage};
use catalog_core::{AggregateId, AggregateRoot, DomainResult, Entity};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

const NAME_REQUIRED: &str = "Name should not be empty or null";
const NAME_TOO_SHORT: &str = "Name should be at least 3 characters long";
const NAME_TOO_LONG: &str = "Name should be less or equal 255 characters long";
const DESCRIPTION_REQUIRED: &str = "Description should not be empty or null";
const DESCRIPTION_TOO_LONG: &str = "Description should be less or equal 10.000 characters long";

/// Category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub AggregateId);

impl CategoryId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(AggregateId::new())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for CategoryId {
    type Err = catalog_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AggregateId>().map(Self)
    }
}

/// Aggregate root: Category.
///
/// Fields are private; every constructor and mutator validates before writing,
/// so a `Category` value always satisfies its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Self::new_with_status(name, description, true)
    }

    pub fn new_with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        Self::from_parts(Some(name.into()), Some(description.into()), Some(is_active))
    }

    /// Create a category from boundary input where any field may be missing.
    ///
    /// Rules run in a fixed order (name, then description) and the first
    /// failure is returned. A missing `is_active` means active.
    pub fn from_parts(
        name: Option<String>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> DomainResult<Self> {
        let name = Self::validate_name(name.as_deref())?.to_owned();
        let description = Self::validate_description(description.as_deref())?.to_owned();

        Ok(Self {
            id: CategoryId::generate(),
            name,
            description,
            is_active: is_active.unwrap_or(true),
            created_at: Utc::now(),
        })
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename the category and optionally replace its description.
    ///
    /// Both values are validated before either field is written; on error the
    /// category is left as it was. `None` keeps the current description.
    pub fn update(&mut self, name: &str, description: Option<&str>) -> DomainResult<()> {
        let name = Self::validate_name(Some(name))?;
        let description = description
            .map(|d| Self::validate_description(Some(d)))
            .transpose()?;

        self.name = name.to_owned();
        if let Some(description) = description {
            self.description = description.to_owned();
        }
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    fn validate_name(name: Option<&str>) -> DomainResult<&str> {
        let name = validation::not_null_or_empty(name, "Name").with_message(NAME_REQUIRED)?;
        validation::min_length(name, NAME_MIN_LENGTH, "Name").with_message(NAME_TOO_SHORT)?;
        validation::max_length(name, NAME_MAX_LENGTH, "Name").with_message(NAME_TOO_LONG)?;
        Ok(name)
    }

    fn validate_description(description: Option<&str>) -> DomainResult<&str> {
        let description =
            validation::not_null(description, "Description").with_message(DESCRIPTION_REQUIRED)?;
        validation::max_length(description, DESCRIPTION_MAX_LENGTH, "Description")
            .with_message(DESCRIPTION_TOO_LONG)?;
        Ok(description)
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {}
